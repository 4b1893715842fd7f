//! Model number to gamut table.

use std::fmt;

use super::Gamut;

/// Which gamut triangle a model uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamutKind {
    A,
    B,
    C,
    /// Unrecognized model; no clamping.
    Full,
}

impl GamutKind {
    pub const fn gamut(self) -> Gamut {
        match self {
            GamutKind::A => Gamut::A,
            GamutKind::B => Gamut::B,
            GamutKind::C => Gamut::C,
            GamutKind::Full => Gamut::FULL,
        }
    }

    pub fn for_model(model: &str) -> Self {
        let model = model.trim_matches(|c: char| c.is_whitespace() || c == '\0');
        MODEL_TABLE
            .iter()
            .find(|(known, _)| *known == model)
            .map(|(_, kind)| *kind)
            .unwrap_or(GamutKind::Full)
    }
}

impl fmt::Display for GamutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamutKind::A => write!(f, "A"),
            GamutKind::B => write!(f, "B"),
            GamutKind::C => write!(f, "C"),
            GamutKind::Full => write!(f, "full"),
        }
    }
}

const MODEL_TABLE: &[(&str, GamutKind)] = &[
    ("LST001", GamutKind::A),
    ("LLC005", GamutKind::A),
    ("LLC006", GamutKind::A),
    ("LLC007", GamutKind::A),
    ("LLC010", GamutKind::A),
    ("LLC011", GamutKind::A),
    ("LLC012", GamutKind::A),
    ("LLC013", GamutKind::A),
    ("LLC014", GamutKind::A),
    ("LCT001", GamutKind::B),
    ("LCT007", GamutKind::B),
    ("LCT002", GamutKind::B),
    ("LCT003", GamutKind::B),
    ("LLM001", GamutKind::B),
    ("LCT010", GamutKind::C),
    ("LCT011", GamutKind::C),
    ("LCT012", GamutKind::C),
    ("LCT014", GamutKind::C),
    ("LCT015", GamutKind::C),
    ("LCT016", GamutKind::C),
    ("LLC020", GamutKind::C),
    ("LST002", GamutKind::C),
];

/// Gamut for the model number a lamp reports.
///
/// Surrounding whitespace and NUL padding are ignored. Unknown models get
/// [`Gamut::FULL`].
pub fn lookup(model: &str) -> Gamut {
    GamutKind::for_model(model).gamut()
}

/// Every model number with a known gamut.
pub fn known_models() -> impl Iterator<Item = (&'static str, GamutKind)> {
    MODEL_TABLE.iter().copied()
}
