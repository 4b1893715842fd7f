//! Errors from reading colors out of text

use std::fmt;

/// A string that is not a `#rgb` or `#rrggbb` color.
///
/// Both variants carry the input as given, so callers can report it without
/// keeping their own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Only hex digits, but neither 3 nor 6 of them.
    WrongDigitCount { input: String, digits: usize },
    /// Something other than a hex digit at `position`, counted in characters
    /// after the optional `#`.
    NotHex { input: String, position: usize },
}

impl ParseColorError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::WrongDigitCount { input, .. }
            | ParseColorError::NotHex { input, .. } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::WrongDigitCount { input, digits } => {
                write!(f, "{input:?} has {digits} hex digits, a color needs 3 or 6")
            }
            ParseColorError::NotHex { input, position } => {
                write!(f, "{input:?} is not a hex color (bad digit {position})")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
