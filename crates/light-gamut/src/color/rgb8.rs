//! 8-bit display color

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A device-independent display color with 8-bit channels.
///
/// Lamps have no notion of transparency, so alpha is not stored and always
/// reads as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Alpha of every color.
    pub const ALPHA: u8 = 255;

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        Self::ALPHA
    }

    /// Convert to [R, G, B, A] with A always 255.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, Self::ALPHA]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// `#rrggbb` or the `#rgb` shorthand, any case, `#` optional.
    ///
    /// ```
    /// use light_gamut::Color;
    ///
    /// let orange: Color = "#ff8800".parse().unwrap();
    /// assert_eq!(orange, Color::new(255, 136, 0));
    ///
    /// let red: Color = "F00".parse().unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0));
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let nibbles = digits
            .chars()
            .enumerate()
            .map(|(position, c)| {
                c.to_digit(16)
                    .map(|n| n as u8)
                    .ok_or_else(|| ParseColorError::NotHex {
                        input: input.to_string(),
                        position,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match nibbles[..] {
            // 0xf * 17 == 0xff
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
            _ => Err(ParseColorError::WrongDigitCount {
                input: input.to_string(),
                digits: nibbles.len(),
            }),
        }
    }
}
