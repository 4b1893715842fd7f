//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! The XYZ matrices operate on these values.

use super::gamma::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but the inverse XYZ matrix
/// produces negative or larger values for chromaticities outside the RGB
/// cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB with the exact decode curve.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_primaries_stay_primaries() {
        let red = LinearRgb::from(Srgb::from(Color::new(255, 0, 0)));
        assert!((red.r - 1.0).abs() < 1e-12);
        assert_eq!(red.g, 0.0);
        assert_eq!(red.b, 0.0);
    }

    #[test]
    fn test_mid_gray_is_darker_in_linear() {
        let gray = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!(gray.r < 0.5);
        assert!((gray.r - 0.214).abs() < 0.001);
    }
}
