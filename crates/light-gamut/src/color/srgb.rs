//! sRGB color type
//!
//! Normalized, gamma-encoded channels. This is the bridge between 8-bit
//! [`Color`] values and the linear math in the rest of the crate.

use super::gamma::linear_to_srgb;
use super::linear_rgb::LinearRgb;
use super::rgb8::Color;

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest of the three channels.
    #[inline]
    pub fn max_channel(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Scale all channels down so none exceeds 1.0.
    ///
    /// Dividing by the largest channel keeps the ratio between channels,
    /// and with it the hue. Colors already in range are returned unchanged.
    pub fn normalized(self) -> Self {
        let max = self.max_channel();
        if max > 1.0 {
            Self::new(self.r / max, self.g / max, self.b / max)
        } else {
            self
        }
    }

    /// Convert to an 8-bit [`Color`].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::new(
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        )
    }
}

impl From<Color> for Srgb {
    #[inline]
    fn from(color: Color) -> Self {
        Self {
            r: color.r as f64 / 255.0,
            g: color.g as f64 / 255.0,
            b: color.b as f64 / 255.0,
        }
    }
}

impl From<LinearRgb> for Srgb {
    /// Compand linear light for output.
    ///
    /// The result is not normalized; channels may exceed 1.0 until
    /// [`Srgb::normalized`] is applied.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color() {
        let srgb = Srgb::from(Color::new(255, 128, 0));
        assert_eq!(srgb.r, 1.0);
        assert!((srgb.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(srgb.b, 0.0);
    }

    #[test]
    fn test_to_color_round_trips_every_byte() {
        for i in 0..=255u8 {
            let color = Color::new(i, 255 - i, i / 2);
            assert_eq!(Srgb::from(color).to_color(), color);
        }
    }

    #[test]
    fn test_to_color_clamps() {
        assert_eq!(Srgb::new(1.5, -0.2, 0.5).to_color(), Color::new(255, 0, 128));
    }

    #[test]
    fn test_normalized_preserves_ratios() {
        let srgb = Srgb::new(4.0, 2.0, 1.0).normalized();
        assert_eq!(srgb, Srgb::new(1.0, 0.5, 0.25));

        let in_range = Srgb::new(0.9, 0.1, 0.0);
        assert_eq!(in_range.normalized(), in_range);
    }

    #[test]
    fn test_from_linear_never_negative() {
        let srgb = Srgb::from(LinearRgb::new(-0.3, 0.0, 0.5));
        assert_eq!(srgb.r, 0.0);
        assert_eq!(srgb.g, 0.0);
        assert!(srgb.b > 1.0);
    }
}
