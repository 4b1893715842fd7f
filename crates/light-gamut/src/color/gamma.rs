//! Transfer functions between gamma-encoded and linear channels.

/// Decode one gamma-encoded sRGB channel (0.0..=1.0) to linear light.
///
/// IEC 61966-2-1 decode curve with the 0.04045 knee.
#[inline]
pub fn srgb_to_linear(channel: f64) -> f64 {
    if channel > 0.04045 {
        ((channel + 0.055) / (1.0 + 0.055)).powf(2.4)
    } else {
        channel / 12.92
    }
}

/// Compand one linear channel for output.
///
/// This is the lamp vendor's reference companding and the segments are
/// swapped relative to IEC 61966-2-1: the power segment applies at or below
/// the 0.0031308 knee and the linear segment above it. Reported colors must
/// match what the vendor's own apps show, so keep the order.
///
/// Negative input (linear light outside the RGB cube) produces 0.0.
#[inline]
pub fn linear_to_srgb(channel: f64) -> f64 {
    let companded = if channel <= 0.0031308 {
        (1.0 + 0.055) * channel.max(0.0).powf(1.0 / 2.4) - 0.055
    } else {
        channel * 12.92
    };
    companded.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{LinSrgb, Srgb as PaletteSrgb};

    #[test]
    fn test_decode_matches_palette_crate() {
        for i in 0..=255u8 {
            let v = i as f64 / 255.0;
            let expected: LinSrgb<f64> = PaletteSrgb::new(v, v, v).into_linear();
            let actual = srgb_to_linear(v);
            assert!(
                (actual - expected.red).abs() < 1e-6,
                "channel {i}: got {actual}, palette says {}",
                expected.red
            );
        }
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
        // linear segment below the knee
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-12);
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-5);
    }

    #[test]
    fn test_compand_segments() {
        // above the knee the channel is scaled linearly
        assert!((linear_to_srgb(0.5) - 6.46).abs() < 1e-12);
        assert!((linear_to_srgb(1.0) - 12.92).abs() < 1e-12);

        // at the knee the power segment applies
        let knee = linear_to_srgb(0.0031308);
        assert!((knee - (1.055 * 0.0031308f64.powf(1.0 / 2.4) - 0.055)).abs() < 1e-12);
    }

    #[test]
    fn test_compand_never_negative() {
        assert_eq!(linear_to_srgb(0.0), 0.0);
        assert_eq!(linear_to_srgb(-0.2), 0.0);
        assert_eq!(linear_to_srgb(-1e-9), 0.0);
        assert!(linear_to_srgb(1e-6) >= 0.0);
    }
}
