//! Wire encodings for each endpoint.
//!
//! Everything public in this crate uses normalized floats and Kelvin; the
//! raw device units live only here.

use light_gamut::XyPoint;

/// Largest payload a single characteristic accepts.
pub const MAX_PAYLOAD: usize = 512;
/// Widest fixed-size value (the xy pair); no write limit goes below it.
pub const MIN_PAYLOAD: usize = 4;

pub const BRIGHTNESS_MIN_RAW: u8 = 1;
pub const BRIGHTNESS_MAX_RAW: u8 = 254;

/// Coolest supported setting, about 6536 K.
pub const MIREK_MIN: u16 = 153;
/// Warmest supported setting, 2000 K.
pub const MIREK_MAX: u16 = 500;

pub fn encode_power(on: bool) -> [u8; 1] {
    [on as u8]
}

pub fn decode_power(raw: u8) -> bool {
    raw == 1
}

/// Normalized brightness to the raw 1..=254 byte.
///
/// The lamp has no zero step; 0.0 (and NaN) encode as the dimmest level.
pub fn encode_brightness(value: f64) -> u8 {
    if value.is_nan() {
        return BRIGHTNESS_MIN_RAW;
    }
    (value * BRIGHTNESS_MAX_RAW as f64)
        .round()
        .clamp(BRIGHTNESS_MIN_RAW as f64, BRIGHTNESS_MAX_RAW as f64) as u8
}

pub fn decode_brightness(raw: u8) -> f64 {
    (raw as f64 / BRIGHTNESS_MAX_RAW as f64).min(1.0)
}

/// Kelvin to mirek, clamped to the supported range.
pub fn encode_mirek(kelvin: u16) -> u16 {
    if kelvin == 0 {
        return MIREK_MAX;
    }
    (1_000_000.0 / kelvin as f64)
        .round()
        .clamp(MIREK_MIN as f64, MIREK_MAX as f64) as u16
}

/// Mirek to Kelvin. A zero mirek has no Kelvin equivalent.
pub fn decode_mirek(mirek: u16) -> Option<u16> {
    if mirek == 0 {
        return None;
    }
    Some((1_000_000.0 / mirek as f64).round().min(u16::MAX as f64) as u16)
}

pub fn encode_temperature(kelvin: u16) -> [u8; 2] {
    encode_mirek(kelvin).to_le_bytes()
}

pub fn decode_temperature(raw: [u8; 2]) -> Option<u16> {
    decode_mirek(u16::from_le_bytes(raw))
}

fn scale_unit(value: f64) -> u16 {
    (value.clamp(0.0, 1.0) * u16::MAX as f64).round() as u16
}

pub fn encode_xy(xy: XyPoint) -> [u8; 4] {
    let [x0, x1] = scale_unit(xy.x).to_le_bytes();
    let [y0, y1] = scale_unit(xy.y).to_le_bytes();
    [x0, x1, y0, y1]
}

pub fn decode_xy(raw: [u8; 4]) -> XyPoint {
    let x = u16::from_le_bytes([raw[0], raw[1]]);
    let y = u16::from_le_bytes([raw[2], raw[3]]);
    XyPoint::new(x as f64 / u16::MAX as f64, y as f64 / u16::MAX as f64)
}

/// Text payload, truncated to `limit` bytes.
pub fn encode_text(text: &str, limit: usize) -> &[u8] {
    let bytes = text.as_bytes();
    &bytes[..bytes.len().min(limit)]
}

/// Text payload with trailing NUL padding removed.
pub fn decode_text(raw: &[u8]) -> String {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&raw[..end]).into_owned()
}
