//! Color types and conversion utilities
//!
//! Each stage of the conversion pipeline has its own type so the compiler
//! keeps gamma-encoded and linear values apart.
//!
//! # Example
//!
//! ```
//! use light_gamut::{Color, LinearRgb, Srgb, Xyz};
//!
//! let srgb = Srgb::from(Color::new(128, 64, 32));
//! let linear = LinearRgb::from(srgb);
//! let xy = Xyz::from(linear).chromaticity().unwrap();
//! assert!(xy.x > xy.y);
//! ```

mod gamma;
mod linear_rgb;
mod rgb8;
mod srgb;
mod xyz;

pub use gamma::{linear_to_srgb, srgb_to_linear};
pub use linear_rgb::LinearRgb;
pub use rgb8::Color;
pub use srgb::Srgb;
pub use xyz::{XyPoint, Xyz, RGB_TO_XYZ, XYZ_TO_RGB};
