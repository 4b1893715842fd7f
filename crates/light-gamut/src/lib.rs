#![allow(clippy::excessive_precision, clippy::manual_range_contains)]

//! light-gamut: color conversion for gamut-limited lamps
//!
//! Smart lamps do not accept RGB. They take a CIE 1931 chromaticity
//! coordinate `(x, y)` plus a separate brightness, and each hardware
//! generation can only reproduce the chromaticities inside a triangle
//! spanned by its three emitters. This crate converts between
//! device-independent 8-bit colors and that representation, and keeps every
//! coordinate it hands out inside the lamp's triangle.
//!
//! # Quick Start
//!
//! ```
//! use light_gamut::{Color, Gamut};
//!
//! let gamut = Gamut::for_model("LCT015");
//! let xy = gamut.color_to_xy(Color::new(255, 0, 0));
//! assert!(gamut.contains(xy));
//!
//! let back = gamut.xy_to_color(xy, 1.0);
//! assert_eq!(back.r, 255);
//! ```
//!
//! # Color Spaces
//!
//! - [`Color`]: 8-bit display color with an always-opaque alpha
//! - [`Srgb`]: the same color normalized to 0.0..=1.0, still gamma encoded
//! - [`LinearRgb`]: linear light intensity
//! - [`Xyz`]: CIE XYZ tristimulus values, reduced to [`XyPoint`] chromaticity
//!
//! ## Pipeline
//!
//! ```text
//! Color (8-bit)
//!     |  normalize
//!     v
//! Srgb
//!     |  inverse gamma (IEC 61966-2-1 decode)
//!     v
//! LinearRgb
//!     |  wide-gamut RGB -> XYZ matrix
//!     v
//! Xyz
//!     |  x = X / (X+Y+Z), y = Y / (X+Y+Z)
//!     v
//! XyPoint ---> Gamut::clamp ---> device
//! ```
//!
//! The reverse direction rebuilds XYZ from `(x, y)` and the lamp's
//! brightness (used as luminance `Y`), applies the inverse matrix, compands
//! and normalizes so the brightest channel never exceeds full scale.
//!
//! # Gamuts
//!
//! Three emitter triangles are known ([`Gamut::A`], [`Gamut::B`],
//! [`Gamut::C`]). [`Gamut::for_model`] picks one from the model number a lamp
//! reports; unknown models get [`Gamut::FULL`], which spans the whole
//! chromaticity simplex and therefore never alters a coordinate.
//!
//! Out-of-gamut coordinates are never an error. They are moved to the
//! nearest point on the triangle boundary, which keeps hue as close as the
//! hardware allows.

pub mod color;
pub mod error;
pub mod gamut;


pub use color::{Color, LinearRgb, Srgb, XyPoint, Xyz};
pub use error::ParseColorError;
pub use gamut::models::GamutKind;
pub use gamut::Gamut;
