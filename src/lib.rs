//! lightmyroom - drive characteristic-based smart lamps
//!
//! Power, brightness, color temperature, gamut-aware color and naming over
//! an already established link. Color math lives in the `light-gamut` crate.

pub mod error;
pub mod fleet;
pub mod light;
pub mod models;
pub mod services;
pub mod simulator;
pub mod transport;

pub use error::LightError;
pub use light::{ColorControl, Light, LightState, NameControl, TemperatureControl};
pub use light_gamut::{Color, Gamut};
pub use services::{CharacteristicRegistry, LightDriver, RetryingTransport};
