//! Capability traits for lights.
//!
//! Every light supports [`Light`]. Temperature, color and naming are
//! optional; ask for them at runtime:
//!
//! ```ignore
//! if let Some(temperature) = light.temperature_control() {
//!     temperature.set_temperature_kelvin(WARM_WHITE)?;
//! }
//! ```

use light_gamut::Color;
use serde::Serialize;

use crate::error::LightError;

/// Candle-like white.
pub const WARM_WHITE: u16 = 2700;
pub const NEUTRAL_WHITE: u16 = 4000;
/// Daylight white.
pub const COOL_WHITE: u16 = 6500;

pub trait Light {
    fn power_on(&self) -> Result<(), LightError>;
    fn power_off(&self) -> Result<(), LightError>;
    fn is_powered(&self) -> Result<bool, LightError>;

    /// Normalized brightness, 0.0..=1.0.
    fn brightness(&self) -> Result<f64, LightError>;
    fn set_brightness(&self, brightness: f64) -> Result<(), LightError>;

    fn model(&self) -> Result<String, LightError>;

    fn temperature_control(&self) -> Option<&dyn TemperatureControl> {
        None
    }

    fn color_control(&self) -> Option<&dyn ColorControl> {
        None
    }

    fn name_control(&self) -> Option<&dyn NameControl> {
        None
    }
}

pub trait TemperatureControl {
    fn temperature_kelvin(&self) -> Result<u16, LightError>;
    fn set_temperature_kelvin(&self, kelvin: u16) -> Result<(), LightError>;
}

pub trait ColorControl {
    fn color(&self) -> Result<Color, LightError>;
    fn set_color(&self, color: Color) -> Result<(), LightError>;
}

pub trait NameControl {
    fn name(&self) -> Result<String, LightError>;
    fn set_name(&self, name: &str) -> Result<(), LightError>;
}

/// Everything readable from a light, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightState {
    pub model: String,
    pub powered: bool,
    pub brightness: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_kelvin: Option<u16>,
    /// `#rrggbb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl LightState {
    /// Read every capability the light supports.
    pub fn read<L: Light + ?Sized>(light: &L) -> Result<Self, LightError> {
        Ok(Self {
            model: light.model()?,
            powered: light.is_powered()?,
            brightness: light.brightness()?,
            temperature_kelvin: light
                .temperature_control()
                .map(|t| t.temperature_kelvin())
                .transpose()?,
            color: light
                .color_control()
                .map(|c| c.color().map(|color| color.to_string()))
                .transpose()?,
            name: light.name_control().map(|n| n.name()).transpose()?,
        })
    }
}
