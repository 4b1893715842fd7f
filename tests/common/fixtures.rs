//! Test fixtures and constants.

use lightmyroom::models::TransportConfig;
use lightmyroom::simulator::{SimulatedCharacteristic, SimulatedLight};
use lightmyroom::LightDriver;

/// Model numbers covering each gamut
pub mod models {
    /// LightStrips, gamut A
    pub const STRIP: &str = "LST001";

    /// Original A19 bulb, gamut B
    pub const BULB_B: &str = "LCT001";

    /// Current A19 bulb, gamut C
    pub const BULB_C: &str = "LCT015";

    /// Not in any table, full gamut
    pub const UNKNOWN: &str = "ZZZ999";

    pub const ALL: [&str; 4] = [STRIP, BULB_B, BULB_C, UNKNOWN];
}

pub type Driver = LightDriver<SimulatedCharacteristic>;

/// Simulated lamp plus a driver connected to it with default retry limits
pub fn connect(model: &str) -> (SimulatedLight, Driver) {
    let light = SimulatedLight::new(model);
    let driver = LightDriver::connect(&light).expect("simulated discovery succeeds");
    (light, driver)
}

/// Same as [`connect`] with custom transport limits
pub fn connect_with_config(model: &str, config: TransportConfig) -> (SimulatedLight, Driver) {
    let light = SimulatedLight::new(model);
    let driver =
        LightDriver::connect_with_config(&light, config).expect("simulated discovery succeeds");
    (light, driver)
}

/// Same as [`connect`] with a custom attempt limit
pub fn connect_with_attempts(model: &str, max_attempts: u32) -> (SimulatedLight, Driver) {
    let config = TransportConfig {
        max_attempts,
        ..TransportConfig::default()
    };
    connect_with_config(model, config)
}

/// Same as [`connect`] with a custom payload limit
pub fn connect_with_payload(model: &str, max_payload: usize) -> (SimulatedLight, Driver) {
    let config = TransportConfig {
        max_payload,
        ..TransportConfig::default()
    };
    connect_with_config(model, config)
}

/// A coarse grid over the 8-bit color cube
pub fn color_grid(steps: u8) -> Vec<lightmyroom::Color> {
    let values: Vec<u8> = (0..steps)
        .map(|i| (i as u32 * 255 / (steps as u32 - 1)) as u8)
        .collect();
    let mut colors = Vec::new();
    for &r in &values {
        for &g in &values {
            for &b in &values {
                colors.push(lightmyroom::Color::new(r, g, b));
            }
        }
    }
    colors
}
