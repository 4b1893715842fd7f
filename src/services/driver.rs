use std::cell::OnceCell;

use light_gamut::{Color, Gamut, GamutKind};

use crate::error::LightError;
use crate::light::{ColorControl, Light, NameControl, TemperatureControl};
use crate::models::encoding;
use crate::models::{Endpoint, TransportConfig};
use crate::services::registry::CharacteristicRegistry;
use crate::services::transport::RetryingTransport;
use crate::transport::{Characteristic, Connection};

/// Driver for one connected lamp.
///
/// Owns the lamp's characteristic registry (through its transport) and the
/// lamp's gamut, which is resolved from the model number on the first color
/// operation and kept for the life of the connection.
#[derive(Debug)]
pub struct LightDriver<H> {
    transport: RetryingTransport<H>,
    gamut: OnceCell<Gamut>,
}

impl<H: Characteristic> LightDriver<H> {
    /// Discover the lamp's characteristics and build a driver.
    pub fn connect<C>(connection: &C) -> Result<Self, LightError>
    where
        C: Connection<Handle = H>,
    {
        Self::connect_with_config(connection, TransportConfig::default())
    }

    pub fn connect_with_config<C>(
        connection: &C,
        config: TransportConfig,
    ) -> Result<Self, LightError>
    where
        C: Connection<Handle = H>,
    {
        let registry = CharacteristicRegistry::build(connection)?;
        Ok(Self::with_transport(RetryingTransport::with_config(registry, config)))
    }

    pub fn new(registry: CharacteristicRegistry<H>) -> Self {
        Self::with_transport(RetryingTransport::new(registry))
    }

    pub fn with_transport(transport: RetryingTransport<H>) -> Self {
        Self {
            transport,
            gamut: OnceCell::new(),
        }
    }

    pub fn transport(&self) -> &RetryingTransport<H> {
        &self.transport
    }

    /// The lamp's gamut, reading the model number on first use.
    ///
    /// A failed model read is returned as-is and nothing is cached, so the
    /// next call tries again.
    pub fn gamut(&self) -> Result<Gamut, LightError> {
        if let Some(gamut) = self.gamut.get() {
            return Ok(*gamut);
        }

        let model = self.model()?;
        let gamut = *self.gamut.get_or_init(|| Gamut::for_model(&model));
        let kind = GamutKind::for_model(&model);
        tracing::info!(model = %model, kind = %kind, "Resolved gamut");
        Ok(gamut)
    }

    fn read_text(&self, endpoint: Endpoint) -> Result<String, LightError> {
        Ok(encoding::decode_text(&self.transport.read(endpoint)?))
    }
}

impl<H: Characteristic> Light for LightDriver<H> {
    fn power_on(&self) -> Result<(), LightError> {
        self.transport.write(Endpoint::Power, &encoding::encode_power(true))
    }

    fn power_off(&self) -> Result<(), LightError> {
        self.transport.write(Endpoint::Power, &encoding::encode_power(false))
    }

    fn is_powered(&self) -> Result<bool, LightError> {
        let [raw] = self.transport.read_exact::<1>(Endpoint::Power)?;
        Ok(encoding::decode_power(raw))
    }

    fn brightness(&self) -> Result<f64, LightError> {
        let [raw] = self.transport.read_exact::<1>(Endpoint::Brightness)?;
        Ok(encoding::decode_brightness(raw))
    }

    fn set_brightness(&self, brightness: f64) -> Result<(), LightError> {
        let raw = encoding::encode_brightness(brightness);
        self.transport.write(Endpoint::Brightness, &[raw])
    }

    fn model(&self) -> Result<String, LightError> {
        self.read_text(Endpoint::Model)
    }

    fn temperature_control(&self) -> Option<&dyn TemperatureControl> {
        if self.transport.supports(Endpoint::Temperature) {
            Some(self)
        } else {
            None
        }
    }

    fn color_control(&self) -> Option<&dyn ColorControl> {
        if self.transport.supports(Endpoint::Color) {
            Some(self)
        } else {
            None
        }
    }

    fn name_control(&self) -> Option<&dyn NameControl> {
        if self.transport.supports(Endpoint::Name) {
            Some(self)
        } else {
            None
        }
    }
}

impl<H: Characteristic> TemperatureControl for LightDriver<H> {
    fn temperature_kelvin(&self) -> Result<u16, LightError> {
        let raw = self.transport.read_exact::<2>(Endpoint::Temperature)?;
        encoding::decode_temperature(raw).ok_or_else(|| LightError::InvalidValue {
            endpoint: Endpoint::Temperature.to_string(),
            reason: "mirek 0 has no Kelvin equivalent",
        })
    }

    fn set_temperature_kelvin(&self, kelvin: u16) -> Result<(), LightError> {
        self.transport
            .write(Endpoint::Temperature, &encoding::encode_temperature(kelvin))
    }
}

impl<H: Characteristic> ColorControl for LightDriver<H> {
    fn color(&self) -> Result<Color, LightError> {
        let gamut = self.gamut()?;
        let xy = encoding::decode_xy(self.transport.read_exact::<4>(Endpoint::Color)?);
        let brightness = self.brightness()?;
        Ok(gamut.xy_to_color(xy, brightness))
    }

    fn set_color(&self, color: Color) -> Result<(), LightError> {
        let xy = self.gamut()?.color_to_xy(color);
        self.transport.write(Endpoint::Color, &encoding::encode_xy(xy))
    }
}

impl<H: Characteristic> NameControl for LightDriver<H> {
    fn name(&self) -> Result<String, LightError> {
        self.read_text(Endpoint::Name)
    }

    fn set_name(&self, name: &str) -> Result<(), LightError> {
        let limit = self.transport.config().payload_limit();
        self.transport.write(Endpoint::Name, encoding::encode_text(name, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::SimulatedLight;
    use light_gamut::XyPoint;
    use pretty_assertions::assert_eq;

    fn driver(light: &SimulatedLight) -> LightDriver<crate::simulator::SimulatedCharacteristic> {
        LightDriver::connect(light).unwrap()
    }

    #[test]
    fn test_power() {
        let light = SimulatedLight::new("LCT015");
        let driver = driver(&light);

        driver.power_on().unwrap();
        assert_eq!(light.raw(Endpoint::Power), vec![1]);
        assert!(driver.is_powered().unwrap());

        driver.power_off().unwrap();
        assert_eq!(light.raw(Endpoint::Power), vec![0]);
        assert!(!driver.is_powered().unwrap());
    }

    #[test]
    fn test_brightness() {
        let light = SimulatedLight::new("LCT015");
        let driver = driver(&light);

        driver.set_brightness(0.5).unwrap();
        assert_eq!(light.raw(Endpoint::Brightness), vec![127]);
        assert!((driver.brightness().unwrap() - 127.0 / 254.0).abs() < 1e-12);

        driver.set_brightness(0.0).unwrap();
        assert_eq!(light.raw(Endpoint::Brightness), vec![1]);
    }

    #[test]
    fn test_model_and_name() {
        let light = SimulatedLight::new("LCT001");
        let driver = driver(&light);

        assert_eq!(driver.model().unwrap(), "LCT001");

        let names = driver.name_control().unwrap();
        names.set_name("Desk").unwrap();
        assert_eq!(names.name().unwrap(), "Desk");
    }

    #[test]
    fn test_long_name_is_truncated() {
        let light = SimulatedLight::new("LCT001");
        let driver = driver(&light);

        driver.set_name(&"n".repeat(700)).unwrap();
        assert_eq!(light.raw(Endpoint::Name).len(), 512);
    }

    #[test]
    fn test_temperature() {
        let light = SimulatedLight::new("LCT015");
        let driver = driver(&light);

        driver.set_temperature_kelvin(2700).unwrap();
        assert_eq!(light.raw(Endpoint::Temperature), vec![0x72, 0x01]);
        assert_eq!(driver.temperature_kelvin().unwrap(), 2703);

        driver.set_temperature_kelvin(20_000).unwrap();
        assert_eq!(light.raw(Endpoint::Temperature), 153u16.to_le_bytes().to_vec());
    }

    #[test]
    fn test_zero_mirek_is_invalid() {
        let light = SimulatedLight::new("LCT015");
        light.set_raw(Endpoint::Temperature, &[0, 0]);

        let err = driver(&light).temperature_kelvin().unwrap_err();
        assert!(matches!(err, LightError::InvalidValue { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid value from temperature: mirek 0 has no Kelvin equivalent"
        );
    }

    #[test]
    fn test_set_color_writes_clamped_xy() {
        let light = SimulatedLight::new("LCT015");
        let driver = driver(&light);

        driver.set_color(Color::new(255, 0, 0)).unwrap();
        assert_eq!(
            light.raw(Endpoint::Color),
            encoding::encode_xy(XyPoint::new(0.692, 0.308)).to_vec()
        );
    }

    #[test]
    fn test_color_reads_xy_and_brightness() {
        let light = SimulatedLight::new("UNKNOWN");
        let driver = driver(&light);

        driver.set_color(Color::new(255, 0, 0)).unwrap();
        driver.set_brightness(1.0).unwrap();
        assert_eq!(driver.color().unwrap(), Color::new(255, 0, 0));
    }

    #[test]
    fn test_gamut_is_resolved_once() {
        let light = SimulatedLight::new("LCT001");
        let driver = driver(&light);

        assert_eq!(driver.gamut().unwrap(), Gamut::B);
        let reads = light.read_attempts();

        driver.set_color(Color::new(0, 0, 255)).unwrap();
        driver.set_color(Color::new(0, 255, 0)).unwrap();
        assert_eq!(light.read_attempts(), reads);

        // a renamed model is not picked up by this connection
        light.set_raw(Endpoint::Model, b"LCT015");
        assert_eq!(driver.gamut().unwrap(), Gamut::B);
    }

    #[test]
    fn test_failed_model_read_is_not_cached() {
        let light = SimulatedLight::new("LCT015");
        let driver = driver(&light);

        light.fail_next_reads(5);
        assert!(matches!(
            driver.set_color(Color::WHITE),
            Err(LightError::Io { .. })
        ));

        driver.set_color(Color::new(255, 0, 0)).unwrap();
        assert_eq!(driver.gamut().unwrap(), Gamut::C);
    }

    #[test]
    fn test_capabilities_follow_discovery() {
        let light = SimulatedLight::new("LWB010");
        light.omit(Endpoint::Color);
        light.omit(Endpoint::Temperature);
        let driver = driver(&light);

        assert!(driver.temperature_control().is_none());
        assert!(driver.color_control().is_none());
        assert!(driver.name_control().is_some());
        assert!(matches!(
            driver.set_color(Color::WHITE),
            Err(LightError::NotFound(_))
        ));
    }

    #[test]
    fn test_connect_fails_when_discovery_fails() {
        let light = SimulatedLight::new("LCT015");
        light.fail_discovery();

        let result = LightDriver::connect(&light);
        assert!(matches!(result, Err(LightError::DiscoveryFailed(_))));
    }
}
