use serde::Deserialize;
use std::path::Path;

use super::encoding::{MAX_PAYLOAD, MIN_PAYLOAD};

/// Application configuration loaded from YAML
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Retry and payload limits for characteristic I/O
    #[serde(default)]
    pub transport: TransportConfig,

    /// Simulated lights driven by `lightmyroom simulate`
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

/// Limits applied by the retrying transport
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TransportConfig {
    /// Attempts per read or write before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Largest payload accepted by a write, see [`TransportConfig::payload_limit`]
    #[serde(default = "default_max_payload")]
    pub max_payload: usize,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_max_payload() -> usize {
    MAX_PAYLOAD
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            max_payload: default_max_payload(),
        }
    }
}

impl TransportConfig {
    /// At least one attempt is always made.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Write limit actually enforced: never above the 512 bytes a
    /// characteristic holds, never below the widest fixed-size value.
    pub fn payload_limit(&self) -> usize {
        self.max_payload.clamp(MIN_PAYLOAD, MAX_PAYLOAD)
    }
}

/// Desired state of one simulated light
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LightConfig {
    /// Friendly name written to the name characteristic
    pub name: String,

    /// Model number the simulated light reports
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_power")]
    pub power: bool,

    /// Normalized brightness (0.0..=1.0)
    pub brightness: Option<f64>,

    /// Color temperature in Kelvin
    pub temperature: Option<u16>,

    /// Hex color, e.g. "#ff8800"
    pub color: Option<String>,
}

fn default_model() -> String {
    "LCT015".to_string()
}

fn default_power() -> bool {
    true
}

impl AppConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        lights = config.lights.len(),
                        max_attempts = config.transport.max_attempts,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.transport.max_attempts, 5);
        assert_eq!(config.transport.max_payload, 512);
        assert!(config.lights.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r##"
transport:
  max_attempts: 3
  max_payload: 256
lights:
  - name: Desk
    model: LCT001
    brightness: 0.5
    temperature: 2700
  - name: Shelf
    power: false
    color: "#ff8800"
"##;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(
            config.transport,
            TransportConfig {
                max_attempts: 3,
                max_payload: 256
            }
        );
        assert_eq!(config.lights.len(), 2);

        let desk = &config.lights[0];
        assert_eq!(desk.model, "LCT001");
        assert!(desk.power);
        assert_eq!(desk.brightness, Some(0.5));
        assert_eq!(desk.temperature, Some(2700));

        let shelf = &config.lights[1];
        assert_eq!(shelf.model, "LCT015");
        assert!(!shelf.power);
        assert_eq!(shelf.color.as_deref(), Some("#ff8800"));
    }

    #[test]
    fn test_partial_transport_uses_defaults() {
        let config = AppConfig::from_yaml_str("transport:\n  max_attempts: 2\n").unwrap();
        assert_eq!(config.transport.max_attempts, 2);
        assert_eq!(config.transport.max_payload, 512);
    }

    #[test]
    fn test_attempts_never_zero() {
        let config = TransportConfig {
            max_attempts: 0,
            max_payload: 512,
        };
        assert_eq!(config.attempts(), 1);
    }

    #[test]
    fn test_payload_limit_is_capped() {
        let limit = |max_payload| {
            TransportConfig {
                max_attempts: 5,
                max_payload,
            }
            .payload_limit()
        };

        assert_eq!(limit(1024), 512);
        assert_eq!(limit(512), 512);
        assert_eq!(limit(256), 256);
        assert_eq!(limit(0), 4);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml_str("lights: 12").is_err());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lights:\n  - name: Hall").unwrap();

        let config = AppConfig::load_from_path(file.path());
        assert_eq!(config.lights.len(), 1);
        assert_eq!(config.lights[0].name, "Hall");
    }

    #[test]
    fn test_load_from_missing_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(&dir.path().join("missing.yaml"));
        assert_eq!(config, AppConfig::default());
    }
}
