pub mod config;
pub mod encoding;
pub mod endpoint;

pub use config::{AppConfig, LightConfig, TransportConfig};
pub use endpoint::Endpoint;
