pub mod driver;
pub mod registry;
pub mod transport;

pub use driver::LightDriver;
pub use registry::CharacteristicRegistry;
pub use transport::RetryingTransport;
