use thiserror::Error;

use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum LightError {
    #[error("Characteristic discovery failed: {0}")]
    DiscoveryFailed(#[source] TransportError),

    #[error("Characteristic not found: {0}")]
    NotFound(String),

    #[error("Payload too long: {len} bytes (max {max})")]
    PayloadTooLong { len: usize, max: usize },

    #[error("I/O on {endpoint} failed after {attempts} attempts: {source}")]
    Io {
        endpoint: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },

    #[error("Malformed payload from {endpoint}: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        endpoint: String,
        expected: usize,
        actual: usize,
    },

    /// Right length, but a value the lamp should never report.
    #[error("Invalid value from {endpoint}: {reason}")]
    InvalidValue {
        endpoint: String,
        reason: &'static str,
    },
}

impl LightError {
    /// Whether the error came from the link rather than from the data.
    pub fn is_io(&self) -> bool {
        matches!(self, LightError::Io { .. } | LightError::DiscoveryFailed(_))
    }
}
