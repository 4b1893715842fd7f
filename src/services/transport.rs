use crate::error::LightError;
use crate::models::encoding::MAX_PAYLOAD;
use crate::models::{Endpoint, TransportConfig};
use crate::services::registry::CharacteristicRegistry;
use crate::transport::{Characteristic, TransportError};

/// Bounded-retry reads and writes against registered endpoints.
///
/// Failed attempts are retried immediately, without backoff, up to
/// [`TransportConfig::max_attempts`]. When every attempt fails the last
/// transport error is returned inside [`LightError::Io`]; no empty or stale
/// value is ever substituted.
#[derive(Debug)]
pub struct RetryingTransport<H> {
    registry: CharacteristicRegistry<H>,
    config: TransportConfig,
}

impl<H: Characteristic> RetryingTransport<H> {
    pub fn new(registry: CharacteristicRegistry<H>) -> Self {
        Self::with_config(registry, TransportConfig::default())
    }

    pub fn with_config(registry: CharacteristicRegistry<H>, config: TransportConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CharacteristicRegistry<H> {
        &self.registry
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Whether the peripheral exposes `endpoint`.
    pub fn supports(&self, endpoint: Endpoint) -> bool {
        self.registry.contains(endpoint.uuid())
    }

    /// Read the current value of `endpoint`.
    pub fn read(&self, endpoint: Endpoint) -> Result<Vec<u8>, LightError> {
        let handle = self.registry.lookup(endpoint.uuid())?;
        let mut buf = vec![0u8; MAX_PAYLOAD];

        let len = self.retry(endpoint, "read", || handle.read(&mut buf))?;
        buf.truncate(len.min(buf.len()));
        tracing::trace!(%endpoint, bytes = buf.len(), "Read characteristic");
        Ok(buf)
    }

    /// Read exactly `N` leading bytes of `endpoint`.
    ///
    /// A shorter payload is a [`LightError::MalformedPayload`]; it is not
    /// retried.
    pub fn read_exact<const N: usize>(&self, endpoint: Endpoint) -> Result<[u8; N], LightError> {
        let data = self.read(endpoint)?;
        data.get(..N)
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or_else(|| LightError::MalformedPayload {
                endpoint: endpoint.to_string(),
                expected: N,
                actual: data.len(),
            })
    }

    /// Write `data` to `endpoint`.
    ///
    /// Oversized payloads are rejected before the endpoint is even looked up.
    pub fn write(&self, endpoint: Endpoint, data: &[u8]) -> Result<(), LightError> {
        let max = self.config.payload_limit();
        if data.len() > max {
            return Err(LightError::PayloadTooLong { len: data.len(), max });
        }

        let handle = self.registry.lookup(endpoint.uuid())?;
        self.retry(endpoint, "write", || handle.write_without_response(data))?;
        tracing::trace!(%endpoint, bytes = data.len(), "Wrote characteristic");
        Ok(())
    }

    fn retry<T>(
        &self,
        endpoint: Endpoint,
        op: &'static str,
        mut attempt: impl FnMut() -> Result<T, TransportError>,
    ) -> Result<T, LightError> {
        let attempts = self.config.attempts();
        let mut last_error = None;

        for n in 1..=attempts {
            match attempt() {
                Ok(value) => {
                    if n > 1 {
                        tracing::debug!(%endpoint, op, attempt = n, "Succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) => {
                    tracing::warn!(
                        %endpoint,
                        op,
                        attempt = n,
                        error = %e,
                        "Characteristic I/O failed"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(LightError::Io {
            endpoint: endpoint.to_string(),
            attempts,
            source: last_error.unwrap_or_else(|| "no attempt made".into()),
        })
    }
}
