//! Contract with the link layer.
//!
//! Scanning, pairing and connecting happen elsewhere. This crate receives an
//! established [`Connection`] and only ever discovers characteristics on it,
//! then reads and writes them.

/// Error reported by the link layer. Opaque to this crate.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// A readable/writable data slot on the peripheral.
///
/// Handles are cheap references into connection-owned state.
pub trait Characteristic {
    /// Stable identifier, usually the characteristic UUID.
    fn uuid(&self) -> String;

    /// Read the current value into `buf`, returning the number of bytes read.
    fn read(&self, buf: &mut [u8]) -> Result<usize, TransportError>;

    /// Write `data` without waiting for a peripheral-level response.
    fn write_without_response(&self, data: &[u8]) -> Result<usize, TransportError>;
}

/// An established link to one peripheral.
pub trait Connection {
    type Handle: Characteristic;

    /// Enumerate every characteristic of every service, flattened in
    /// discovery order.
    fn discover(&self) -> Result<Vec<Self::Handle>, TransportError>;
}
