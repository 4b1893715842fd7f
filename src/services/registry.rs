use crate::error::LightError;
use crate::transport::{Characteristic, Connection};

/// Maps endpoint identifiers to the handles discovered on a connection.
///
/// Built once and never modified. Lookups scan linearly; a peripheral
/// exposes only a handful of characteristics.
#[derive(Debug, Clone)]
pub struct CharacteristicRegistry<H> {
    entries: Vec<(String, H)>,
}

impl<H: Characteristic> CharacteristicRegistry<H> {
    /// Discover every characteristic on `connection`.
    ///
    /// Either the whole registry is returned or discovery's error is.
    pub fn build<C>(connection: &C) -> Result<Self, LightError>
    where
        C: Connection<Handle = H>,
    {
        let handles = connection.discover().map_err(LightError::DiscoveryFailed)?;
        let registry = Self::from_handles(handles);
        tracing::debug!(endpoints = registry.len(), "Discovered characteristics");
        Ok(registry)
    }

    pub fn from_handles(handles: Vec<H>) -> Self {
        let entries = handles
            .into_iter()
            .map(|handle| (handle.uuid(), handle))
            .collect();
        Self { entries }
    }

    /// Handle for `id`, compared case-insensitively. First match wins.
    pub fn lookup(&self, id: &str) -> Result<&H, LightError> {
        self.entries
            .iter()
            .find(|(uuid, _)| uuid.eq_ignore_ascii_case(id))
            .map(|(_, handle)| handle)
            .ok_or_else(|| LightError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lookup(id).is_ok()
    }
}

impl<H> CharacteristicRegistry<H> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers in discovery order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(uuid, _)| uuid.as_str())
    }
}
