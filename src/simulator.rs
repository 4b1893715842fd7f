//! In-memory lamp for development and tests.
//!
//! [`SimulatedLight`] implements [`Connection`] and stores raw payloads per
//! endpoint exactly as a lamp would, with hooks for injecting link failures.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use light_gamut::Xyz;

use crate::light::WARM_WHITE;
use crate::models::encoding;
use crate::models::Endpoint;
use crate::transport::{Characteristic, Connection, TransportError};

#[derive(Debug, Default)]
struct State {
    values: HashMap<Endpoint, Vec<u8>>,
    omitted: HashSet<Endpoint>,
    fail_reads: u32,
    fail_writes: u32,
    fail_discovery: bool,
    read_attempts: u32,
    write_attempts: u32,
}

/// A simulated lamp. Clones share state.
#[derive(Debug, Clone)]
pub struct SimulatedLight {
    state: Arc<Mutex<State>>,
}

impl SimulatedLight {
    /// A powered-off lamp reporting `model`, at full brightness and warm white.
    pub fn new(model: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(Endpoint::Power, encoding::encode_power(false).to_vec());
        values.insert(Endpoint::Brightness, vec![encoding::BRIGHTNESS_MAX_RAW]);
        values.insert(
            Endpoint::Temperature,
            encoding::encode_temperature(WARM_WHITE).to_vec(),
        );
        values.insert(
            Endpoint::Color,
            encoding::encode_xy(Xyz::reference_white()).to_vec(),
        );
        values.insert(Endpoint::Model, model.as_bytes().to_vec());
        values.insert(Endpoint::Name, b"Light".to_vec());

        Self {
            state: Arc::new(Mutex::new(State {
                values,
                ..State::default()
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        lock(&self.state)
    }

    /// Leave `endpoint` out of discovery.
    pub fn omit(&self, endpoint: Endpoint) {
        self.state().omitted.insert(endpoint);
    }

    /// Current raw payload of `endpoint`.
    pub fn raw(&self, endpoint: Endpoint) -> Vec<u8> {
        self.state().values.get(&endpoint).cloned().unwrap_or_default()
    }

    pub fn set_raw(&self, endpoint: Endpoint, data: &[u8]) {
        self.state().values.insert(endpoint, data.to_vec());
    }

    pub fn fail_next_reads(&self, count: u32) {
        self.state().fail_reads = count;
    }

    pub fn fail_next_writes(&self, count: u32) {
        self.state().fail_writes = count;
    }

    pub fn fail_discovery(&self) {
        self.state().fail_discovery = true;
    }

    /// Reads attempted so far, failed ones included.
    pub fn read_attempts(&self) -> u32 {
        self.state().read_attempts
    }

    /// Writes attempted so far, failed ones included.
    pub fn write_attempts(&self) -> u32 {
        self.state().write_attempts
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Connection for SimulatedLight {
    type Handle = SimulatedCharacteristic;

    fn discover(&self) -> Result<Vec<SimulatedCharacteristic>, TransportError> {
        let state = self.state();
        if state.fail_discovery {
            return Err("simulated discovery failure".into());
        }

        Ok(Endpoint::ALL
            .into_iter()
            .filter(|endpoint| !state.omitted.contains(endpoint))
            .map(|endpoint| SimulatedCharacteristic {
                endpoint,
                state: Arc::clone(&self.state),
            })
            .collect())
    }
}

/// Handle to one endpoint of a [`SimulatedLight`].
#[derive(Debug, Clone)]
pub struct SimulatedCharacteristic {
    endpoint: Endpoint,
    state: Arc<Mutex<State>>,
}

impl Characteristic for SimulatedCharacteristic {
    fn uuid(&self) -> String {
        self.endpoint.uuid().to_string()
    }

    fn read(&self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let mut state = lock(&self.state);
        state.read_attempts += 1;
        if state.fail_reads > 0 {
            state.fail_reads -= 1;
            return Err(format!("simulated read failure on {}", self.endpoint).into());
        }

        let value = state.values.get(&self.endpoint).map(Vec::as_slice).unwrap_or_default();
        let len = value.len().min(buf.len());
        buf[..len].copy_from_slice(&value[..len]);
        Ok(len)
    }

    fn write_without_response(&self, data: &[u8]) -> Result<usize, TransportError> {
        let mut state = lock(&self.state);
        state.write_attempts += 1;
        if state.fail_writes > 0 {
            state.fail_writes -= 1;
            return Err(format!("simulated write failure on {}", self.endpoint).into());
        }

        state.values.insert(self.endpoint, data.to_vec());
        Ok(data.len())
    }
}
