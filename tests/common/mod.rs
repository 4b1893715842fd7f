//! Common test infrastructure for lightmyroom integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::{
    connect, connect_with_attempts, connect_with_config, connect_with_payload, Driver,
};
