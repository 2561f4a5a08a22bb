//! Helpers shared by the listeners and the registry.
//!
//! - Query string parsing with percent-decoding
//! - Normalisation of hex encoded hashes
//! - Logging setup

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
