//! Enumerations for the bencode codec.

/// The closed set of bencode values.
pub mod bencode_value;

/// Decode and construction failures.
pub mod bencode_error;
