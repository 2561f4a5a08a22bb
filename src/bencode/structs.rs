//! Data structures for the bencode codec.

/// A float that is guaranteed to be neither NaN nor infinite.
pub mod finite_float;
