//! Bencode codec.
//!
//! Bencode is the self-describing serialization format used for every tracker
//! response. This module implements the full grammar (integers, byte strings,
//! lists and dictionaries) plus a finite floating point extension:
//!
//! - `i<digits>e` - Integer, no leading zeros, no `-0`
//! - `f<decimal>e` - Float, must be finite
//! - `<len>:<bytes>` - Byte string
//! - `l<value>*e` - List
//! - `d(<key><value>)*e` - Dictionary, keys are byte strings
//!
//! Encoding is always canonical: dictionary keys are written in ascending byte
//! order regardless of how the dictionary was built, so two equal values always
//! produce identical bytes.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use swarmkeeper::bencode::bencode::{decode, encode};
//! use swarmkeeper::bencode::enums::bencode_value::BencodeValue;
//!
//! let mut map = BTreeMap::new();
//! map.insert(b"b".to_vec(), BencodeValue::from(1i64));
//! map.insert(b"a".to_vec(), BencodeValue::from(2i64));
//! let bytes = encode(&BencodeValue::from(map));
//! assert_eq!(bytes, b"d1:ai2e1:bi1ee");
//! assert!(decode(&bytes).is_ok());
//! ```

/// Value and error enumerations.
pub mod enums;

/// Wrapper types admitted into the value model.
pub mod structs;

/// Constructors, accessors and the encoder.
pub mod impls;

/// Top level `decode`, `decode_prefix` and `encode` functions.
#[allow(clippy::module_inception)]
pub mod bencode;

/// Unit tests for the codec grammar.
pub mod tests;
