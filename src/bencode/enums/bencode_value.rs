use std::collections::BTreeMap;
use num_bigint::BigInt;
use crate::bencode::structs::finite_float::FiniteFloat;

/// A single bencode value.
///
/// Dictionaries are keyed by raw byte strings and stored in a `BTreeMap`, so
/// iteration (and therefore encoding) is always in ascending byte order. A
/// duplicate key seen while decoding replaces the earlier value.
///
/// Integers are unbounded, so values past the 64-bit range (large file
/// lengths, third-party fields) decode instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum BencodeValue {
    Integer(BigInt),
    Float(FiniteFloat),
    Bytes(Vec<u8>),
    List(Vec<BencodeValue>),
    Dictionary(BTreeMap<Vec<u8>, BencodeValue>),
}
