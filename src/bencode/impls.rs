//! Implementation blocks for the bencode codec types.

/// BencodeValue: constructors, conversions, accessors and canonical encoding.
pub mod bencode_value;

/// FiniteFloat: checked construction and canonical text form.
pub mod finite_float;
