use std::collections::BTreeMap;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::bencode::structs::finite_float::FiniteFloat;

impl BencodeValue {
    pub fn float(value: f64) -> Result<BencodeValue, BencodeError> {
        Ok(BencodeValue::Float(FiniteFloat::new(value)?))
    }

    pub fn dictionary() -> BencodeValue {
        BencodeValue::Dictionary(BTreeMap::new())
    }

    /// The integer when it fits in an `i64`.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_big_integer().and_then(ToPrimitive::to_i64)
    }

    pub fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            BencodeValue::Integer(value) => Some(value),
            _ => None
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            BencodeValue::Float(value) => Some(value.value()),
            _ => None
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            BencodeValue::Bytes(value) => Some(value.as_slice()),
            _ => None
        }
    }

    pub fn as_list(&self) -> Option<&[BencodeValue]> {
        match self {
            BencodeValue::List(value) => Some(value.as_slice()),
            _ => None
        }
    }

    pub fn as_dictionary(&self) -> Option<&BTreeMap<Vec<u8>, BencodeValue>> {
        match self {
            BencodeValue::Dictionary(value) => Some(value),
            _ => None
        }
    }

    /// Looks up `key` when this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&BencodeValue> {
        self.as_dictionary().and_then(|dictionary| dictionary.get(key))
    }

    /// Inserts into a dictionary value. Returns `false` and leaves the value
    /// untouched when it is not a dictionary.
    pub fn insert<K: Into<Vec<u8>>, V: Into<BencodeValue>>(&mut self, key: K, value: V) -> bool {
        match self {
            BencodeValue::Dictionary(dictionary) => {
                dictionary.insert(key.into(), value.into());
                true
            }
            _ => false
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.encode_into(&mut buffer);
        buffer
    }

    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        match self {
            BencodeValue::Integer(value) => {
                buffer.push(b'i');
                buffer.extend_from_slice(value.to_string().as_bytes());
                buffer.push(b'e');
            }
            BencodeValue::Float(value) => {
                buffer.push(b'f');
                buffer.extend_from_slice(value.to_bencode_string().as_bytes());
                buffer.push(b'e');
            }
            BencodeValue::Bytes(value) => {
                encode_bytes(value, buffer);
            }
            BencodeValue::List(items) => {
                buffer.push(b'l');
                for item in items {
                    item.encode_into(buffer);
                }
                buffer.push(b'e');
            }
            BencodeValue::Dictionary(entries) => {
                buffer.push(b'd');
                for (key, value) in entries {
                    encode_bytes(key, buffer);
                    value.encode_into(buffer);
                }
                buffer.push(b'e');
            }
        }
    }
}

fn encode_bytes(value: &[u8], buffer: &mut Vec<u8>) {
    buffer.extend_from_slice(value.len().to_string().as_bytes());
    buffer.push(b':');
    buffer.extend_from_slice(value);
}

impl From<BigInt> for BencodeValue {
    fn from(value: BigInt) -> Self {
        BencodeValue::Integer(value)
    }
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<i32> for BencodeValue {
    fn from(value: i32) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<u16> for BencodeValue {
    fn from(value: u16) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<u32> for BencodeValue {
    fn from(value: u32) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<u64> for BencodeValue {
    fn from(value: u64) -> Self {
        BencodeValue::Integer(BigInt::from(value))
    }
}

impl From<bool> for BencodeValue {
    fn from(value: bool) -> Self {
        BencodeValue::Integer(BigInt::from(value as u8))
    }
}

impl From<FiniteFloat> for BencodeValue {
    fn from(value: FiniteFloat) -> Self {
        BencodeValue::Float(value)
    }
}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> Self {
        BencodeValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for BencodeValue {
    fn from(value: String) -> Self {
        BencodeValue::Bytes(value.into_bytes())
    }
}

impl From<&[u8]> for BencodeValue {
    fn from(value: &[u8]) -> Self {
        BencodeValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(value: Vec<u8>) -> Self {
        BencodeValue::Bytes(value)
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(value: Vec<BencodeValue>) -> Self {
        BencodeValue::List(value)
    }
}

impl From<BTreeMap<Vec<u8>, BencodeValue>> for BencodeValue {
    fn from(value: BTreeMap<Vec<u8>, BencodeValue>) -> Self {
        BencodeValue::Dictionary(value)
    }
}
