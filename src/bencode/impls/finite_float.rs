use std::fmt;
use std::fmt::Formatter;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::structs::finite_float::FiniteFloat;

impl FiniteFloat {
    pub fn new(value: f64) -> Result<FiniteFloat, BencodeError> {
        if value.is_finite() {
            Ok(FiniteFloat(value))
        } else {
            Err(BencodeError::NonFinite)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Shortest text that parses back to the same double, with the exponent
    /// marker uppercased so it can never be mistaken for the `e` terminator.
    pub fn to_bencode_string(&self) -> String {
        format!("{:?}", self.0).replace('e', "E")
    }
}

impl TryFrom<f64> for FiniteFloat {
    type Error = BencodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        FiniteFloat::new(value)
    }
}

impl From<FiniteFloat> for f64 {
    fn from(value: FiniteFloat) -> Self {
        value.0
    }
}

impl fmt::Display for FiniteFloat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
