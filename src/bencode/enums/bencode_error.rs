use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BencodeError {
    #[error("not a valid bencoded value")]
    Invalid,

    #[error("invalid bencoded value (data after valid prefix)")]
    TrailingData,

    #[error("encountered NaN or infinite")]
    NonFinite,
}
