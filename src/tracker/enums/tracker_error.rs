use thiserror::Error;

/// Failure conditions answered to a client, each with a fixed numeric code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid request type: client request was not a HTTP GET")]
    InvalidRequestType,
    #[error("missing info_hash")]
    MissingInfoHash,
    #[error("missing peer_id")]
    MissingPeerId,
    #[error("missing port")]
    MissingPort,
    #[error("invalid infohash: infohash is not 20 bytes long")]
    InvalidInfoHash,
    #[error("invalid peerid: peerid is not 20 bytes long")]
    InvalidPeerId,
    #[error("invalid numwant: client requested more peers than allowed by tracker")]
    InvalidNumwant,
    #[error("invalid port")]
    InvalidPort,
    #[error("generic error")]
    Generic,
}
