//! BitTorrent peer identifier.

/// A 20-byte peer identifier chosen by the client for the lifetime of a session.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
