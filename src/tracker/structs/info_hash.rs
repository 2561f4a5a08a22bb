//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 digest of the "info" dictionary of a torrent file and
/// uniquely identifies a swarm. The first byte selects the storage shard.
///
/// On the wire it arrives percent-encoded (raw bytes) or as a 40 character hex
/// string; both are normalised to this raw form before reaching the registry.
///
/// ```rust
/// use swarmkeeper::tracker::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "0102030405060708090a0b0c0d0e0f1011121314".parse().unwrap();
/// assert_eq!(hash.0[0], 1);
/// assert_eq!(hash.to_string(), "0102030405060708090a0b0c0d0e0f1011121314");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
