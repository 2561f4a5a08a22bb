use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A validated announce.
///
/// `uploaded`, `downloaded`, `left` and `key` only appear in the `[ANNOUNCE]`
/// debug line; they do not influence registry state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub compact: bool,
    pub no_peer_id: bool,
    pub event: AnnounceEvent,
    /// Already bounded by `numwant_max`.
    pub numwant: u64,
    pub key: Option<Vec<u8>>,
    pub tracker_id: Option<Vec<u8>>,
}
