use std::net::IpAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;

/// One (peer, torrent) membership as stored by the registry.
///
/// Equality and hashing cover the full tuple, which is also the identity used
/// for de-duplication: the same peer announcing a different status, or the same
/// status from a different address, yields a separate record.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct PeerRecord {
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub status: AnnounceEvent,
}
