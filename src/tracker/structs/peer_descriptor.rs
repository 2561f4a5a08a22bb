use std::net::IpAddr;
use crate::tracker::structs::peer_id::PeerId;

/// Entry of a descriptive (non-compact) peer list.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerDescriptor {
    /// Omitted when the client sent `no_peer_id`.
    pub peer_id: Option<PeerId>,
    pub ip: IpAddr,
    pub port: u16,
}
