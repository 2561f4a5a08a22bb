use std::net::{IpAddr, SocketAddr};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;

impl PeerRecord {
    pub fn new(peer_id: PeerId, ip: IpAddr, port: u16, status: AnnounceEvent) -> PeerRecord
    {
        PeerRecord { peer_id, ip, port, status }
    }

    pub fn socket_addr(&self) -> SocketAddr
    {
        SocketAddr::new(self.ip, self.port)
    }
}
