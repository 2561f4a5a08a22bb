use std::net::IpAddr;
use byteorder::{BigEndian, ByteOrder};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::peer_descriptor::PeerDescriptor;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

impl TorrentSwarm {
    pub fn new() -> TorrentSwarm
    {
        TorrentSwarm::default()
    }

    /// Stores `record` unless an identical one exists or it carries no event.
    pub fn insert(&mut self, record: PeerRecord) -> bool
    {
        if record.status == AnnounceEvent::None || !self.index.insert(record) {
            return false;
        }
        match record.status {
            AnnounceEvent::Completed => self.seeders += 1,
            AnnounceEvent::Started => self.leechers += 1,
            _ => {}
        }
        self.records.push(record);
        true
    }

    pub fn contains(&self, record: &PeerRecord) -> bool
    {
        self.index.contains(record)
    }

    pub fn seeders(&self) -> u64
    {
        self.seeders
    }

    pub fn leechers(&self) -> u64
    {
        self.leechers
    }

    pub fn len(&self) -> usize
    {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PeerRecord]
    {
        &self.records
    }

    /// The first `limit` records in insertion order.
    ///
    /// Compact output packs IPv4 records as `ip(4) port(2)` into `peers` and IPv6
    /// records as `ip(16) port(2)` into `peers6`, all big-endian.
    pub fn peer_list(&self, limit: usize, compact: bool, omit_peer_id: bool) -> PeerList
    {
        let selected = self.records.iter().take(limit);
        if !compact {
            return PeerList::Descriptive(selected.map(|record| PeerDescriptor {
                peer_id: (!omit_peer_id).then_some(record.peer_id),
                ip: record.ip,
                port: record.port,
            }).collect());
        }

        let mut peers = Vec::new();
        let mut peers6 = Vec::new();
        for record in selected {
            match record.ip {
                IpAddr::V4(ip) => {
                    let mut block = [0u8; 6];
                    BigEndian::write_u32(&mut block[..4], u32::from(ip));
                    BigEndian::write_u16(&mut block[4..], record.port);
                    peers.extend_from_slice(&block);
                }
                IpAddr::V6(ip) => {
                    let mut block = [0u8; 18];
                    BigEndian::write_u128(&mut block[..16], u128::from(ip));
                    BigEndian::write_u16(&mut block[16..], record.port);
                    peers6.extend_from_slice(&block);
                }
            }
        }
        PeerList::Compact { peers, peers6 }
    }
}
