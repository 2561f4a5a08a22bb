use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::net::IpAddr;
use log::debug;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Adds a membership record to the swarm of `info_hash`, creating the swarm
    /// on first use.
    ///
    /// Returns `false` without touching anything when `status` is
    /// [`AnnounceEvent::None`] or an identical record already exists. Newly stored
    /// records are queued for the database when persistence is enabled.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn record(&self, info_hash: InfoHash, peer_id: PeerId, ip: IpAddr, port: u16, status: AnnounceEvent) -> bool
    {
        let record = PeerRecord::new(peer_id, ip, port, status);
        if !self.store_record(info_hash, record) {
            return false;
        }
        if self.config.database.persistent {
            self.add_record_update(info_hash, record);
        }
        true
    }

    /// Bulk restore of records, bypassing the persistence queue.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load_records(&self, records: Vec<(InfoHash, PeerRecord)>) -> u64
    {
        records.into_iter()
            .filter(|(info_hash, record)| self.store_record(*info_hash, *record))
            .count() as u64
    }

    fn store_record(&self, info_hash: InfoHash, record: PeerRecord) -> bool
    {
        if record.status == AnnounceEvent::None {
            return false;
        }

        let (created, stored) = {
            let mut lock = self.torrents_sharding.shard_for(&info_hash).write();
            match lock.entry(info_hash) {
                Entry::Vacant(vacant) => {
                    (true, vacant.insert(TorrentSwarm::new()).insert(record))
                }
                Entry::Occupied(mut occupied) => {
                    (false, occupied.get_mut().insert(record))
                }
            }
        };

        if created {
            self.update_stats(StatsEvent::Torrents, 1);
        }
        if stored {
            debug!("[RECORD] {} {} {} {}", info_hash, record.peer_id, record.socket_addr(), record.status);
            self.update_stats(StatsEvent::Records, 1);
            match record.status {
                AnnounceEvent::Completed => { self.update_stats(StatsEvent::Seeders, 1); }
                AnnounceEvent::Started => { self.update_stats(StatsEvent::Leechers, 1); }
                _ => {}
            }
        }
        stored
    }

    /// Records with status `completed`.
    pub fn count_seeders(&self, info_hash: &InfoHash) -> u64
    {
        self.swarm_counts(info_hash).0
    }

    /// Records with status `started`.
    pub fn count_leechers(&self, info_hash: &InfoHash) -> u64
    {
        self.swarm_counts(info_hash).1
    }

    /// `(seeders, leechers)` read under a single lock acquisition.
    pub fn swarm_counts(&self, info_hash: &InfoHash) -> (u64, u64)
    {
        self.torrents_sharding.shard_for(info_hash).read()
            .get(info_hash)
            .map(|swarm| (swarm.seeders(), swarm.leechers()))
            .unwrap_or((0, 0))
    }

    /// Up to `limit` peers of the swarm in insertion order. The caller bounds
    /// `limit`; an unknown swarm yields an empty list.
    pub fn peer_list(&self, info_hash: &InfoHash, limit: usize, compact: bool, omit_peer_id: bool) -> PeerList
    {
        self.snapshot(info_hash, limit, compact, omit_peer_id).2
    }

    /// Seeders, leechers and peer list of one swarm, consistent with each other.
    pub fn snapshot(&self, info_hash: &InfoHash, limit: usize, compact: bool, omit_peer_id: bool) -> (u64, u64, PeerList)
    {
        match self.torrents_sharding.shard_for(info_hash).read().get(info_hash) {
            None => (0, 0, PeerList::empty(compact)),
            Some(swarm) => (swarm.seeders(), swarm.leechers(), swarm.peer_list(limit, compact, omit_peer_id))
        }
    }

    pub fn get_swarm(&self, info_hash: &InfoHash) -> Option<TorrentSwarm>
    {
        self.torrents_sharding.shard_for(info_hash).read().get(info_hash).cloned()
    }

    pub fn swarm_count(&self) -> u64
    {
        self.torrents_sharding.get_torrents_amount()
    }

    pub fn record_count(&self) -> u64
    {
        self.torrents_sharding.get_records_amount()
    }

    /// Every record grouped by info hash, each group in insertion order.
    pub fn get_all_records(&self) -> BTreeMap<InfoHash, Vec<PeerRecord>>
    {
        let mut all = BTreeMap::new();
        for shard in self.torrents_sharding.shards.iter() {
            let lock = shard.read();
            for (info_hash, swarm) in lock.iter() {
                all.insert(*info_hash, swarm.records().to_vec());
            }
        }
        all
    }
}
