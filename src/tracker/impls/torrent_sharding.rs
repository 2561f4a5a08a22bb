use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding
    {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    pub fn shard_for(&self, info_hash: &InfoHash) -> &Arc<RwLock<BTreeMap<InfoHash, TorrentSwarm>>>
    {
        &self.shards[info_hash.0[0] as usize]
    }

    pub fn get_shard(&self, shard: u8) -> Option<Arc<RwLock<BTreeMap<InfoHash, TorrentSwarm>>>>
    {
        self.shards.get(shard as usize).cloned()
    }

    pub fn contains_torrent(&self, info_hash: &InfoHash) -> bool
    {
        self.shard_for(info_hash).read().contains_key(info_hash)
    }

    pub fn get_torrents_amount(&self) -> u64
    {
        self.shards.iter()
            .map(|shard| shard.read().len() as u64)
            .sum()
    }

    pub fn get_records_amount(&self) -> u64
    {
        self.shards.iter()
            .map(|shard| shard.read().values().map(|swarm| swarm.len() as u64).sum::<u64>())
            .sum()
    }
}
