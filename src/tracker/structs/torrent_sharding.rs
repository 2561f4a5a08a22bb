//! Sharded swarm storage for concurrent access.

use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

/// Swarm storage split into 256 independently locked shards.
///
/// A swarm lives in `shards[info_hash.0[0]]`. Writers only block readers and
/// writers of the same shard, so a `record` is atomic with respect to counts and
/// peer lists of its own swarm while unrelated swarms stay available.
#[derive(Debug)]
pub struct TorrentSharding {
    pub shards: [Arc<RwLock<BTreeMap<InfoHash, TorrentSwarm>>>; 256],
}
