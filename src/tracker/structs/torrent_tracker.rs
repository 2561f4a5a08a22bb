use std::sync::Arc;
use parking_lot::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_sharding::TorrentSharding;

/// The swarm registry and everything the protocol handlers need around it.
///
/// Constructed once at startup and shared as `Arc<TorrentTracker>` by every
/// listener and background task.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    /// Records stored since the last flush to the database.
    pub records_updates: Arc<Mutex<Vec<(InfoHash, PeerRecord)>>>,
    pub stats: Arc<StatsAtomics>,
    /// Present only when `database.persistent` is enabled.
    pub sqlx: Option<DatabaseConnector>,
}
