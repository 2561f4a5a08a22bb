//! Data structures of the swarm registry and the announce/scrape handlers.

/// The registry handle shared by every listener.
pub mod torrent_tracker;

/// 256-way sharded swarm storage.
pub mod torrent_sharding;

/// Records of one info hash with running seeder/leecher counts.
pub mod torrent_swarm;

/// One stored (peer id, ip, port, status) membership.
pub mod peer_record;

/// Entry of a descriptive peer list.
pub mod peer_descriptor;

/// 20-byte torrent identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Validated announce parameters.
pub mod announce_query_request;

/// Validated scrape parameters.
pub mod scrape_query_request;
