//! Implementation blocks for the registry and its handlers.

/// InfoHash: hex Display/FromStr, serde as hex string, slice conversion.
pub mod info_hash;

/// PeerId: hex Display/FromStr, serde as hex string, slice conversion.
pub mod peer_id;

/// AnnounceEvent parsing from query values.
pub mod announce_event;

/// Failure codes and their bencoded rendering.
pub mod tracker_error;

pub mod peer_record;

pub mod peer_descriptor;

/// Peer list sizing and insertion into announce responses.
pub mod peer_list;

/// Swarm insertion with de-duplication and compact/descriptive views.
pub mod torrent_swarm;

/// Shard selection and totals.
pub mod torrent_sharding;

/// TorrentTracker construction and database restore.
pub mod torrent_tracker;

/// Registry operations: record, counts, peer lists, bulk access.
pub mod torrent_tracker_swarms;

/// Announce and scrape validation and response assembly.
pub mod torrent_tracker_handlers;

/// Pending database updates and their flush.
pub mod torrent_tracker_updates;

/// JSON export of all records.
pub mod torrent_tracker_export;

/// JSON import of exported records.
pub mod torrent_tracker_import;
