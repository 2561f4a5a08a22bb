//! Swarm registry and the announce/scrape protocol handlers.
//!
//! Swarms are spread over 256 shards keyed by the first byte of the info hash,
//! each behind its own `RwLock`. A swarm is a list of
//! `(peer id, ip, port, status)` records in arrival order. Identical tuples are
//! stored once, and an announce without an event stores nothing.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swarmkeeper::config::structs::configuration::Configuration;
//! use swarmkeeper::tracker::enums::announce_event::AnnounceEvent;
//! use swarmkeeper::tracker::structs::info_hash::InfoHash;
//! use swarmkeeper::tracker::structs::peer_id::PeerId;
//! use swarmkeeper::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! # async fn run() -> Result<(), sqlx::Error> {
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init())).await?;
//! let info_hash = InfoHash([1u8; 20]);
//! tracker.record(info_hash, PeerId([2u8; 20]), "10.0.0.1".parse().unwrap(), 6881, AnnounceEvent::Completed);
//! assert_eq!(tracker.count_seeders(&info_hash), 1);
//! # Ok(())
//! # }
//! ```

pub mod enums;
pub mod impls;
pub mod structs;
