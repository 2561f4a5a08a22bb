//! Atomic counters describing registry size and request traffic.
//!
//! Counters are plain `AtomicI64`s updated from every worker without locking;
//! [`TorrentTracker::get_stats`](crate::tracker::structs::torrent_tracker::TorrentTracker::get_stats)
//! takes a serialisable snapshot of all of them.
//!
//! ```rust,ignore
//! tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
