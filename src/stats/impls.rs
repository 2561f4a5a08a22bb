/// StatsAtomics construction.
pub mod stats_atomics;

/// TorrentTracker statistics accessors and the console line.
pub mod torrent_tracker;
