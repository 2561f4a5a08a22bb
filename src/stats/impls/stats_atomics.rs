use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            timestamp_run_save: AtomicI64::new(0),
            timestamp_run_console: AtomicI64::new(0),
            torrents: AtomicI64::new(0),
            records: AtomicI64::new(0),
            seeders: AtomicI64::new(0),
            leechers: AtomicI64::new(0),
            records_updates: AtomicI64::new(0),
            tcp4_connections_handled: AtomicI64::new(0),
            tcp4_announces_handled: AtomicI64::new(0),
            tcp4_scrapes_handled: AtomicI64::new(0),
            tcp4_not_found: AtomicI64::new(0),
            tcp4_failure: AtomicI64::new(0),
            tcp6_connections_handled: AtomicI64::new(0),
            tcp6_announces_handled: AtomicI64::new(0),
            tcp6_scrapes_handled: AtomicI64::new(0),
            tcp6_not_found: AtomicI64::new(0),
            tcp6_failure: AtomicI64::new(0),
        }
    }
}
