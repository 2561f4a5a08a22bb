use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub timestamp_run_console: i64,
    pub torrents: i64,
    pub records: i64,
    pub seeders: i64,
    pub leechers: i64,
    pub records_updates: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_scrapes_handled: i64,
    pub tcp4_not_found: i64,
    pub tcp4_failure: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_scrapes_handled: i64,
    pub tcp6_not_found: i64,
    pub tcp6_failure: i64,
}
