use serde::{Deserialize, Serialize};
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    /// `off`, `trace`, `debug`, `info`, `warn` or `error`.
    pub log_level: String,
    /// Seconds between two statistics lines on the console.
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub database: DatabaseConfig,
    pub http_server: Vec<HttpTrackersConfig>,
}
