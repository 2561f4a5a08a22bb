//! Configuration data structures, one per TOML section.

pub mod configuration;
pub mod tracker_config;
pub mod database_config;
pub mod http_trackers_config;
