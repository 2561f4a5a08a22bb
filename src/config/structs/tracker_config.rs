use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Sent as `interval` in announce responses (seconds).
    pub request_interval: u64,
    /// Sent as `min interval` in announce responses (seconds).
    pub request_interval_minimum: u64,
    /// Peers returned when an announce carries no `numwant`.
    pub numwant_default: u64,
    /// Larger `numwant` values are refused.
    pub numwant_max: u64,
    /// Sent as `warning message` when not empty.
    #[serde(default)]
    pub warning_message: String,
}
