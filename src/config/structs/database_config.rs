use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub persistent: bool,
    /// SQLite connection string, e.g. `sqlite://data.db`.
    pub path: String,
    pub table_name: String,
    /// Seconds between two flushes of pending records.
    pub persistent_interval: u64,
}
