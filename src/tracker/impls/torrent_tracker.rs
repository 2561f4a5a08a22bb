use std::sync::Arc;
use log::info;
use parking_lot::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Builds an empty registry. When persistence is enabled the database is
    /// opened (and its table created) but nothing is loaded yet, see
    /// [`TorrentTracker::load_records_from_database`].
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn new(config: Arc<Configuration>) -> Result<TorrentTracker, sqlx::Error>
    {
        let sqlx = match config.database.persistent {
            true => Some(DatabaseConnector::new(config.clone()).await?),
            false => None
        };

        Ok(TorrentTracker {
            config,
            torrents_sharding: Arc::new(TorrentSharding::new()),
            records_updates: Arc::new(Mutex::new(Vec::new())),
            stats: Arc::new(StatsAtomics::new()),
            sqlx,
        })
    }

    /// Restores every stored record into the registry. Restored records are not
    /// queued for persistence again.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_records_from_database(&self) -> Result<u64, sqlx::Error>
    {
        let Some(database) = &self.sqlx else {
            return Ok(0);
        };
        let records = database.load_records().await?;
        let total = records.len();
        let loaded = self.load_records(records);
        info!("[BOOT] Loaded {loaded} of {total} records from the database");
        Ok(loaded)
    }
}
