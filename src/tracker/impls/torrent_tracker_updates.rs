use chrono::Utc;
use log::{error, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn add_record_update(&self, info_hash: InfoHash, record: PeerRecord)
    {
        self.records_updates.lock().push((info_hash, record));
        self.update_stats(StatsEvent::RecordsUpdates, 1);
    }

    /// Empties the pending queue and hands its content to the caller.
    pub fn take_record_updates(&self) -> Vec<(InfoHash, PeerRecord)>
    {
        let updates = std::mem::take(&mut *self.records_updates.lock());
        self.update_stats(StatsEvent::RecordsUpdates, -(updates.len() as i64));
        updates
    }

    /// Puts a batch back in front of anything queued since it was taken.
    pub fn restore_record_updates(&self, updates: Vec<(InfoHash, PeerRecord)>)
    {
        let restored = updates.len() as i64;
        {
            let mut lock = self.records_updates.lock();
            let newer = std::mem::replace(&mut *lock, updates);
            lock.extend(newer);
        }
        self.update_stats(StatsEvent::RecordsUpdates, restored);
    }

    /// Writes the pending queue to the database. A failed batch is re-queued.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn save_records_updates(&self) -> Result<u64, sqlx::Error>
    {
        let Some(database) = &self.sqlx else {
            return Ok(0);
        };

        let updates = self.take_record_updates();
        if updates.is_empty() {
            return Ok(0);
        }

        match database.save_records(&updates).await {
            Ok(saved) => {
                info!("[SYNC RECORD UPDATES] Synced {} records ({} new)", updates.len(), saved);
                self.set_stats(StatsEvent::TimestampSave, Utc::now().timestamp());
                Ok(saved)
            }
            Err(error) => {
                error!("[SYNC RECORD UPDATES] Unable to sync {} records: {}", updates.len(), error);
                self.restore_record_updates(updates);
                Err(error)
            }
        }
    }
}
