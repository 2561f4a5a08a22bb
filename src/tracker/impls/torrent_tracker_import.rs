use std::collections::BTreeMap;
use std::fs;
use log::info;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Records every entry of an export file. Entries go through
    /// [`TorrentTracker::record`], so they are de-duplicated and queued for the
    /// database like announced ones.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn import(&self, path: &str) -> std::io::Result<u64>
    {
        info!("[IMPORT] Importing records from file {path}");
        let data = fs::read(path)?;
        let swarms: BTreeMap<InfoHash, Vec<PeerRecord>> = serde_json::from_slice(&data)?;

        let mut imported = 0u64;
        for (info_hash, records) in swarms {
            for record in records {
                if self.record(info_hash, record.peer_id, record.ip, record.port, record.status) {
                    imported += 1;
                }
            }
        }
        info!("[IMPORT] Imported {imported} records");
        Ok(imported)
    }
}
