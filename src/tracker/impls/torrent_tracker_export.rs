use std::fs::File;
use std::io::{BufWriter, Write};
use log::info;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Writes every record as JSON, keyed by hex info hash.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn export(&self, path: &str) -> std::io::Result<u64>
    {
        info!("[EXPORT] Exporting records to file {path}");
        let records = self.get_all_records();
        let count = records.values().map(|records| records.len() as u64).sum();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;
        info!("[EXPORT] Exported {count} records of {} swarms", records.len());
        Ok(count)
    }
}
