use std::sync::atomic::{AtomicI64, Ordering};
use log::info;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    fn stats_counter(&self, event: StatsEvent) -> &AtomicI64
    {
        let stats = &self.stats;
        match event {
            StatsEvent::Torrents => &stats.torrents,
            StatsEvent::Records => &stats.records,
            StatsEvent::Seeders => &stats.seeders,
            StatsEvent::Leechers => &stats.leechers,
            StatsEvent::RecordsUpdates => &stats.records_updates,
            StatsEvent::TimestampSave => &stats.timestamp_run_save,
            StatsEvent::TimestampConsole => &stats.timestamp_run_console,
            StatsEvent::Tcp4ConnectionsHandled => &stats.tcp4_connections_handled,
            StatsEvent::Tcp4AnnouncesHandled => &stats.tcp4_announces_handled,
            StatsEvent::Tcp4ScrapesHandled => &stats.tcp4_scrapes_handled,
            StatsEvent::Tcp4NotFound => &stats.tcp4_not_found,
            StatsEvent::Tcp4Failure => &stats.tcp4_failure,
            StatsEvent::Tcp6ConnectionsHandled => &stats.tcp6_connections_handled,
            StatsEvent::Tcp6AnnouncesHandled => &stats.tcp6_announces_handled,
            StatsEvent::Tcp6ScrapesHandled => &stats.tcp6_scrapes_handled,
            StatsEvent::Tcp6NotFound => &stats.tcp6_not_found,
            StatsEvent::Tcp6Failure => &stats.tcp6_failure
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        let stats = &self.stats;
        Stats {
            started: stats.started.load(Ordering::SeqCst),
            timestamp_run_save: stats.timestamp_run_save.load(Ordering::SeqCst),
            timestamp_run_console: stats.timestamp_run_console.load(Ordering::SeqCst),
            torrents: stats.torrents.load(Ordering::SeqCst),
            records: stats.records.load(Ordering::SeqCst),
            seeders: stats.seeders.load(Ordering::SeqCst),
            leechers: stats.leechers.load(Ordering::SeqCst),
            records_updates: stats.records_updates.load(Ordering::SeqCst),
            tcp4_connections_handled: stats.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_announces_handled: stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_scrapes_handled: stats.tcp4_scrapes_handled.load(Ordering::SeqCst),
            tcp4_not_found: stats.tcp4_not_found.load(Ordering::SeqCst),
            tcp4_failure: stats.tcp4_failure.load(Ordering::SeqCst),
            tcp6_connections_handled: stats.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: stats.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_scrapes_handled: stats.tcp6_scrapes_handled.load(Ordering::SeqCst),
            tcp6_not_found: stats.tcp6_not_found.load(Ordering::SeqCst),
            tcp6_failure: stats.tcp6_failure.load(Ordering::SeqCst),
        }
    }

    /// Adds `value` (which may be negative) to the selected counter.
    pub fn update_stats(&self, event: StatsEvent, value: i64) -> i64
    {
        self.stats_counter(event).fetch_add(value, Ordering::SeqCst) + value
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats_counter(event).store(value, Ordering::SeqCst);
    }

    pub fn log_console_stats(&self)
    {
        let stats = self.get_stats();
        info!(
            "[STATS] Torrents: {} - Records: {} - Seeders: {} - Leechers: {} - Updates: {}",
            stats.torrents, stats.records, stats.seeders, stats.leechers, stats.records_updates
        );
        info!(
            "[STATS TCP] IPv4: Conn:{} A:{} S:{} F:{} 404:{} | IPv6: Conn:{} A:{} S:{} F:{} 404:{}",
            stats.tcp4_connections_handled, stats.tcp4_announces_handled, stats.tcp4_scrapes_handled,
            stats.tcp4_failure, stats.tcp4_not_found,
            stats.tcp6_connections_handled, stats.tcp6_announces_handled, stats.tcp6_scrapes_handled,
            stats.tcp6_failure, stats.tcp6_not_found
        );
    }
}
