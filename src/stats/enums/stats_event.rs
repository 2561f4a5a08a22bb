use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    Records,
    Seeders,
    Leechers,
    RecordsUpdates,
    TimestampSave,
    TimestampConsole,
    Tcp4ConnectionsHandled,
    Tcp4AnnouncesHandled,
    Tcp4ScrapesHandled,
    Tcp4NotFound,
    Tcp4Failure,
    Tcp6ConnectionsHandled,
    Tcp6AnnouncesHandled,
    Tcp6ScrapesHandled,
    Tcp6NotFound,
    Tcp6Failure,
}
