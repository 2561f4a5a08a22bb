use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps an `event` query value, ignoring ASCII case. Empty or unknown values
    /// are the plain re-announce.
    pub fn from_query(value: &[u8]) -> AnnounceEvent
    {
        match value.to_ascii_lowercase().as_slice() {
            b"started" => AnnounceEvent::Started,
            b"completed" => AnnounceEvent::Completed,
            b"stopped" => AnnounceEvent::Stopped,
            _ => AnnounceEvent::None
        }
    }

    pub fn as_str(&self) -> &'static str
    {
        match self {
            AnnounceEvent::None => "",
            AnnounceEvent::Started => "started",
            AnnounceEvent::Completed => "completed",
            AnnounceEvent::Stopped => "stopped"
        }
    }
}

impl fmt::Display for AnnounceEvent {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
