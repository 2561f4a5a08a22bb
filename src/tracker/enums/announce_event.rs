use serde::{Deserialize, Serialize};

/// Lifecycle event carried by an announce.
///
/// `None` is the periodic re-announce without an `event` parameter; it never
/// creates registry state.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnounceEvent {
    #[default]
    None,
    Started,
    Completed,
    Stopped,
}
