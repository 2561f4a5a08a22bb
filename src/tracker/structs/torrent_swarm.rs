use ahash::AHashSet;
use crate::tracker::structs::peer_record::PeerRecord;

/// All records known for one info hash.
///
/// Records keep their insertion order, which is the order peers are disclosed in.
/// `seeders` and `leechers` mirror the number of `completed` and `started`
/// records; records are never removed so both only grow.
#[derive(Clone, Debug, Default)]
pub struct TorrentSwarm {
    pub(crate) records: Vec<PeerRecord>,
    pub(crate) index: AHashSet<PeerRecord>,
    pub(crate) seeders: u64,
    pub(crate) leechers: u64,
}
