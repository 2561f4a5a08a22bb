use crate::tracker::structs::peer_descriptor::PeerDescriptor;

/// The peers disclosed by an announce, in the encoding the client asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerList {
    /// 6-byte IPv4 blocks in `peers`, 18-byte IPv6 blocks in `peers6`.
    Compact {
        peers: Vec<u8>,
        peers6: Vec<u8>,
    },
    Descriptive(Vec<PeerDescriptor>),
}
