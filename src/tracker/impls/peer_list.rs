use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::peer_descriptor::PeerDescriptor;

impl PeerList {
    pub fn empty(compact: bool) -> PeerList
    {
        match compact {
            true => PeerList::Compact { peers: Vec::new(), peers6: Vec::new() },
            false => PeerList::Descriptive(Vec::new())
        }
    }

    /// Number of peers disclosed.
    pub fn len(&self) -> usize
    {
        match self {
            PeerList::Compact { peers, peers6 } => peers.len() / 6 + peers6.len() / 18,
            PeerList::Descriptive(peers) => peers.len()
        }
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Adds `peers` (and `peers6` when there are compact IPv6 peers) to an
    /// announce response dictionary.
    pub fn insert_into(self, response: &mut BencodeValue)
    {
        match self {
            PeerList::Compact { peers, peers6 } => {
                response.insert("peers", peers);
                if !peers6.is_empty() {
                    response.insert("peers6", peers6);
                }
            }
            PeerList::Descriptive(peers) => {
                response.insert("peers", peers.iter().map(PeerDescriptor::to_bencode).collect::<Vec<BencodeValue>>());
            }
        }
    }
}
