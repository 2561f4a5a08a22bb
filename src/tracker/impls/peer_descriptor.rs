use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::structs::peer_descriptor::PeerDescriptor;

impl PeerDescriptor {
    pub fn to_bencode(&self) -> BencodeValue
    {
        let mut peer = BencodeValue::dictionary();
        if let Some(peer_id) = self.peer_id {
            peer.insert("peer id", peer_id.0.to_vec());
        }
        peer.insert("ip", self.ip.to_string());
        peer.insert("port", self.port);
        peer
    }
}
