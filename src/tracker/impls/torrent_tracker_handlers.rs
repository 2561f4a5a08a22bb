use std::collections::HashMap;
use std::net::IpAddr;
use log::debug;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::common::normalize_hash_bytes;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

fn first<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]>
{
    query.get(field)
        .and_then(|values| values.first())
        .map(|value| value.as_slice())
}

fn parse_number<T: std::str::FromStr>(value: &[u8]) -> Option<T>
{
    std::str::from_utf8(value).ok()?.trim().parse::<T>().ok()
}

impl TorrentTracker {
    /// Checks an announce query in a fixed order and stops at the first failure:
    /// info hash, peer id, port, numwant. Nothing is recorded here.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, TrackerError>
    {
        let tracker_config = &self.config.tracker_config;

        let info_hash = first(query, "info_hash").ok_or(TrackerError::MissingInfoHash)?;
        let info_hash = InfoHash::try_from(normalize_hash_bytes(info_hash).as_slice())?;

        let peer_id = first(query, "peer_id").ok_or(TrackerError::MissingPeerId)?;
        let peer_id = PeerId::try_from(normalize_hash_bytes(peer_id).as_slice())?;

        let port = first(query, "port").ok_or(TrackerError::MissingPort)?;
        let port = parse_number::<u16>(port).ok_or(TrackerError::InvalidPort)?;

        let numwant = match first(query, "numwant") {
            None => tracker_config.numwant_default,
            Some(value) => match parse_number::<u64>(value) {
                Some(numwant) if numwant <= tracker_config.numwant_max => numwant,
                _ => return Err(TrackerError::InvalidNumwant)
            }
        };

        let ip = first(query, "ip")
            .and_then(|value| std::str::from_utf8(value).ok())
            .and_then(|value| value.trim().parse::<IpAddr>().ok())
            .map(|ip| ip.to_canonical())
            .unwrap_or(remote_addr);

        let counter = |field: &str| first(query, field).and_then(parse_number::<u64>).unwrap_or(0);

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            ip,
            port,
            uploaded: counter("uploaded"),
            downloaded: counter("downloaded"),
            left: counter("left"),
            compact: first(query, "compact") == Some(b"1".as_slice()),
            no_peer_id: first(query, "no_peer_id").is_some_and(|value| value != b"0"),
            event: first(query, "event").map(AnnounceEvent::from_query).unwrap_or_default(),
            numwant,
            key: first(query, "key").map(|value| value.to_vec()),
            tracker_id: first(query, "trackerid").map(|value| value.to_vec()),
        })
    }

    /// Applies a validated announce and builds the response dictionary.
    ///
    /// Counts and peers are taken after the announcing peer was recorded, so a
    /// peer sees itself in the list.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, request: &AnnounceQueryRequest) -> BencodeValue
    {
        let tracker_config = &self.config.tracker_config;

        if request.event != AnnounceEvent::None {
            self.record(request.info_hash, request.peer_id, request.ip, request.port, request.event);
        }

        let limit = usize::try_from(request.numwant).unwrap_or(usize::MAX);
        let (complete, incomplete, peers) = self.snapshot(&request.info_hash, limit, request.compact, request.no_peer_id);
        debug!(
            "[ANNOUNCE] {} from {}:{} event {} uploaded {} downloaded {} left {} key {} complete {} incomplete {} peers {}",
            request.info_hash, request.ip, request.port, request.event.as_str(),
            request.uploaded, request.downloaded, request.left,
            request.key.as_deref().map(String::from_utf8_lossy).unwrap_or_default(),
            complete, incomplete, peers.len()
        );

        let mut response = BencodeValue::dictionary();
        response.insert("interval", tracker_config.request_interval);
        response.insert("min interval", tracker_config.request_interval_minimum);
        response.insert("complete", complete);
        response.insert("incomplete", incomplete);
        peers.insert_into(&mut response);
        if let Some(tracker_id) = request.tracker_id.as_ref().filter(|tracker_id| !tracker_id.is_empty()) {
            response.insert("tracker id", tracker_id.clone());
        }
        if !tracker_config.warning_message.is_empty() {
            response.insert("warning message", tracker_config.warning_message.as_str());
        }
        response
    }

    /// Validation followed by [`TorrentTracker::handle_announce`].
    pub fn announce(&self, remote_addr: IpAddr, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<BencodeValue, TrackerError>
    {
        let request = self.validate_announce(remote_addr, query)?;
        Ok(self.handle_announce(&request))
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn validate_scrape(&self, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<ScrapeQueryRequest, TrackerError>
    {
        let values = query.get("info_hash")
            .filter(|values| !values.is_empty())
            .ok_or(TrackerError::MissingInfoHash)?;

        let mut info_hash = Vec::with_capacity(values.len());
        for value in values {
            let hash = InfoHash::try_from(normalize_hash_bytes(value).as_slice())?;
            if !info_hash.contains(&hash) {
                info_hash.push(hash);
            }
        }
        Ok(ScrapeQueryRequest { info_hash })
    }

    /// Builds `{"files": {hash: {"complete", "downloaded", "incomplete"}}}`.
    /// `downloaded` repeats the seeder count. Unknown hashes report zeros.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_scrape(&self, request: &ScrapeQueryRequest) -> BencodeValue
    {
        let mut files = BencodeValue::dictionary();
        for info_hash in &request.info_hash {
            let (seeders, leechers) = self.swarm_counts(info_hash);
            let mut file = BencodeValue::dictionary();
            file.insert("complete", seeders);
            file.insert("downloaded", seeders);
            file.insert("incomplete", leechers);
            files.insert(info_hash.0.to_vec(), file);
        }

        let mut response = BencodeValue::dictionary();
        response.insert("files", files);
        response
    }

    pub fn scrape(&self, query: &HashMap<String, Vec<Vec<u8>>>) -> Result<BencodeValue, TrackerError>
    {
        let request = self.validate_scrape(query)?;
        Ok(self.handle_scrape(&request))
    }
}
