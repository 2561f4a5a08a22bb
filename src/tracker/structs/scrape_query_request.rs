use crate::tracker::structs::info_hash::InfoHash;

/// A validated scrape; duplicates are already removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeQueryRequest {
    pub info_hash: Vec<InfoHash>,
}
