#![allow(dead_code)]
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use tempfile::TempDir;
use swarmkeeper::config::structs::configuration::Configuration;
use swarmkeeper::config::structs::http_trackers_config::HttpTrackersConfig;
use swarmkeeper::http::structs::http_service_data::HttpServiceData;
use swarmkeeper::tracker::structs::info_hash::InfoHash;
use swarmkeeper::tracker::structs::peer_id::PeerId;
use swarmkeeper::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.persistent = false;
    Arc::new(config)
}

/// A persistent configuration backed by a database file inside `dir`.
pub fn create_persistent_config(dir: &TempDir) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.database.persistent = true;
    config.database.path = format!("sqlite://{}", dir.path().join("swarmkeeper.db").display());
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
        ssl: false,
        ssl_key: String::new(),
        ssl_cert: String::new(),
    })
}

pub async fn create_test_tracker() -> TestTracker {
    create_tracker_with(create_test_config()).await
}

pub async fn create_tracker_with(config: TestConfig) -> TestTracker {
    Arc::new(TorrentTracker::new(config).await.expect("tracker without database"))
}

pub fn create_service_data(tracker: TestTracker) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: create_test_http_config(),
    })
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn info_hash(seed: u8) -> InfoHash {
    let mut bytes = [0u8; 20];
    for (index, byte) in bytes.iter_mut().enumerate() {
        *byte = seed.wrapping_add(index as u8);
    }
    InfoHash(bytes)
}

pub fn peer_id(seed: u8) -> PeerId {
    let mut bytes = *b"-SK0310-000000000000";
    bytes[19] = seed;
    PeerId(bytes)
}

pub fn ip(value: &str) -> IpAddr {
    value.parse().expect("valid test address")
}

/// Query map as produced by the query string parser.
pub fn query(pairs: &[(&str, &[u8])]) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    for (key, value) in pairs {
        query.entry(key.to_string()).or_default().push(value.to_vec());
    }
    query
}
