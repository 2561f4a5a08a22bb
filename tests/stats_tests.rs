mod common;

use std::net::SocketAddr;
use actix_web::{test, App};
use swarmkeeper::http::http::http_service_routes;
use swarmkeeper::tracker::enums::announce_event::AnnounceEvent;

#[actix_web::test]
async fn test_request_counters_per_family() {
    let tracker = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;
    let ipv4: SocketAddr = "192.0.2.1:40000".parse().expect("address");
    let ipv6: SocketAddr = "[2001:db8::1]:40000".parse().expect("address");

    let announce = format!(
        "/announce?info_hash={}&peer_id={}&port=6881&event=started",
        hex::encode(common::info_hash(1).0),
        hex::encode(common::peer_id(1).0)
    );
    for (uri, peer) in [(announce.as_str(), ipv4), (announce.as_str(), ipv6), ("/scrape", ipv6), ("/favicon.ico", ipv4)] {
        test::call_service(&app, test::TestRequest::get().uri(uri).peer_addr(peer).to_request()).await;
    }

    let stats = tracker.get_stats();
    assert_eq!(stats.tcp4_connections_handled, 2);
    assert_eq!(stats.tcp6_connections_handled, 2);
    assert_eq!(stats.tcp4_announces_handled, 1);
    assert_eq!(stats.tcp6_announces_handled, 1);
    assert_eq!(stats.tcp6_scrapes_handled, 1);
    assert_eq!(stats.tcp6_failure, 1);
    assert_eq!(stats.tcp4_not_found, 1);
    assert_eq!(stats.torrents, 1);
    assert_eq!(stats.leechers, 2);
}

#[tokio::test]
async fn test_registry_counters_track_new_records_only() {
    let tracker = common::create_test_tracker().await;
    for _ in 0..3 {
        tracker.record(common::info_hash(2), common::peer_id(1), common::ip("10.0.0.1"), 6881, AnnounceEvent::Completed);
    }
    tracker.record(common::info_hash(3), common::peer_id(1), common::ip("10.0.0.1"), 6881, AnnounceEvent::Stopped);

    let stats = tracker.get_stats();
    assert_eq!(stats.torrents, 2);
    assert_eq!(stats.records, 2);
    assert_eq!(stats.seeders, 1);
    assert_eq!(stats.leechers, 0);
    assert_eq!(tracker.swarm_count(), 2);
    assert_eq!(tracker.record_count(), 2);
}
