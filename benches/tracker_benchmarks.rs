use std::collections::HashMap;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use swarmkeeper::bencode::bencode::{decode, encode};
use swarmkeeper::bencode::enums::bencode_value::BencodeValue;
use swarmkeeper::common::common::parse_query;
use swarmkeeper::config::structs::configuration::Configuration;
use swarmkeeper::tracker::enums::announce_event::AnnounceEvent;
use swarmkeeper::tracker::structs::info_hash::InfoHash;
use swarmkeeper::tracker::structs::peer_id::PeerId;
use swarmkeeper::tracker::structs::torrent_tracker::TorrentTracker;

fn info_hash(n: u32) -> InfoHash {
    let mut bytes = [0u8; 20];
    bytes[..4].copy_from_slice(&n.to_be_bytes());
    InfoHash(bytes)
}

fn peer_id(n: u32) -> PeerId {
    let mut bytes = *b"-SK0310-000000000000";
    bytes[16..].copy_from_slice(&n.to_be_bytes());
    PeerId(bytes)
}

fn peer_ip(n: u32) -> IpAddr {
    IpAddr::V4(Ipv4Addr::from(0x0a00_0000 | n))
}

fn create_tracker() -> Arc<TorrentTracker> {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut config = Configuration::init();
    config.database.persistent = false;
    Arc::new(runtime.block_on(TorrentTracker::new(Arc::new(config))).unwrap())
}

fn announce_response(peers: usize) -> BencodeValue {
    let mut response = BencodeValue::dictionary();
    response.insert("interval", 1800i64);
    response.insert("min interval", 900i64);
    response.insert("complete", 10i64);
    response.insert("incomplete", 20i64);
    response.insert("peers", (0..peers).map(|n| {
        let mut peer = BencodeValue::dictionary();
        peer.insert("peer id", peer_id(n as u32).0.to_vec());
        peer.insert("ip", peer_ip(n as u32).to_string());
        peer.insert("port", 6881i64);
        peer
    }).collect::<Vec<BencodeValue>>());
    response
}

fn bench_bencode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bencode");
    for peers in [10usize, 50, 200].iter() {
        let response = announce_response(*peers);
        let bytes = encode(&response);
        group.bench_with_input(BenchmarkId::new("encode", peers), &response, |b, response| {
            b.iter(|| black_box(encode(response)));
        });
        group.bench_with_input(BenchmarkId::new("decode", peers), &bytes, |b, bytes| {
            b.iter(|| black_box(decode(bytes)));
        });
    }
    group.finish();
}

fn bench_record(c: &mut Criterion) {
    let tracker = create_tracker();
    let mut n = 0u32;

    c.bench_function("record_new_peer", |b| {
        b.iter(|| {
            n = n.wrapping_add(1);
            black_box(tracker.record(info_hash(n % 1024), peer_id(n), peer_ip(n), 6881, AnnounceEvent::Started));
        });
    });

    c.bench_function("record_duplicate_peer", |b| {
        tracker.record(info_hash(0), peer_id(0), peer_ip(0), 6881, AnnounceEvent::Started);
        b.iter(|| black_box(tracker.record(info_hash(0), peer_id(0), peer_ip(0), 6881, AnnounceEvent::Started)));
    });
}

fn bench_peer_list(c: &mut Criterion) {
    let tracker = create_tracker();
    let hash = info_hash(u32::MAX);
    for n in 0..1000u32 {
        tracker.record(hash, peer_id(n), peer_ip(n), 6881, AnnounceEvent::Started);
    }

    let mut group = c.benchmark_group("peer_list");
    for limit in [10usize, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::new("compact", limit), limit, |b, &limit| {
            b.iter(|| black_box(tracker.peer_list(&hash, limit, true, false)));
        });
        group.bench_with_input(BenchmarkId::new("descriptive", limit), limit, |b, &limit| {
            b.iter(|| black_box(tracker.peer_list(&hash, limit, false, false)));
        });
    }
    group.finish();
}

fn bench_announce(c: &mut Criterion) {
    let tracker = create_tracker();
    let remote = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1));
    let hash = info_hash(7);
    for n in 0..100u32 {
        tracker.record(hash, peer_id(n), peer_ip(n), 6881, AnnounceEvent::Started);
    }
    let query_string = format!(
        "info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=1000&event=started&compact=1",
        hex::encode(hash.0),
        hex::encode(peer_id(u32::MAX).0)
    );

    c.bench_function("parse_query", |b| {
        b.iter(|| black_box(parse_query(Some(query_string.as_str()))));
    });

    let query: HashMap<String, Vec<Vec<u8>>> = parse_query(Some(query_string.as_str()));
    c.bench_function("announce_compact", |b| {
        b.iter(|| black_box(tracker.announce(remote, &query).map(|response| response.encode())));
    });
}

criterion_group!(
    benches,
    bench_bencode,
    bench_record,
    bench_peer_list,
    bench_announce
);
criterion_main!(benches);
