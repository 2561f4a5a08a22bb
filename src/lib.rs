//! # Swarmkeeper
//!
//! An HTTP BitTorrent tracker with its own canonical bencode codec.
//!
//! Peers announce themselves per torrent over `GET /announce` and receive the
//! swarm's seeder/leecher counts together with a peer list, either compact
//! (BEP 23, BEP 7 for IPv6) or as dictionaries. `GET /scrape` answers the
//! aggregate counts of one or more torrents (BEP 48).
//!
//! ## Modules
//!
//! - [`bencode`] - encoder/decoder with canonical dictionary ordering
//! - [`tracker`] - swarm registry and the announce/scrape handlers
//! - [`http`] - actix-web listener
//! - [`database`] - SQLite persistence of swarm records
//! - [`config`] - TOML configuration
//! - [`stats`] - atomic counters and the console line
//! - [`common`] - query parsing and logging setup
//! - [`structs`] - command line arguments

/// Bencode values, decoding and canonical encoding.
pub mod bencode;

/// Query string parsing, hash normalisation and logging setup.
pub mod common;

/// Configuration loading, defaults and validation.
pub mod config;

/// SQLite storage of swarm records.
pub mod database;

/// HTTP tracker listener.
pub mod http;

/// Registry and request counters.
pub mod stats;

/// Command line interface.
pub mod structs;

/// Swarm registry, announce and scrape.
pub mod tracker;
