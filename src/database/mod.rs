//! SQLite persistence of swarm records.
//!
//! One table holds every `(info_hash, peer_id, ip, port, status)` tuple, keyed on
//! the whole tuple. Rows are only ever inserted: the registry never forgets a
//! record, so neither does the store.

/// Database connector struct.
pub mod structs;

/// Connection, schema creation, load and batch save.
pub mod impls;
