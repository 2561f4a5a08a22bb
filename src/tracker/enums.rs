//! Enumerations for tracker operations.

/// Announce lifecycle events (`started`, `completed`, `stopped`, or none).
pub mod announce_event;

/// Client-facing failure codes.
pub mod tracker_error;

/// Compact or descriptive peer list views.
pub mod peer_list;
