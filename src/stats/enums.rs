/// Counter selector used with `update_stats` and `set_stats`.
pub mod stats_event;
