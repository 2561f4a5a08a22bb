//! Configuration loading, defaults and validation.
//!
//! `config.toml` holds the logging settings, the announce tuning
//! (`[tracker_config]`), the optional SQLite persistence (`[database]`) and
//! one `[[http_server]]` table per listener.
//!
//! ```rust
//! use swarmkeeper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::init();
//! assert_eq!(config.tracker_config.numwant_max, 55);
//! assert!(config.validate().is_ok());
//! ```

/// Configuration error enum.
pub mod enums;

/// Configuration sections.
pub mod structs;

/// Defaults, (de)serialisation and validation.
pub mod impls;
