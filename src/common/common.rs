use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into percent-decoded values per lowercased key.
///
/// Repeated keys keep every value in order. A key without `=` gets an empty value.
pub fn parse_query(query: Option<&str>) -> HashMap<String, Vec<Vec<u8>>>
{
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(query) = query else {
        return queries;
    };

    for query_item in query.split('&').filter(|item| !item.is_empty()) {
        let (key_raw, value_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(value_raw).collect::<Vec<u8>>();
        queries.entry(key_name).or_default().push(value_data);
    }

    queries
}

/// A 40 character hex value becomes its 20 decoded bytes; anything else is
/// returned unchanged.
pub fn normalize_hash_bytes(value: &[u8]) -> Vec<u8>
{
    if value.len() == 40 {
        if let Ok(decoded) = hex::decode(value) {
            return decoded;
        }
    }
    value.to_vec()
}

pub fn parse_log_level(level: &str) -> Option<LevelFilter>
{
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = parse_log_level(config.log_level.as_str()).unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}
