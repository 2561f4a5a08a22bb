use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use futures_util::TryStreamExt;
use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;

const LOG_PREFIX: &str = "[SQLite]";
const TABLE_NAME_REGEX: &str = r"^[a-z_][a-z0-9_]{0,30}$";

impl DatabaseConnector {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsl: &str) -> Result<Pool<Sqlite>, Error>
    {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .connect_with(options)
            .await
    }

    /// Opens the pool and makes sure the records table exists.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn new(config: Arc<Configuration>) -> Result<DatabaseConnector, Error>
    {
        let database = &config.database;
        Configuration::validate_value("[DB] Table", &database.table_name, TABLE_NAME_REGEX)
            .map_err(|error| Error::Configuration(Box::new(error)))?;

        let pool = DatabaseConnector::create(database.path.as_str()).await?;
        info!("{LOG_PREFIX} Connected to {}", database.path);

        let connector = DatabaseConnector {
            pool,
            table_name: database.table_name.clone(),
        };
        connector.create_table().await?;
        Ok(connector)
    }

    async fn create_table(&self) -> Result<(), Error>
    {
        sqlx::query("PRAGMA synchronous = full;").execute(&self.pool).await?;

        info!("{LOG_PREFIX} Creating table {} if missing", self.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`info_hash` BLOB NOT NULL, `peer_id` BLOB NOT NULL, `ip` TEXT NOT NULL, `port` INTEGER NOT NULL, `status` TEXT NOT NULL, PRIMARY KEY (`info_hash`, `peer_id`, `ip`, `port`, `status`))",
            self.table_name
        );
        sqlx::query(&query).execute(&self.pool).await?;
        Ok(())
    }

    /// Every stored record in insertion order. Rows that no longer parse are
    /// skipped with a warning.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn load_records(&self) -> Result<Vec<(InfoHash, PeerRecord)>, Error>
    {
        let query = format!(
            "SELECT `info_hash`, `peer_id`, `ip`, `port`, `status` FROM `{}` ORDER BY rowid",
            self.table_name
        );
        let mut rows = sqlx::query(&query).fetch(&self.pool);
        let mut records = Vec::new();
        let mut skipped = 0u64;

        while let Some(row) = rows.try_next().await? {
            let info_hash: Vec<u8> = row.try_get("info_hash")?;
            let peer_id: Vec<u8> = row.try_get("peer_id")?;
            let ip: String = row.try_get("ip")?;
            let port: i64 = row.try_get("port")?;
            let status: String = row.try_get("status")?;

            let parsed = (
                InfoHash::try_from(info_hash.as_slice()).ok(),
                PeerId::try_from(peer_id.as_slice()).ok(),
                ip.parse::<IpAddr>().ok(),
                u16::try_from(port).ok(),
                AnnounceEvent::from_query(status.as_bytes()),
            );
            match parsed {
                (Some(info_hash), Some(peer_id), Some(ip), Some(port), status) if status != AnnounceEvent::None => {
                    records.push((info_hash, PeerRecord::new(peer_id, ip, port, status)));
                }
                _ => skipped += 1
            }
        }

        if skipped > 0 {
            warn!("{LOG_PREFIX} Skipped {skipped} malformed rows in {}", self.table_name);
        }
        Ok(records)
    }

    /// Inserts a batch in one transaction and returns how many rows were new.
    /// Tuples already stored are ignored.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn save_records(&self, records: &[(InfoHash, PeerRecord)]) -> Result<u64, Error>
    {
        let query = format!(
            "INSERT OR IGNORE INTO `{}` (`info_hash`, `peer_id`, `ip`, `port`, `status`) VALUES (?, ?, ?, ?, ?)",
            self.table_name
        );

        let mut transaction = self.pool.begin().await?;
        let mut inserted = 0u64;
        for (info_hash, record) in records {
            let result = sqlx::query(&query)
                .bind(info_hash.0.as_slice())
                .bind(record.peer_id.0.as_slice())
                .bind(record.ip.to_string())
                .bind(i64::from(record.port))
                .bind(record.status.as_str())
                .execute(&mut *transaction)
                .await?;
            inserted += result.rows_affected();
        }
        transaction.commit().await?;
        Ok(inserted)
    }
}
