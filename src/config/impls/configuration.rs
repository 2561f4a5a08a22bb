use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

const TABLE_NAME_REGEX: &str = r"^[a-z_][a-z0-9_]{0,30}$";

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 5,
                request_interval_minimum: 1,
                numwant_default: 30,
                numwant_max: 55,
                warning_message: String::new(),
            },
            database: DatabaseConfig {
                persistent: false,
                path: String::from("sqlite://data.db"),
                table_name: String::from("peers"),
                persistent_interval: 60,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    real_ip: String::from("X-Real-IP"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
                    ssl: false,
                    ssl_key: String::new(),
                    ssl_cert: String::new(),
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(&self, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(self).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// When the file cannot be read or parsed and `create` is set, the defaults
    /// are written to `path` and [`ConfigurationError::Created`] is returned so
    /// the caller can stop and let the file be edited.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Self::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");
                Self::init().save_from_config(path)?;
                eprintln!("Please edit {path} and start again, exiting now...");
                return Err(ConfigurationError::Created(path.to_string()));
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.numwant_default > tracker_config.numwant_max {
            return Err(ConfigurationError::ValidationError(format!(
                "numwant_default ({}) is larger than numwant_max ({})",
                tracker_config.numwant_default, tracker_config.numwant_max
            )));
        }

        let intervals = [
            ("log_console_interval", self.log_console_interval),
            ("request_interval", tracker_config.request_interval),
            ("request_interval_minimum", tracker_config.request_interval_minimum),
            ("persistent_interval", self.database.persistent_interval),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must not be 0")));
            }
        }

        Self::validate_value("[DB] Table", &self.database.table_name, TABLE_NAME_REGEX)?;

        for http_server in self.http_server.iter().filter(|server| server.enabled) {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!(
                    "invalid bind_address '{}'", http_server.bind_address
                )));
            }
            if http_server.ssl && (http_server.ssl_key.is_empty() || http_server.ssl_cert.is_empty()) {
                return Err(ConfigurationError::ValidationError(format!(
                    "ssl enabled on {} without ssl_key and ssl_cert", http_server.bind_address
                )));
            }
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|error| ConfigurationError::ValidationError(error.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
