use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarmkeeper::common::common::setup_logging;
use swarmkeeper::config::enums::configuration_error::ConfigurationError;
use swarmkeeper::config::structs::configuration::Configuration;
use swarmkeeper::http::http::http_service;
use swarmkeeper::stats::enums::stats_event::StatsEvent;
use swarmkeeper::structs::Cli;
use swarmkeeper::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(ConfigurationError::Created(_)) => exit(0),
        Err(error) => {
            eprintln!("[VALIDATE] {error}");
            exit(101)
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("Unable to set up logging: {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = match TorrentTracker::new(config.clone()).await {
                Ok(tracker) => Arc::new(tracker),
                Err(error) => {
                    error!("[BOOT] Unable to open the database {}: {error}", config.database.path);
                    exit(1);
                }
            };

            if config.database.persistent && let Err(error) = tracker.load_records_from_database().await {
                error!("[BOOT] Unable to load records from the database: {error}");
                exit(1);
            }

            if args.export {
                if let Err(error) = tracker.export(&args.export_file) {
                    error!("[EXPORT] Unable to write {}: {error}", args.export_file);
                    exit(1);
                }
                return Ok(());
            }

            if args.import && let Err(error) = tracker.import(&args.import_file) {
                error!("[IMPORT] Unable to read {}: {error}", args.import_file);
                exit(1);
            }

            let Ok(tokio_shutdown) = Shutdown::new() else {
                error!("[BOOT] Unable to install the shutdown signal handler");
                exit(1);
            };

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();

            for http_server_object in config.http_server.iter().filter(|http_server| http_server.enabled) {
                let Ok(address) = http_server_object.bind_address.parse::<SocketAddr>() else {
                    error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                    exit(1);
                };

                match http_service(address, tracker.clone(), http_server_object.clone()).await {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to start listener on {address}: {error}");
                        exit(1);
                    }
                }
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Listener stopped: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole,
                                chrono::Utc::now().timestamp() + console_interval as i64);
                            tracker_spawn_stats.log_console_stats();
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            if config.database.persistent {
                let updates_handler = tokio_shutdown.clone();
                let tracker_spawn_updates = tracker.clone();
                let update_interval = config.database.persistent_interval;
                info!("[BOOT] Starting thread for database updates with {update_interval} seconds delay...");

                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(update_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                // failures are logged and re-queued inside
                                let _ = tracker_spawn_updates.save_records_updates().await;
                            }
                            _ = updates_handler.handle() => {
                                info!("[BOOT] Shutting down thread for database updates...");
                                return;
                            }
                        }
                    }
                });
            }

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");

            for handle in http_handles {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;

            if config.database.persistent {
                info!("Saving final data to database...");
                if tracker.save_records_updates().await.is_err() {
                    error!("[BOOT] {} records could not be saved", tracker.records_updates.lock().len());
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
