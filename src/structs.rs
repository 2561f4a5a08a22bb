use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Write every stored record to a JSON file and exit.
    #[arg(long)]
    pub export: bool,
    #[arg(long, default_value = "records.json")]
    pub export_file: String,

    /// Load records from a JSON file before serving.
    #[arg(long)]
    pub import: bool,
    #[arg(long, default_value = "records.json")]
    pub import_file: String,
}
