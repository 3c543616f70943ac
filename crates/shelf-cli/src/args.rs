use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Browse a product inventory in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory holding config.toml and the inventory (default: $SHELF_PATH or the XDG data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Inventory JSON file (overrides config)")]
    pub source: Option<String>,

    #[arg(long, global = true, help = "Show posting dates in UTC instead of local time")]
    pub utc: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive inventory browser (default)
    Browse,

    /// Fetch the inventory once and print it
    List {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, help = "Include categories and image for every product")]
        expanded: bool,
    },

    /// Write a default config and an empty inventory file
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}
