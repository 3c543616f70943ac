//! Tracing setup.
//!
//! The browser owns the terminal, so it logs to a file in the data directory.
//! One-shot commands log to stderr. `RUST_LOG` overrides `--log-level`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

pub const LOG_FILE_NAME: &str = "shelf.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    Ok(())
}
