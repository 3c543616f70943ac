use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use shelf_core::{DateClassifier, DisplayZone, SystemClock};
use shelf_runtime::{Config, InventoryStore, JsonFileSource, expand_tilde};

/// Everything a command needs to reach the inventory.
pub struct InventoryContext {
    pub source_path: PathBuf,
    pub classifier: DateClassifier,
}

impl InventoryContext {
    /// Load config from `data_dir` and apply command-line overrides.
    pub fn load(data_dir: &Path, source_override: Option<&str>, force_utc: bool) -> Result<Self> {
        let config = Config::load_from(&Config::path_in(data_dir))?;

        let source_path = match source_override {
            Some(path) => expand_tilde(path),
            None => config.source_path(data_dir),
        };

        let zone = if force_utc {
            DisplayZone::Utc
        } else {
            config.inventory.display_timezone
        };

        let classifier = DateClassifier::new(Arc::new(SystemClock))
            .with_zone(zone)
            .with_window_days(config.inventory.new_window_days);

        tracing::debug!(
            data_dir = %data_dir.display(),
            source = %source_path.display(),
            zone = %zone,
            "loaded inventory context"
        );

        Ok(Self {
            source_path,
            classifier,
        })
    }

    pub fn store(&self) -> InventoryStore {
        InventoryStore::new(JsonFileSource::new(&self.source_path))
    }
}
