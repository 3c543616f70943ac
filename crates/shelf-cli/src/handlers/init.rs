use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use shelf_runtime::Config;

const EMPTY_INVENTORY: &str = "{\n  \"records\": []\n}\n";

pub fn handle(data_dir: &Path, force: bool) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let config_path = Config::path_in(data_dir);
    let config = if config_path.exists() && !force {
        println!("{} {}", "exists ".dimmed(), config_path.display());
        Config::load_from(&config_path)?
    } else {
        let config = Config::default();
        config.save_to(&config_path)?;
        println!("{} {}", "created".green(), config_path.display());
        config
    };

    let source_path = config.source_path(data_dir);
    if source_path.exists() {
        println!("{} {}", "exists ".dimmed(), source_path.display());
    } else {
        if let Some(parent) = source_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&source_path, EMPTY_INVENTORY)?;
        println!("{} {}", "created".green(), source_path.display());
    }

    tracing::info!(data_dir = %data_dir.display(), "initialized data directory");
    Ok(())
}
