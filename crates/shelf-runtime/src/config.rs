use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use shelf_core::{DEFAULT_NEW_WINDOW_DAYS, DisplayZone};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SHELF_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.shelf (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SHELF_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("shelf"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".shelf"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Inventory JSON file; relative paths resolve against the data directory.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    #[serde(default = "default_window_days")]
    pub new_window_days: u32,

    #[serde(default)]
    pub display_timezone: DisplayZone,
}

fn default_source() -> PathBuf {
    PathBuf::from(DEFAULT_INVENTORY_FILE)
}

fn default_window_days() -> u32 {
    DEFAULT_NEW_WINDOW_DAYS
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            new_window_days: default_window_days(),
            display_timezone: DisplayZone::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Absolute location of the inventory source.
    pub fn source_path(&self, data_dir: &Path) -> PathBuf {
        let source = expand_tilde(&self.inventory.source.to_string_lossy());
        if source.is_absolute() {
            source
        } else {
            data_dir.join(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.inventory.source, PathBuf::from("inventory.json"));
        assert_eq!(config.inventory.new_window_days, 7);
        assert_eq!(config.inventory.display_timezone, DisplayZone::Local);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.inventory.new_window_days = 14;
        config.inventory.display_timezone = DisplayZone::Utc;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[inventory]\ndisplay_timezone = \"utc\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.inventory.display_timezone, DisplayZone::Utc);
        assert_eq!(config.inventory.new_window_days, 7);
        assert_eq!(config.inventory.source, PathBuf::from("inventory.json"));

        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());
        std::fs::write(&config_path, "[inventory\n")?;

        assert!(matches!(
            Config::load_from(&config_path),
            Err(Error::Config(_))
        ));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_source_path_resolution() {
        let data_dir = Path::new("/data/shelf");
        let mut config = Config::default();
        assert_eq!(
            config.source_path(data_dir),
            PathBuf::from("/data/shelf/inventory.json")
        );

        config.inventory.source = PathBuf::from("/srv/catalog.json");
        assert_eq!(
            config.source_path(data_dir),
            PathBuf::from("/srv/catalog.json")
        );
    }
}
