use std::path::{Path, PathBuf};

use shelf_types::{Product, read_inventory_file};

use crate::{Error, Result};

/// Where the store fetches products from.
///
/// `load` runs on a worker thread, so implementations must be shareable.
pub trait InventorySource: Send + Sync {
    fn load(&self) -> Result<Vec<Product>>;

    /// Short label for status lines and logs.
    fn describe(&self) -> String;
}

/// Inventory backed by a JSON file in the backend's record format.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventorySource for JsonFileSource {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Err(Error::Source(format!(
                "inventory file not found: {}",
                self.path.display()
            )));
        }
        Ok(read_inventory_file(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fixed in-memory inventory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    products: Vec<Product>,
}

impl MemorySource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl InventorySource for MemorySource {
    fn load(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} products)", self.products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_file_source_loads_records() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("inventory.json");
        std::fs::write(
            &path,
            r#"{"records": [{"id": "r1", "fields": {"Product Name": "Level", "Posted": "2024-02-01"}}]}"#,
        )?;

        let products = JsonFileSource::new(&path).load()?;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "r1");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_source_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let source = JsonFileSource::new(temp_dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(Error::Source(_))));
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_types_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("inventory.json");
        std::fs::write(&path, "{ not json")?;

        assert!(matches!(
            JsonFileSource::new(&path).load(),
            Err(Error::Types(shelf_types::Error::Json(_)))
        ));
        Ok(())
    }
}
