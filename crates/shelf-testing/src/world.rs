//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{SampleProduct, inventory_document};

/// Isolated data directory for one test.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use shelf_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let mut cmd = cargo_bin_cmd!("shelf");
/// world.configure_command(&mut cmd).arg("list");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".shelf");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self { temp_dir, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join("inventory.json")
    }

    /// Write `products` to the default inventory file.
    pub fn write_inventory(&self, products: &[SampleProduct]) -> Result<()> {
        self.write_inventory_json(&inventory_document(products))
    }

    pub fn write_inventory_json(&self, document: &Value) -> Result<()> {
        std::fs::write(
            self.inventory_path(),
            serde_json::to_string_pretty(document)?,
        )?;
        Ok(())
    }

    pub fn write_config(&self, toml: &str) -> Result<()> {
        std::fs::write(self.data_dir.join("config.toml"), toml)?;
        Ok(())
    }

    /// Point a CLI command at this world's data directory.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .env_remove("SHELF_PATH")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
    }

    /// Run a configured command and capture its output.
    pub fn run(&self, mut cmd: Command, args: &[&str]) -> Result<CliResult> {
        self.configure_command(&mut cmd).args(args);
        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
