//! Testing infrastructure for shelf integration tests.
//!
//! - `TestWorld`: isolated data directory plus command configuration
//! - `fixtures`: inventory records dated relative to the current time

pub mod fixtures;
pub mod world;

pub use fixtures::{SampleProduct, inventory_document, sample_products};
pub use world::{CliResult, TestWorld};
