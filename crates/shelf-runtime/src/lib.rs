pub mod config;
pub mod error;
pub mod navigation;
pub mod source;
pub mod store;

pub use config::{Config, InventoryConfig, expand_tilde, resolve_data_dir};
pub use error::{Error, Result};
pub use navigation::{FocusSubscription, Navigator, Route};
pub use source::{InventorySource, JsonFileSource, MemorySource};
pub use store::{InventoryStore, StoreEvent, StoreSnapshot};
