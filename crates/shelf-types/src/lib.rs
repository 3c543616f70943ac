pub mod categories;
pub mod collection;
pub mod error;
pub mod product;

pub use categories::{Categories, normalize_categories, split_categories};
pub use collection::InventoryCollection;
pub use error::{Error, Result};
pub use product::{Product, ProductFields, parse_inventory, read_inventory_file};
