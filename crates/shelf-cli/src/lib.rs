// NOTE: shelf architecture
//
// The inventory screen never owns its data. An InventoryStore (shelf-runtime)
// holds the product collection and the `fetching` flag; the screen subscribes
// to focus events from a Navigator and asks the store to refresh every time it
// becomes visible. Rows keep their own expand state, keyed by product id, and
// derive their date line and NEW badge from a DateClassifier (shelf-core) with
// an injected clock.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
