//! # Presentation Layer
//!
//! User interface logic for the CLI, using an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern to keep inventory data and display
//! logic apart.
//!
//! ## Data Flow
//!
//! ```text
//! [ Store snapshot ] --> [ Presenter ] --> [ ViewModel ] --> [ View / Renderer ] --> [ Terminal ]
//! ```
//!
//! ## Where does code go?
//!
//! ### `view_models/`
//! Plain data describing what a screen shows. Must implement `Serialize`.
//! No calculation logic and no domain types.
//!
//! ### `presenters/`
//! Pure functions from products and store state to view models: date
//! formatting, NEW classification, category normalization, status messages.
//!
//! ### `views/`
//! Ratatui widgets and components. Layout and styling only; components also
//! own UI state (selection, per-row expand state) and input handling.
//!
//! ### `renderers/`
//! Output drivers: the interactive TUI loop and the one-shot console printer.
//!
//! ### `formatters/`
//! Small string helpers shared by views and renderers (truncation, tag
//! wrapping, relative times).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, InventoryTui};
pub use view_models::{InventoryScreenViewModel, ProductRowViewModel, StatusLevel};
