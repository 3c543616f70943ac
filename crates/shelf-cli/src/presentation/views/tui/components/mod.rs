//! TUI Components
//!
//! Components encapsulate UI State + Input Logic + Render Logic so the
//! renderer only routes keys and lays out the screen.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
//!         // Handle input, return action if parent needs to respond
//!     }
//!
//!     pub fn render(&mut self, f: &mut Frame, area: Rect, data: &FooViewModel) {
//!         // Index safety checks here
//!         // Render using Views
//!     }
//! }
//! ```

pub mod inventory_list;

pub use inventory_list::{InventoryAction, InventoryListComponent, ItemViewState, RowStates};
