//! TUI View Components
//!
//! Ratatui widgets for the inventory browser. Each view is a thin wrapper
//! around a ViewModel.
//!
//! ## Design Principles:
//! - Views take a reference to ViewModel (no ownership)
//! - NO logic, calculations, or formatting (except UI-specific layout)
//! - Color mapping from StatusLevel to Ratatui colors happens here

pub mod capture;
pub mod components;
pub mod header;
pub mod product_item;
pub mod status_bar;

pub use capture::CaptureView;
pub use header::HeaderView;
pub use product_item::ProductItemView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
