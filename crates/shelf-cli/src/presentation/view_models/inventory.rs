use serde::Serialize;

use super::common::StatusLevel;

/// One product row as the list shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRowViewModel {
    pub id: String,
    pub name: String,
    pub image: ImageViewModel,
    /// `DD.MM.YYYY`, or a sentinel when the record's date is unreadable.
    pub posted: String,
    pub is_new: bool,
    /// Normalized category names; shown only while expanded.
    pub categories: Vec<String>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageViewModel {
    Remote { uri: String },
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshIndicatorViewModel {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub product_count: usize,
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryScreenViewModel {
    pub title: String,
    pub rows: Vec<ProductRowViewModel>,
    pub refresh: RefreshIndicatorViewModel,
    pub status_bar: StatusBarViewModel,
    pub scan_action_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureScreenViewModel {
    pub title: String,
    pub message: String,
    pub hint: String,
}
