pub mod common;
pub mod inventory;

pub use common::StatusLevel;
pub use inventory::{
    CaptureScreenViewModel, ImageViewModel, InventoryScreenViewModel, ProductRowViewModel,
    RefreshIndicatorViewModel, StatusBarViewModel,
};
