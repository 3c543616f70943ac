use chrono::{DateTime, Utc};
use shelf_core::DateClassifier;
use shelf_runtime::StoreSnapshot;
use shelf_types::{InventoryCollection, Product};

use crate::presentation::formatters::format_relative_time;
use crate::presentation::view_models::{
    CaptureScreenViewModel, ImageViewModel, InventoryScreenViewModel, ProductRowViewModel,
    RefreshIndicatorViewModel, StatusBarViewModel, StatusLevel,
};

/// Shown in place of a posting date that cannot be parsed.
pub const INVALID_DATE_DISPLAY: &str = "??.??.????";

const INVENTORY_TITLE: &str = "Inventory";
const SCAN_ACTION_LABEL: &str = "Scan Product";

pub fn present_product(
    product: &Product,
    expanded: bool,
    classifier: &DateClassifier,
) -> ProductRowViewModel {
    let fields = &product.fields;

    let (posted, is_new) = match (
        classifier.format_display_date(&fields.posted_at),
        classifier.is_recent(&fields.posted_at),
    ) {
        (Ok(posted), Ok(is_new)) => (posted, is_new),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(product = %product.id, error = %err, "unreadable posted date");
            (INVALID_DATE_DISPLAY.to_string(), false)
        }
    };

    let image = match fields.image_uri() {
        Some(uri) => ImageViewModel::Remote {
            uri: uri.to_string(),
        },
        None => ImageViewModel::Placeholder,
    };

    ProductRowViewModel {
        id: product.id.clone(),
        name: fields.name.clone(),
        image,
        posted,
        is_new,
        categories: fields.categories.normalized(),
        expanded,
    }
}

pub fn present_rows(
    inventory: &InventoryCollection,
    classifier: &DateClassifier,
    is_expanded: impl Fn(&str) -> bool,
) -> Vec<ProductRowViewModel> {
    inventory
        .iter()
        .map(|product| present_product(product, is_expanded(&product.id), classifier))
        .collect()
}

pub fn present_inventory_screen(
    snapshot: &StoreSnapshot,
    classifier: &DateClassifier,
    is_expanded: impl Fn(&str) -> bool,
) -> InventoryScreenViewModel {
    InventoryScreenViewModel {
        title: INVENTORY_TITLE.to_string(),
        rows: present_rows(&snapshot.inventory, classifier, is_expanded),
        refresh: RefreshIndicatorViewModel {
            visible: snapshot.fetching,
        },
        status_bar: present_status_bar(snapshot, classifier.now()),
        scan_action_label: SCAN_ACTION_LABEL.to_string(),
    }
}

fn present_status_bar(snapshot: &StoreSnapshot, now: DateTime<Utc>) -> StatusBarViewModel {
    let (message, level) = if snapshot.fetching {
        ("Refreshing inventory...".to_string(), StatusLevel::Info)
    } else if let Some(err) = &snapshot.last_error {
        (format!("Refresh failed: {}", err), StatusLevel::Error)
    } else if let Some(updated) = snapshot.last_updated {
        if snapshot.inventory.is_empty() {
            ("No products in inventory".to_string(), StatusLevel::Warning)
        } else {
            (
                format!("Updated {}", format_relative_time(updated, now)),
                StatusLevel::Success,
            )
        }
    } else {
        ("Waiting for inventory...".to_string(), StatusLevel::Info)
    };

    StatusBarViewModel {
        product_count: snapshot.inventory.len(),
        message,
        level,
    }
}

pub fn present_capture_screen() -> CaptureScreenViewModel {
    CaptureScreenViewModel {
        title: SCAN_ACTION_LABEL.to_string(),
        message: "Barcode capture is not available in the terminal.".to_string(),
        hint: "Press Esc to return to the inventory.".to_string(),
    }
}
