pub mod inventory;

pub use inventory::{
    INVALID_DATE_DISPLAY, present_capture_screen, present_inventory_screen, present_product,
    present_rows,
};
