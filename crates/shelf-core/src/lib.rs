pub mod clock;
pub mod date;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{
    DEFAULT_NEW_WINDOW_DAYS, DateClassifier, DisplayZone, format_display_date, is_recent,
    is_recent_at, parse_posted_at,
};
