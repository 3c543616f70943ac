pub mod text;
pub mod time;

pub use text::{truncate_with_ellipsis, wrap_tags};
pub use time::format_relative_time;
