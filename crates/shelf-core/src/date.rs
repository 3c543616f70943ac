//! Posting-date display and "new" classification.
//!
//! Dates arrive as strings from inventory records. They are parsed strictly:
//! anything that is not a recognizable date is `Error::InvalidDate`, and
//! callers decide how to degrade.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use shelf_types::{Error, Result};

use crate::clock::Clock;

/// Products posted within this many days of now are shown as new.
pub const DEFAULT_NEW_WINDOW_DAYS: u32 = 7;

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Time zone used to turn an instant into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    fn resolve_naive(self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DisplayZone::Utc => Some(naive.and_utc()),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Utc => write!(f, "utc"),
        }
    }
}

/// Parse a posted-at string into an instant.
///
/// Accepted shapes:
/// - RFC 3339 (`2024-03-05T10:00:00Z`, `2024-03-05T10:00:00+02:00`)
/// - date only (`2024-03-05`), taken as UTC midnight
/// - naive date-time (`2024-03-05T10:00:00`), taken in `zone`
pub fn parse_posted_at(input: &str, zone: DisplayZone) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return zone
                .resolve_naive(naive)
                .ok_or_else(|| Error::InvalidDate(input.to_string()));
        }
    }

    Err(Error::InvalidDate(input.to_string()))
}

/// Format a posted-at string as `DD.MM.YYYY` in the given zone.
pub fn format_display_date(input: &str, zone: DisplayZone) -> Result<String> {
    let instant = parse_posted_at(input, zone)?;
    let formatted = match zone {
        DisplayZone::Local => instant.with_timezone(&Local).format("%d.%m.%Y").to_string(),
        DisplayZone::Utc => instant.format("%d.%m.%Y").to_string(),
    };
    Ok(formatted)
}

/// Whether `instant` lies within `window_days` of `now`.
///
/// The distance is absolute and rounded up to whole days, so an instant in
/// the future counts as recent too.
pub fn is_recent_at(instant: DateTime<Utc>, now: DateTime<Utc>, window_days: u32) -> bool {
    let diff_ms = now
        .signed_duration_since(instant)
        .num_milliseconds()
        .unsigned_abs();
    let days = diff_ms.div_ceil(MILLIS_PER_DAY);
    days <= u64::from(window_days)
}

pub fn is_recent(
    input: &str,
    window_days: u32,
    zone: DisplayZone,
    clock: &dyn Clock,
) -> Result<bool> {
    let instant = parse_posted_at(input, zone)?;
    Ok(is_recent_at(instant, clock.now(), window_days))
}

/// Date display and recency bundled with a clock, zone and window.
#[derive(Clone)]
pub struct DateClassifier {
    clock: Arc<dyn Clock>,
    zone: DisplayZone,
    window_days: u32,
}

impl DateClassifier {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            zone: DisplayZone::default(),
            window_days: DEFAULT_NEW_WINDOW_DAYS,
        }
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn format_display_date(&self, input: &str) -> Result<String> {
        format_display_date(input, self.zone)
    }

    pub fn is_recent(&self, input: &str) -> Result<bool> {
        is_recent(input, self.window_days, self.zone, self.clock.as_ref())
    }
}
