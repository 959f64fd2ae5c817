//! Date labels shown on the dashboard.

use chrono::{DateTime, TimeZone};

/// Header clock label: full weekday plus zero-padded 24-hour time,
/// e.g. `"Monday 09:05"`.
pub fn clock_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A %H:%M").to_string()
}

/// Abbreviated weekday name for a forecast column, e.g. `"Tue"`.
pub fn day_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%a").to_string()
}
