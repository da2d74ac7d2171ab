use chrono::{DateTime, TimeZone};

/// Long-form calendar date for dashboard headers, e.g. "October 19, 2026".
pub fn format_long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}
