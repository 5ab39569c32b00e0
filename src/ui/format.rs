use chrono::{DateTime, Local, TimeZone};

use crate::domain::entities::flight::FlightRecord;

/// `"JFK -> LAX"` style display string.
pub fn route_cell(record: &FlightRecord) -> String {
    format!(
        "{} -> {}",
        record.departure_airport, record.arrival_airport
    )
}

/// Delay in minutes, or a dash when the flight is on time or the backend
/// sent nothing.
pub fn delay_cell(delay: Option<i64>) -> String {
    match delay {
        Some(minutes) if minutes > 0 => format!("{minutes}m"),
        _ => "-".to_string(),
    }
}

/// Estimated departure at minute precision in the local timezone.
pub fn estimated_cell(estimated: &str) -> String {
    format_estimated_in(estimated, &Local)
}

// Timestamps that fail to parse are shown verbatim rather than dropped.
pub(crate) fn format_estimated_in<Tz: TimeZone>(estimated: &str, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(estimated) {
        Ok(parsed) => parsed.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => estimated.to_string(),
    }
}
