//! UTC timestamp rendering for bet history

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Render a UTC instant as `YYYY-MM-DD HH:MM:SS.mmm UTC`
pub fn format_datetime_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string()
}

/// Parse the timestamp shapes the bets table hands back
///
/// Accepts RFC 3339, Postgres `timestamptz` text, naive date-times (read as
/// UTC), bare dates and epoch milliseconds.
pub fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    let ts = ts.trim();
    if ts.is_empty() {
        return None;
    }

    if let Ok(millis) = ts.parse::<i64>() {
        return Utc.timestamp_millis_opt(millis).single();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a stored timestamp for display; unparseable input renders empty
pub fn format_timestamp_utc(ts: &str) -> String {
    parse_timestamp(ts).map(format_datetime_utc).unwrap_or_default()
}
