//! Time utilities: parsing HH:MM, duration formatting, hour rounding.

use chrono::NaiveTime;

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Floor decomposition of a duration: `8h 50m 0s`.
pub fn secs2readable(total_seconds: i64) -> String {
    let secs = total_seconds.max(0);
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{}h {}m {}s", h, m, s)
}

/// Seconds → hours rounded to 2 decimals.
pub fn secs2hours(total_seconds: i64) -> f64 {
    (total_seconds as f64 / 3600.0 * 100.0).round() / 100.0
}
