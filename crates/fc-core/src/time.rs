//! Lightweight UTC calendar-date utilities (no chrono dependency).
//!
//! Journal dates are plain `YYYY-MM-DD` strings. Uses Howard Hinnant's
//! civil_from_days algorithm for Unix-to-date conversion.

use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use regex::Regex;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Current UTC time as Unix seconds.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_iso_date() -> String {
    unix_to_iso_date(now_unix_secs())
}

/// Convert Unix seconds to a `YYYY-MM-DD` UTC date.
pub fn unix_to_iso_date(secs: u64) -> String {
    let (y, m, d) = civil_from_days((secs / 86400) as i64);
    format!("{y:04}-{m:02}-{d:02}")
}

/// Split a `YYYY-MM-DD` string into (year, month, day).
/// Returns `None` for anything that is not a plausible calendar date.
pub fn parse_iso_date(date: &str) -> Option<(i64, u64, u64)> {
    let caps = ISO_DATE.captures(date.trim())?;
    let y: i64 = caps[1].parse().ok()?;
    let m: u64 = caps[2].parse().ok()?;
    let d: u64 = caps[3].parse().ok()?;
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    Some((y, m, d))
}

/// Render a journal date the way the journal shows it: `May 4, 2025`.
/// Unparseable input is returned unchanged.
pub fn display_date(date: &str) -> String {
    match parse_iso_date(date) {
        Some((y, m, d)) => format!("{} {d}, {y}", MONTHS[(m - 1) as usize]),
        None => date.to_string(),
    }
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
