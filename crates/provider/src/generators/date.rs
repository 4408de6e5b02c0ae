//! Date and time value generators.

use chrono::DateTime;
use rand::Rng;

// Sampling window for random timestamps: 2000-01-01 to 2030-01-01 UTC.
const WINDOW_START: i64 = 946_684_800;
const WINDOW_END: i64 = 1_893_456_000;

/// Random RFC 3339 timestamp within the sampling window.
pub fn iso8601<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ts = rng.random_range(WINDOW_START..WINDOW_END);
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

/// Random calendar date within the sampling window, `YYYY-MM-DD`.
pub fn date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let ts = rng.random_range(WINDOW_START..WINDOW_END);
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Random unix timestamp (seconds) within the sampling window.
pub fn unix_timestamp<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.random_range(WINDOW_START..WINDOW_END)
}
