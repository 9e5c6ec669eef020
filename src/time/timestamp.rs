//! Robot Framework timestamps and test durations.
//!
//! Up to Robot Framework 6 a test status carries `starttime`/`endtime` in the
//! compact `20180511 11:57:21.512` form. Robot Framework 7 switched to an ISO
//! `start` attribute and an `elapsed` attribute in seconds.

use crate::time::error::Error;
use chrono::NaiveDateTime;

const COMPACT_FORMAT: &str = "%Y%m%d %H:%M:%S%.f";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Value written by Robot Framework when a timestamp is unknown.
const NOT_AVAILABLE: &str = "N/A";

/// Parses a report timestamp. Empty and `N/A` values are treated as missing.
pub fn parse_timestamp(value: &str) -> Result<Option<NaiveDateTime>, Error> {
    let value = value.trim();
    if value.is_empty() || value == NOT_AVAILABLE {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(value, COMPACT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, ISO_FORMAT))
        .map(Some)
        .map_err(|source| Error::Timestamp {
            value: value.to_owned(),
            source,
        })
}

/// Whole seconds between two timestamps, never below 1 since TestRail cannot
/// represent sub-second elapsed times.
pub fn elapsed_seconds(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let millis = end.signed_duration_since(start).num_milliseconds();
    round_seconds(millis as f64 / 1000.0)
}

/// Parses a Robot Framework 7 `elapsed` attribute (seconds, fractional).
pub fn parse_elapsed(value: &str) -> Result<u64, Error> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .map(round_seconds)
        .ok_or_else(|| Error::Elapsed(value.to_owned()))
}

/// Rounds to the nearest second, ties to even.
fn round_seconds(seconds: f64) -> u64 {
    let floor = seconds.floor();
    let fraction = seconds - floor;
    let rounded = if fraction > 0.5 || (fraction == 0.5 && floor % 2.0 != 0.0) {
        floor + 1.0
    } else {
        floor
    };
    if rounded < 1.0 {
        1
    } else {
        rounded as u64
    }
}
