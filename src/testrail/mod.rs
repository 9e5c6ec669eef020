pub mod client;
pub mod entity;
mod payload;

pub use client::TestRailApi;

/// TestRail status of a test explicitly marked as blocked.
pub const BLOCKED_STATUS_ID: u64 = 2;

/// Normalizes a case identifier such as `C1234` into its numeric id.
///
/// Only the first whitespace separated chunk is considered and every non-digit
/// character of it is dropped, so `C1234 C9874` yields `1234` while
/// `test C1234` yields nothing.
pub fn extract_case_id(raw: &str) -> Option<u64> {
    let digits: String = raw
        .split_whitespace()
        .next()?
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|id| *id > 0)
}
