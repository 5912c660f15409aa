//! Locale normalization for raw cell text.
//!
//! The exchange renders numbers in the local convention (`.` thousands
//! separator, `,` decimal comma) and dates as `D.M.YYYY` with no guaranteed
//! zero padding. Everything downstream works with canonical forms, so all
//! raw text passes through here exactly once, at the parsing boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a locale-formatted number cell.
///
/// Strips thousands separators, converts the decimal comma, and parses.
/// Empty or unparseable input yields `None`; this function never fails the
/// row it came from.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = trimmed.replace('.', "").replace(',', ".");
    Decimal::from_str(&cleaned).ok()
}

/// Normalize a `D.M.YYYY` date cell to zero-padded `YYYY-MM-DD`.
///
/// Input that does not split into exactly three dot-separated components is
/// returned unchanged; callers must treat a non-canonical result as a
/// data-quality signal (see [`is_canonical_date`]), not a crash.
pub fn parse_trade_date(text: &str) -> String {
    let parts: Vec<&str> = text.split('.').collect();
    match parts.as_slice() {
        [day, month, year] => format!("{}-{:0>2}-{:0>2}", year, month, day),
        _ => text.to_string(),
    }
}

/// True when `text` is a real calendar date in canonical `YYYY-MM-DD` form.
///
/// The archive's descending-by-date ordering relies on string comparison of
/// canonical dates, so anything failing this check must never be stored.
pub fn is_canonical_date(text: &str) -> bool {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}
