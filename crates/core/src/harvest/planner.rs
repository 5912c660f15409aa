//! Incremental planning: which years a symbol still needs.

use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

use crate::archive::SymbolArchive;

/// Harvest mode - determines the target year range per symbol.
///
/// This is a per-run parameter, not persisted anywhere. Each run can choose
/// a different mode over the same archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestMode {
    /// Re-fetch the entire historical range from the inception year.
    Backfill,

    /// Continue from the year of the most recent persisted record. That
    /// partially known year is always re-fetched to catch late-arriving or
    /// corrected rows; the merge makes the overlap free. An empty archive
    /// falls back to the full backfill range.
    Incremental,

    /// Only the current calendar year, used by the smoke-test run.
    CurrentYearOnly,
}

/// Target year range for one symbol, inclusive on both ends.
///
/// `today` is passed in rather than read from the clock so planning is
/// deterministic under test.
pub fn target_years(
    archive: &SymbolArchive,
    mode: HarvestMode,
    inception_year: i32,
    today: NaiveDate,
) -> RangeInclusive<i32> {
    let current_year = today.year();
    match mode {
        HarvestMode::Backfill => inception_year..=current_year,
        HarvestMode::CurrentYearOnly => current_year..=current_year,
        HarvestMode::Incremental => match archive.last_trade_date() {
            Some(last) => last.year()..=current_year,
            None => inception_year..=current_year,
        },
    }
}

/// Whether this run should fetch the issuer profile. Decided independently
/// of the harvest mode: fetched once, iff currently absent.
pub fn needs_profile(archive: &SymbolArchive) -> bool {
    archive.issuer_data.is_none()
}
