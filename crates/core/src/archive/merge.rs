//! Merge rules for symbol history.
//!
//! The merge is the idempotency anchor of the whole system: the planner
//! deliberately re-fetches year ranges it has already seen, and this module
//! guarantees that doing so changes nothing.

use std::collections::HashSet;

use berza_market_data::PriceRecord;

/// Merge newly fetched records into an existing history.
///
/// A record whose `date` already exists is discarded - existing wins, with
/// no field-level reconciliation. Survivors are appended and the full set is
/// sorted strictly descending by date. Canonical `YYYY-MM-DD` dates make
/// lexicographic order equal calendar order.
pub fn merge_history(
    existing: Vec<PriceRecord>,
    incoming: Vec<PriceRecord>,
) -> Vec<PriceRecord> {
    let mut seen: HashSet<String> = existing.iter().map(|r| r.date.clone()).collect();
    let mut merged = existing;
    for record in incoming {
        if seen.insert(record.date.clone()) {
            merged.push(record);
        }
    }
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}

/// The derived first-trade date: the minimum date present, or `None` for an
/// empty history.
pub fn first_trade_date(history: &[PriceRecord]) -> Option<String> {
    history
        .iter()
        .map(|r| r.date.as_str())
        .min()
        .map(str::to_string)
}
