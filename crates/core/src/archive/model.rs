use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use berza_market_data::{IssuerProfile, PriceRecord, SymbolCode};

use super::merge;

/// The persisted document for one symbol: full known trading history plus
/// issuer metadata. Field names are the on-disk document format.
///
/// Invariants maintained by [`merge_records`](Self::merge_records):
/// - `history` dates are unique and strictly descending
/// - `first_trade_date` equals the minimum date, absent for empty history
///
/// `issuer_data`, once present, is never cleared or re-fetched by a later
/// run; `company_name`, once non-empty, is never replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolArchive {
    pub company_code: String,

    #[serde(default)]
    pub company_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_data: Option<IssuerProfile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_trade_date: Option<String>,

    #[serde(default)]
    pub history: Vec<PriceRecord>,
}

impl SymbolArchive {
    /// An empty archive for a symbol harvested for the first time.
    pub fn new(code: &SymbolCode) -> Self {
        Self {
            company_code: code.as_str().to_string(),
            company_name: String::new(),
            issuer_data: None,
            first_trade_date: None,
            history: Vec::new(),
        }
    }

    /// The most recent trade date present, ignoring any record whose date is
    /// not a canonical calendar date.
    pub fn last_trade_date(&self) -> Option<NaiveDate> {
        self.history.iter().filter_map(|r| r.trade_date()).max()
    }

    pub fn has_profile(&self) -> bool {
        self.issuer_data.is_some()
    }

    /// First non-empty name wins: a candidate is applied only while the
    /// archive has no name yet, so later sources can never regress an
    /// earlier one.
    pub fn apply_name(&mut self, candidate: Option<&str>) {
        if !self.company_name.is_empty() {
            return;
        }
        if let Some(name) = candidate {
            if !name.is_empty() {
                self.company_name = name.to_string();
            }
        }
    }

    /// Merge newly fetched records into the history and recompute the
    /// derived first-trade date. Returns the number of records added.
    pub fn merge_records(&mut self, incoming: Vec<PriceRecord>) -> usize {
        let before = self.history.len();
        let existing = std::mem::take(&mut self.history);
        self.history = merge::merge_history(existing, incoming);
        self.first_trade_date = merge::first_trade_date(&self.history);
        self.history.len() - before
    }
}
