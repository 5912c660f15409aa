use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day for one symbol.
///
/// `date` is the primary key within a symbol's history and is always the
/// canonical zero-padded `YYYY-MM-DD` form for records produced by this
/// crate. All quantities are nullable: the exchange leaves cells blank on
/// days without the corresponding figure, and an unparseable cell is stored
/// as absent rather than failing the row.
///
/// Field names match the persisted document format; turnover figures are
/// denominated in MKD as on the source pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub last_transaction_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_price: Option<Decimal>,
    pub average_price: Option<Decimal>,
    pub percent_change: Option<Decimal>,
    pub quantity: Option<Decimal>,
    pub turnover_best_mkd: Option<Decimal>,
    pub total_turnover_mkd: Option<Decimal>,
}

impl PriceRecord {
    /// Create a record with only a date; all quantities absent.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            last_transaction_price: None,
            max_price: None,
            min_price: None,
            average_price: None,
            percent_change: None,
            quantity: None,
            turnover_best_mkd: None,
            total_turnover_mkd: None,
        }
    }

    /// The record's date as a calendar date, if canonical.
    pub fn trade_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
