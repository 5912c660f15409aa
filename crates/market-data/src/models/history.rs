use serde::{Deserialize, Serialize};

use super::record::PriceRecord;

/// Result of one (symbol, year) history request.
///
/// The history page carries the issuer's display name in its title block, so
/// a year fetch doubles as an opportunistic name source for archives that
/// never got a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearHistory {
    pub records: Vec<PriceRecord>,
    pub issuer_name: Option<String>,
}
