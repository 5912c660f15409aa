//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{IssuerProfile, SymbolCode, YearHistory};

/// Trait for market data sources.
///
/// Implement this trait to add support for a new exchange or endpoint
/// layout. The harvesting engine only talks to this interface, so tests can
/// substitute an in-memory implementation.
///
/// Both operations are independently failable; callers are expected to
/// downgrade failures to "no data for this request" rather than aborting a
/// run (see the harvesting engine for the isolation rules).
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch one full calendar year of daily trading records for a symbol.
    ///
    /// Returns the parsed records plus the issuer display name when the page
    /// carries one inline. An empty record set is a valid answer: thinly
    /// traded symbols can have whole years without a single trade, so
    /// callers must not read "empty" as "no more history exists".
    async fn year_history(
        &self,
        symbol: &SymbolCode,
        year: i32,
    ) -> Result<YearHistory, MarketDataError>;

    /// Fetch the issuer profile for a symbol.
    ///
    /// Performs whatever lookup chain the source requires and returns the
    /// structured fields it could extract. `SymbolNotFound` means the source
    /// has no profile to offer; everything else is a transient failure.
    async fn issuer_profile(
        &self,
        symbol: &SymbolCode,
    ) -> Result<IssuerProfile, MarketDataError>;
}
