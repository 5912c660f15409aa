//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to the exchange.
///
/// The harvesting engine treats most of these as fail-soft: a failed request
/// becomes "no records for that request" and the run continues. The
/// [`is_transient`](Self::is_transient) helper tells callers which variants
/// are expected to heal on a later run without any change on our side.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The search page produced no link to a profile for this symbol.
    /// Retrying the same lookup will not help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The exchange answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// A connection, TLS, or timeout error below the HTTP layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The page was fetched but did not have the expected shape.
    #[error("Markup error: {0}")]
    Markup(String),
}

impl MarketDataError {
    /// Returns true if a later run can plausibly succeed without any change
    /// on our side (server hiccups, layout wobble). `SymbolNotFound` is the
    /// only terminal variant.
    pub fn is_transient(&self) -> bool {
        !matches!(self, MarketDataError::SymbolNotFound(_))
    }
}
