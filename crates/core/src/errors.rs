//! Core error types for the harvesting engine.
//!
//! Storage-specific failures are wrapped in string form by [`StoreError`],
//! keeping this crate agnostic of the backing medium.

use thiserror::Error;

use berza_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the harvesting engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The one hard per-symbol failure class: losing an archive write is
    /// unacceptable, so it surfaces instead of being downgraded.
    #[error("Archive store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures from the archive persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document exists but could not be read.
    #[error("Failed to read archive document: {0}")]
    ReadFailed(String),

    /// The document (or its temporary sibling) could not be written or
    /// published.
    #[error("Failed to write archive document: {0}")]
    WriteFailed(String),

    /// The in-memory archive could not be serialized.
    #[error("Failed to serialize archive document: {0}")]
    SerializeFailed(String),
}
