//! Harvesting engine for exchange trading history.
//!
//! This crate owns the durable per-symbol archives and the batch process
//! that keeps them current:
//!
//! - [`archive`] - The persisted `SymbolArchive` document, the merge rules
//!   that keep its history deduplicated and date-sorted, and the file-backed
//!   store with atomic replace semantics
//! - [`harvest`] - Incremental-vs-full planning and the bounded-concurrency
//!   orchestrator that drives one unit of work per symbol
//! - [`errors`] - Crate-wide error and result types
//!
//! Network access is abstracted behind `berza_market_data::MarketDataProvider`;
//! this crate never touches HTTP or markup itself.

pub mod archive;
pub mod errors;
pub mod harvest;

pub use archive::{ArchiveStore, FileArchiveStore, SymbolArchive};
pub use errors::{Error, Result, StoreError};
pub use harvest::{
    HarvestConfig, HarvestMode, HarvestService, HarvestStatus, HarvestSummary, SymbolOutcome,
};
