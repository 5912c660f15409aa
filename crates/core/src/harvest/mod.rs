//! Batch harvesting.
//!
//! - [`config`] - The externally supplied run configuration, including the
//!   symbol universe
//! - [`planner`] - Which years a symbol still needs, given its archive and
//!   the run mode
//! - [`service`] - The orchestrator: one unit of work per symbol behind a
//!   counting admission gate, failures isolated per symbol, a summary of
//!   terminal outcomes at the end
//!
//! # Architecture
//!
//! ```text
//! HarvestService
//!       │ per symbol, at most `concurrency` in flight
//!       ├─► planner (target years, profile decision)
//!       ├─► MarketDataProvider (profile + sequential year fetches)
//!       ├─► SymbolArchive::merge_records (dedup, sort, derived fields)
//!       └─► ArchiveStore (atomic persist)
//! ```

pub mod config;
pub mod planner;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use config::{HarvestConfig, DEFAULT_CONCURRENCY, DEFAULT_INCEPTION_YEAR};
pub use planner::{needs_profile, target_years, HarvestMode};
pub use service::{HarvestService, HarvestStatus, HarvestSummary, SymbolOutcome};
