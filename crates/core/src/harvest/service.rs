//! Harvest orchestration.
//!
//! One independent unit of work per symbol, all spawned up front, admission
//! gated by a counting semaphore so at most `concurrency` units are active
//! at any instant regardless of universe size. Years within a symbol are
//! fetched sequentially; only cross-symbol parallelism exists.
//!
//! Failure isolation rules:
//! - a failed profile or year fetch is logged and contributes nothing, the
//!   unit continues
//! - a failed archive write fails that unit, nothing else
//! - a panicked unit is converted into a failed outcome at the join point
//!
//! The batch never returns before every unit reaches a terminal state.

use chrono::{NaiveDate, Utc};
use log::{debug, error, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use berza_market_data::{MarketDataProvider, SymbolCode};

use super::config::HarvestConfig;
use super::planner::{self, HarvestMode};
use crate::archive::{ArchiveStore, SymbolArchive};

// =============================================================================
// Outcome Types
// =============================================================================

/// Terminal state of one symbol's unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarvestStatus {
    /// The archive was merged and durably replaced.
    Persisted,
    /// The unit terminated without publishing an update.
    Failed,
}

/// Terminal report for one symbol.
#[derive(Debug, Clone)]
pub struct SymbolOutcome {
    pub symbol: SymbolCode,
    /// Records in the archive after the run.
    pub records_total: usize,
    /// Records this run added.
    pub records_added: usize,
    /// Best-known display name after the run; may be empty.
    pub company_name: String,
    pub status: HarvestStatus,
    pub error: Option<String>,
}

impl SymbolOutcome {
    fn failed(symbol: SymbolCode, error: impl Into<String>) -> Self {
        Self {
            symbol,
            records_total: 0,
            records_added: 0,
            company_name: String::new(),
            status: HarvestStatus::Failed,
            error: Some(error.into()),
        }
    }
}

/// Aggregate result of a harvest run.
#[derive(Debug, Default)]
pub struct HarvestSummary {
    /// Symbols that reached `Persisted`.
    pub harvested: usize,
    /// Symbols that reached `Failed`.
    pub failed: usize,
    /// Records added across all symbols.
    pub records_added: usize,
    /// Every symbol's terminal outcome, in completion order.
    pub outcomes: Vec<SymbolOutcome>,
}

impl HarvestSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// One-line run report.
    pub fn summary(&self) -> String {
        if self.is_success() {
            format!(
                "Harvested {} symbols, {} new records",
                self.harvested, self.records_added
            )
        } else {
            format!(
                "Harvested {} symbols ({} failed), {} new records",
                self.harvested, self.failed, self.records_added
            )
        }
    }

    fn add_outcome(&mut self, outcome: SymbolOutcome) {
        match outcome.status {
            HarvestStatus::Persisted => {
                self.harvested += 1;
                self.records_added += outcome.records_added;
            }
            HarvestStatus::Failed => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }
}

// =============================================================================
// Harvest Service
// =============================================================================

/// Drives a whole batch over the configured symbol universe.
///
/// Generic over the archive store so tests can substitute an in-memory or
/// failure-injecting implementation; the provider is already a trait object
/// behind `Arc`.
pub struct HarvestService<S: ArchiveStore> {
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<S>,
    config: HarvestConfig,
}

impl<S: ArchiveStore + 'static> HarvestService<S> {
    pub fn new(provider: Arc<dyn MarketDataProvider>, store: Arc<S>, config: HarvestConfig) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    /// Run the batch to completion and report every symbol's outcome.
    pub async fn run(&self, mode: HarvestMode) -> HarvestSummary {
        self.run_as_of(mode, Utc::now().date_naive()).await
    }

    /// Like [`run`](Self::run) with an explicit "today", for deterministic
    /// planning under test.
    pub async fn run_as_of(&self, mode: HarvestMode, today: NaiveDate) -> HarvestSummary {
        debug!(
            "starting harvest of {} symbols, concurrency {}",
            self.config.symbols.len(),
            self.config.concurrency
        );

        let gate = Arc::new(Semaphore::new(self.config.concurrency));
        let mut units: JoinSet<SymbolOutcome> = JoinSet::new();
        let mut unit_symbols: HashMap<tokio::task::Id, SymbolCode> = HashMap::new();

        for symbol in self.config.symbols.clone() {
            let provider = Arc::clone(&self.provider);
            let store = Arc::clone(&self.store);
            let gate = Arc::clone(&gate);
            let inception_year = self.config.inception_year;
            let unit_symbol = symbol.clone();

            let handle = units.spawn(async move {
                // The permit spans the unit's whole lifetime; everything a
                // unit does besides merge/persist is network-bound.
                let _permit = match gate.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => return SymbolOutcome::failed(unit_symbol, "admission gate closed"),
                };
                harvest_symbol(provider, store, unit_symbol, mode, inception_year, today).await
            });
            unit_symbols.insert(handle.id(), symbol);
        }

        let mut result = HarvestSummary::default();
        while let Some(joined) = units.join_next().await {
            match joined {
                Ok(outcome) => result.add_outcome(outcome),
                Err(join_error) => {
                    // A panicked unit must not take the batch down; record
                    // it against its symbol and keep draining.
                    let symbol = unit_symbols
                        .get(&join_error.id())
                        .cloned()
                        .unwrap_or_default();
                    error!("unit of work for {} aborted: {}", symbol, join_error);
                    result.add_outcome(SymbolOutcome::failed(symbol, join_error.to_string()));
                }
            }
        }

        debug!("{}", result.summary());
        result
    }
}

/// One symbol's unit of work, start to terminal state.
async fn harvest_symbol<S: ArchiveStore>(
    provider: Arc<dyn MarketDataProvider>,
    store: Arc<S>,
    symbol: SymbolCode,
    mode: HarvestMode,
    inception_year: i32,
    today: NaiveDate,
) -> SymbolOutcome {
    let mut archive = match store.load(&symbol).await {
        Ok(Some(existing)) => existing,
        Ok(None) => SymbolArchive::new(&symbol),
        Err(e) => {
            error!("{}: cannot load archive: {}", symbol, e);
            return SymbolOutcome::failed(symbol, e.to_string());
        }
    };

    // Profile is fetched once, iff absent - independent of mode.
    if planner::needs_profile(&archive) {
        match provider.issuer_profile(&symbol).await {
            Ok(profile) if !profile.is_empty() => {
                archive.apply_name(profile.company_name.as_deref());
                archive.issuer_data = Some(profile);
            }
            Ok(_) => debug!("{}: issuer page had no extractable fields", symbol),
            Err(e) => warn!("{}: issuer profile unavailable: {}", symbol, e),
        }
    }

    let mut incoming = Vec::new();
    for year in planner::target_years(&archive, mode, inception_year, today) {
        match provider.year_history(&symbol, year).await {
            Ok(history) => {
                archive.apply_name(history.issuer_name.as_deref());
                incoming.extend(history.records);
            }
            // Empty-for-year, not fatal, not "history ended": the next
            // incremental run retries it.
            Err(e) => warn!("{}: year {} unavailable: {}", symbol, year, e),
        }
    }

    let records_added = archive.merge_records(incoming);

    match store.save(&archive).await {
        Ok(()) => {
            debug!(
                "{}: {} records ({} new), name {:?}",
                symbol,
                archive.history.len(),
                records_added,
                archive.company_name
            );
            SymbolOutcome {
                symbol,
                records_total: archive.history.len(),
                records_added,
                company_name: archive.company_name,
                status: HarvestStatus::Persisted,
                error: None,
            }
        }
        Err(e) => {
            error!("{}: cannot persist archive: {}", symbol, e);
            SymbolOutcome {
                symbol,
                records_total: archive.history.len(),
                records_added,
                company_name: archive.company_name,
                status: HarvestStatus::Failed,
                error: Some(e.to_string()),
            }
        }
    }
}
