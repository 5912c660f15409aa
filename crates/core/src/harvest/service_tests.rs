//! Tests for the harvest orchestrator.
//!
//! These cover the batch-level contracts: failure isolation between years
//! and between symbols, the admission gate bound, idempotent re-runs, name
//! and profile non-regression, and hard persist failures.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use berza_market_data::{
    IssuerProfile, MarketDataError, MarketDataProvider, PriceRecord, SymbolCode, YearHistory,
};

use super::config::HarvestConfig;
use super::planner::HarvestMode;
use super::service::{HarvestService, HarvestStatus, HarvestSummary};
use crate::archive::{ArchiveStore, FileArchiveStore, SymbolArchive};
use crate::errors::{Result, StoreError};

// =========================================================================
// Mock Provider
// =========================================================================

#[derive(Default)]
struct MockProvider {
    years: HashMap<(String, i32), Vec<PriceRecord>>,
    profiles: HashMap<String, IssuerProfile>,
    inline_names: HashMap<String, String>,
    fail_years: HashSet<(String, i32)>,
    delay: Duration,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    profile_calls: Arc<AtomicUsize>,
    year_calls: Arc<Mutex<Vec<(String, i32)>>>,
}

impl MockProvider {
    fn with_year(mut self, symbol: &str, year: i32, dates: &[&str]) -> Self {
        self.years.insert(
            (symbol.to_string(), year),
            dates.iter().map(|d| PriceRecord::new(*d)).collect(),
        );
        self
    }

    fn with_profile(mut self, symbol: &str, name: &str) -> Self {
        self.profiles.insert(
            symbol.to_string(),
            IssuerProfile {
                company_name: Some(name.to_string()),
                city: Some("Скопје".to_string()),
                ..Default::default()
            },
        );
        self
    }

    fn with_inline_name(mut self, symbol: &str, name: &str) -> Self {
        self.inline_names.insert(symbol.to_string(), name.to_string());
        self
    }

    fn with_failing_year(mut self, symbol: &str, year: i32) -> Self {
        self.fail_years.insert((symbol.to_string(), year));
        self
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn track_request(&self) {
        let active = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(active, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn year_history(
        &self,
        symbol: &SymbolCode,
        year: i32,
    ) -> std::result::Result<YearHistory, MarketDataError> {
        self.track_request().await;
        let key = (symbol.as_str().to_string(), year);
        self.year_calls.lock().unwrap().push(key.clone());

        if self.fail_years.contains(&key) {
            return Err(MarketDataError::HttpStatus {
                status: 503,
                url: format!("mock://history/{}/{}", symbol, year),
            });
        }

        Ok(YearHistory {
            records: self.years.get(&key).cloned().unwrap_or_default(),
            issuer_name: self.inline_names.get(symbol.as_str()).cloned(),
        })
    }

    async fn issuer_profile(
        &self,
        symbol: &SymbolCode,
    ) -> std::result::Result<IssuerProfile, MarketDataError> {
        self.track_request().await;
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(symbol.as_str())
            .cloned()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

// =========================================================================
// Mock Store with failure injection
// =========================================================================

#[derive(Default)]
struct MockStore {
    archives: Mutex<HashMap<String, SymbolArchive>>,
    fail_code: Option<String>,
}

impl MockStore {
    fn failing_for(code: &str) -> Self {
        Self {
            archives: Mutex::new(HashMap::new()),
            fail_code: Some(code.to_string()),
        }
    }
}

#[async_trait]
impl ArchiveStore for MockStore {
    async fn load(&self, code: &SymbolCode) -> Result<Option<SymbolArchive>> {
        Ok(self.archives.lock().unwrap().get(code.as_str()).cloned())
    }

    async fn save(&self, archive: &SymbolArchive) -> Result<()> {
        if self.fail_code.as_deref() == Some(archive.company_code.as_str()) {
            return Err(StoreError::WriteFailed("disk full".to_string()).into());
        }
        self.archives
            .lock()
            .unwrap()
            .insert(archive.company_code.clone(), archive.clone());
        Ok(())
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn symbols(codes: &[&str]) -> Vec<SymbolCode> {
    codes.iter().map(|c| SymbolCode::new(*c)).collect()
}

fn service<S: ArchiveStore + 'static>(
    provider: MockProvider,
    store: Arc<S>,
    config: HarvestConfig,
) -> HarvestService<S> {
    HarvestService::new(Arc::new(provider), store, config)
}

fn outcome_for<'a>(summary: &'a HarvestSummary, code: &str) -> &'a super::SymbolOutcome {
    summary
        .outcomes
        .iter()
        .find(|o| o.symbol.as_str() == code)
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_backfill_merges_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    let provider = MockProvider::default()
        .with_profile("ALK", "Алкалоид АД Скопје")
        .with_year("ALK", 2024, &["2024-02-01", "2024-01-15"])
        .with_year("ALK", 2025, &["2025-03-10"]);

    let config = HarvestConfig::new(symbols(&["ALK"])).with_inception_year(2024);
    let summary = service(provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Backfill, today())
        .await;

    assert!(summary.is_success());
    assert_eq!(summary.harvested, 1);
    assert_eq!(summary.records_added, 3);

    let archive = store.load(&SymbolCode::new("ALK")).await.unwrap().unwrap();
    assert_eq!(archive.company_name, "Алкалоид АД Скопје");
    assert!(archive.has_profile());
    assert_eq!(archive.first_trade_date.as_deref(), Some("2024-01-15"));
    let dates: Vec<&str> = archive.history.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-03-10", "2024-02-01", "2024-01-15"]);
}

#[tokio::test]
async fn test_year_failure_is_isolated_from_other_years_and_symbols() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    let provider = MockProvider::default()
        .with_year("X", 2024, &["2024-05-05"])
        .with_year("X", 2025, &["2025-05-05"])
        .with_failing_year("X", 2024)
        .with_year("Y", 2024, &["2024-06-06"])
        .with_year("Y", 2025, &["2025-06-06"]);

    let config = HarvestConfig::new(symbols(&["X", "Y"])).with_inception_year(2024);
    let summary = service(provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Backfill, today())
        .await;

    // A failed year is empty-for-year, not a failed symbol.
    assert!(summary.is_success());
    assert_eq!(summary.outcomes.len(), 2);

    let x = store.load(&SymbolCode::new("X")).await.unwrap().unwrap();
    let x_dates: Vec<&str> = x.history.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(x_dates, vec!["2025-05-05"]);

    let y = store.load(&SymbolCode::new("Y")).await.unwrap().unwrap();
    assert_eq!(y.history.len(), 2);
}

#[tokio::test]
async fn test_admission_gate_bounds_in_flight_requests() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    let codes: Vec<String> = (0..25).map(|i| format!("S{:02}", i)).collect();
    let code_refs: Vec<&str> = codes.iter().map(String::as_str).collect();

    let provider = MockProvider::default().with_delay(Duration::from_millis(10));
    let max_in_flight = Arc::clone(&provider.max_in_flight);

    let config = HarvestConfig::new(symbols(&code_refs)).with_concurrency(3);
    let summary = service(provider, store, config)
        .run_as_of(HarvestMode::CurrentYearOnly, today())
        .await;

    assert_eq!(summary.outcomes.len(), 25);
    assert!(
        max_in_flight.load(Ordering::SeqCst) <= 3,
        "gate leaked: saw {} concurrent requests",
        max_in_flight.load(Ordering::SeqCst)
    );
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    let build_provider = || {
        MockProvider::default()
            .with_year("KMB", 2024, &["2024-02-01"])
            .with_year("KMB", 2025, &["2025-03-10", "2025-03-11"])
    };
    let config = HarvestConfig::new(symbols(&["KMB"])).with_inception_year(2024);

    let first = service(build_provider(), Arc::clone(&store), config.clone())
        .run_as_of(HarvestMode::Backfill, today())
        .await;
    assert_eq!(first.records_added, 3);

    let second = service(build_provider(), Arc::clone(&store), config)
        .run_as_of(HarvestMode::Backfill, today())
        .await;
    assert_eq!(second.records_added, 0);

    let archive = store.load(&SymbolCode::new("KMB")).await.unwrap().unwrap();
    assert_eq!(archive.history.len(), 3);
}

#[tokio::test]
async fn test_incremental_refetches_only_from_last_known_year() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    // Seed an archive whose history ends in 2024.
    let mut seeded = SymbolArchive::new(&SymbolCode::new("TEL"));
    seeded.issuer_data = Some(IssuerProfile::default());
    seeded.merge_records(vec![
        PriceRecord::new("2024-11-15"),
        PriceRecord::new("2020-01-03"),
    ]);
    store.save(&seeded).await.unwrap();

    let provider = MockProvider::default()
        .with_year("TEL", 2024, &["2024-11-15", "2024-12-02"])
        .with_year("TEL", 2025, &["2025-01-20"]);
    let year_calls = Arc::clone(&provider.year_calls);

    let config = HarvestConfig::new(symbols(&["TEL"]));
    let summary = service(provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Incremental, today())
        .await;

    assert_eq!(summary.records_added, 2);

    let mut called: Vec<(String, i32)> = year_calls.lock().unwrap().clone();
    called.sort();
    assert_eq!(
        called,
        vec![("TEL".to_string(), 2024), ("TEL".to_string(), 2025)]
    );

    let archive = store.load(&SymbolCode::new("TEL")).await.unwrap().unwrap();
    assert_eq!(archive.history.len(), 4);
    assert_eq!(archive.first_trade_date.as_deref(), Some("2020-01-03"));
}

#[tokio::test]
async fn test_name_and_profile_never_regress() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));
    let config = HarvestConfig::new(symbols(&["GRNT"])).with_inception_year(2025);

    let first_provider = MockProvider::default()
        .with_profile("GRNT", "Гранит АД Скопје")
        .with_year("GRNT", 2025, &["2025-02-14"]);
    service(first_provider, Arc::clone(&store), config.clone())
        .run_as_of(HarvestMode::Backfill, today())
        .await;

    // Second run: source offers no profile and no names at all.
    let second_provider = MockProvider::default().with_year("GRNT", 2025, &["2025-02-15"]);
    let profile_calls = Arc::clone(&second_provider.profile_calls);
    let summary = service(second_provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Incremental, today())
        .await;

    let outcome = outcome_for(&summary, "GRNT");
    assert_eq!(outcome.company_name, "Гранит АД Скопје");

    let archive = store.load(&SymbolCode::new("GRNT")).await.unwrap().unwrap();
    assert_eq!(archive.company_name, "Гранит АД Скопје");
    assert!(archive.has_profile());
    // Profile present means the lookup is suppressed entirely.
    assert_eq!(profile_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_inline_name_used_when_profile_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileArchiveStore::new(dir.path()));

    let provider = MockProvider::default()
        .with_year("SKP", 2025, &["2025-04-01"])
        .with_inline_name("SKP", "Скопски Пазар АД");

    let config = HarvestConfig::new(symbols(&["SKP"])).with_inception_year(2025);
    let summary = service(provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Backfill, today())
        .await;

    assert_eq!(outcome_for(&summary, "SKP").company_name, "Скопски Пазар АД");
}

#[tokio::test]
async fn test_persist_failure_fails_only_that_symbol() {
    let store = Arc::new(MockStore::failing_for("BAD"));

    let provider = MockProvider::default()
        .with_year("BAD", 2025, &["2025-01-10"])
        .with_year("OK", 2025, &["2025-01-10"]);

    let config = HarvestConfig::new(symbols(&["BAD", "OK"])).with_inception_year(2025);
    let summary = service(provider, Arc::clone(&store), config)
        .run_as_of(HarvestMode::Backfill, today())
        .await;

    assert!(!summary.is_success());
    assert_eq!(summary.harvested, 1);
    assert_eq!(summary.failed, 1);

    let bad = outcome_for(&summary, "BAD");
    assert_eq!(bad.status, HarvestStatus::Failed);
    assert!(bad.error.as_deref().unwrap().contains("disk full"));

    let ok = outcome_for(&summary, "OK");
    assert_eq!(ok.status, HarvestStatus::Persisted);
    assert!(store.load(&SymbolCode::new("OK")).await.unwrap().is_some());
}
