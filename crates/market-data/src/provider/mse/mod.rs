//! Macedonian Stock Exchange (mse.mk) provider implementation.
//!
//! Two endpoints are used:
//! - `POST /mk/stats/symbolhistory/{code}` with a form-encoded date range,
//!   answering a tabular page of daily records for that range
//! - `GET /mk/search/{code}` answering a result list that links to the
//!   issuer's profile page, which carries labeled contact rows
//!
//! All markup parsing happens in synchronous helpers over the fetched body,
//! so parsed documents never live across await points.

mod profile;

pub use profile::{LabeledRowsExtractor, ProfileExtractor};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::MarketDataError;
use crate::models::{IssuerProfile, PriceRecord, SymbolCode, YearHistory};
use crate::normalize;

const BASE_URL: &str = "https://www.mse.mk";
const PROVIDER_ID: &str = "MSE";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum number of cells a history row must have to be usable.
/// Shorter rows (spacers, notes, layout variance) are skipped silently.
const HISTORY_COLUMNS: usize = 9;

/// Market data provider for the Macedonian Stock Exchange.
pub struct MseProvider {
    client: Client,
    extractor: Box<dyn ProfileExtractor>,
}

impl MseProvider {
    /// Create a provider with its own pooled HTTP client.
    ///
    /// `max_connections` caps idle connections kept to the exchange host;
    /// the harvesting engine separately caps how many requests are in
    /// flight, so together they bound pressure on the remote end.
    pub fn new(max_connections: usize) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(max_connections)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            extractor: Box::new(LabeledRowsExtractor),
        }
    }

    /// Replace the profile extractor, for when the issuer page layout
    /// changes ahead of this crate.
    pub fn with_extractor(mut self, extractor: Box<dyn ProfileExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// GET a page and return its body, mapping non-success statuses.
    async fn get_page(&self, url: &str) -> Result<String, MarketDataError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl MarketDataProvider for MseProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn year_history(
        &self,
        symbol: &SymbolCode,
        year: i32,
    ) -> Result<YearHistory, MarketDataError> {
        let url = format!("{}/mk/stats/symbolhistory/{}", BASE_URL, symbol);
        // The endpoint is form-driven; one request covers the whole year.
        let form = [
            ("FromDate", format!("1.1.{}", year)),
            ("ToDate", format!("31.12.{}", year)),
            ("Code", symbol.to_string()),
        ];

        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let history = parse_history_page(&body)?;
        debug!(
            "{}: {} records for {} in {}",
            PROVIDER_ID,
            history.records.len(),
            symbol,
            year
        );
        Ok(history)
    }

    async fn issuer_profile(
        &self,
        symbol: &SymbolCode,
    ) -> Result<IssuerProfile, MarketDataError> {
        let search_url = format!("{}/mk/search/{}", BASE_URL, symbol);
        let search_page = self.get_page(&search_url).await?;

        let link = profile::resolve_issuer_link(&search_page, symbol)
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;
        let link = if link.starts_with("http") {
            link
        } else {
            format!("{}{}", BASE_URL, link)
        };

        let issuer_page = self.get_page(&link).await?;
        let profile = self.extractor.extract_profile(&issuer_page)?;
        debug!("{}: issuer profile for {} from {}", PROVIDER_ID, symbol, link);
        Ok(profile)
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, MarketDataError> {
    Selector::parse(css)
        .map_err(|e| MarketDataError::Markup(format!("invalid selector `{}`: {:?}", css, e)))
}

/// Concatenated, trimmed text content of an element.
pub(crate) fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Parse the tabular history page into records plus the inline issuer name.
///
/// Rows with fewer than [`HISTORY_COLUMNS`] cells are skipped, as are rows
/// whose date cell does not normalize to a canonical calendar date: a
/// non-canonical date would silently poison the archive's date ordering, so
/// it is dropped here and retried on the next run instead.
fn parse_history_page(html: &str) -> Result<YearHistory, MarketDataError> {
    let doc = Html::parse_document(html);
    let row_sel = selector("#resultsTable tbody tr")?;
    let cell_sel = selector("td")?;
    let title_sel = selector("#main-content > div.title > h1")?;

    let issuer_name = doc
        .select(&title_sel)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty());

    let mut records = Vec::new();
    for row in doc.select(&row_sel) {
        let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
        if cells.len() < HISTORY_COLUMNS {
            continue;
        }

        let date = normalize::parse_trade_date(&cells[0]);
        if !normalize::is_canonical_date(&date) {
            warn!(
                "{}: skipping row with malformed date {:?}",
                PROVIDER_ID, cells[0]
            );
            continue;
        }

        records.push(PriceRecord {
            date,
            last_transaction_price: normalize::parse_decimal(&cells[1]),
            max_price: normalize::parse_decimal(&cells[2]),
            min_price: normalize::parse_decimal(&cells[3]),
            average_price: normalize::parse_decimal(&cells[4]),
            percent_change: normalize::parse_decimal(&cells[5]),
            quantity: normalize::parse_decimal(&cells[6]),
            turnover_best_mkd: normalize::parse_decimal(&cells[7]),
            total_turnover_mkd: normalize::parse_decimal(&cells[8]),
        });
    }

    Ok(YearHistory {
        records,
        issuer_name,
    })
}
