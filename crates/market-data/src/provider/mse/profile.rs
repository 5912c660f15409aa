//! Issuer profile extraction from exchange markup.
//!
//! The search-result link and the display name each have more than one place
//! they can live, depending on the page vintage. Both lookups are modeled as
//! an ordered strategy list, first success wins, so a layout change means
//! adding a strategy rather than growing a conditional.

use log::debug;
use scraper::{Html, Selector};

use super::{element_text, selector};
use crate::errors::MarketDataError;
use crate::models::{IssuerProfile, SymbolCode};

// Localized row labels on the issuer page, matched case-insensitively
// against the first column of each labeled row.
const LABEL_ADDRESS: &str = "адреса";
const LABEL_CITY: &str = "град";
const LABEL_EMAIL: &str = "e-mail";
const LABEL_WEBSITE: &str = "веб страница";
const LABEL_PHONE: &str = "телефон";
const LABEL_FAX: &str = "факс";

/// Capability interface for pulling an [`IssuerProfile`] out of a fetched
/// issuer page. One implementation exists today; a future exchange redesign
/// gets a second implementation instead of edits scattered through the
/// provider.
pub trait ProfileExtractor: Send + Sync {
    fn extract_profile(&self, html: &str) -> Result<IssuerProfile, MarketDataError>;
}

/// Extractor for the current issuer page layout: a title block plus
/// `div.row` pairs of label and value.
pub struct LabeledRowsExtractor;

type NameStrategy = fn(&Html) -> Option<String>;

/// Display-name sources in priority order.
const NAME_STRATEGIES: &[(&str, NameStrategy)] = &[
    ("title block", name_from_title_block),
    ("page title", name_from_page_title),
];

fn name_from_title_block(doc: &Html) -> Option<String> {
    let sel = Selector::parse("div.col-md-8.title").ok()?;
    doc.select(&sel)
        .next()
        .map(element_text)
        .filter(|name| !name.is_empty())
}

/// Fallback: the `<title>` tag reads like "Податоци за издавачот - Гранит АД
/// Скопје"; the display name is the tail after the last dash.
fn name_from_page_title(doc: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    let title = doc.select(&sel).next().map(element_text)?;
    title
        .rsplit('-')
        .next()
        .map(|tail| tail.trim().to_string())
        .filter(|name| !name.is_empty())
}

impl ProfileExtractor for LabeledRowsExtractor {
    fn extract_profile(&self, html: &str) -> Result<IssuerProfile, MarketDataError> {
        let doc = Html::parse_document(html);
        let row_sel = selector("div.row")?;
        let col_sel = selector("div")?;
        let anchor_sel = selector("a")?;

        let mut profile = IssuerProfile {
            company_name: NAME_STRATEGIES.iter().find_map(|(source, strategy)| {
                let name = strategy(&doc);
                if name.is_some() {
                    debug!("issuer name resolved via {}", source);
                }
                name
            }),
            ..Default::default()
        };

        for row in doc.select(&row_sel) {
            let cols: Vec<_> = row.select(&col_sel).collect();
            if cols.len() < 2 {
                continue;
            }

            let key = element_text(cols[0]).to_lowercase();
            let value = element_text(cols[1]);
            if value.is_empty() {
                continue;
            }

            if key.contains(LABEL_ADDRESS) {
                profile.address = Some(value);
            } else if key.contains(LABEL_CITY) {
                profile.city = Some(value);
            } else if key.contains(LABEL_EMAIL) {
                profile.email = Some(value);
            } else if key.contains(LABEL_WEBSITE) {
                // Prefer the link target over the link text when present.
                profile.website = cols[1]
                    .select(&anchor_sel)
                    .next()
                    .and_then(|a| a.value().attr("href").map(str::to_string))
                    .or(Some(value));
            } else if key.contains(LABEL_PHONE) {
                profile.phone = Some(value);
            } else if key.contains(LABEL_FAX) {
                profile.fax = Some(value);
            }
        }

        Ok(profile)
    }
}

type LinkStrategy = fn(&Html, &SymbolCode) -> Option<String>;

/// Search-result link sources in priority order.
const LINK_STRATEGIES: &[(&str, LinkStrategy)] = &[
    ("href match", link_by_href),
    ("text match", link_by_text),
];

fn link_by_href(doc: &Html, symbol: &SymbolCode) -> Option<String> {
    let anchors = Selector::parse("a").ok()?;
    let symbol_path = format!("/symbol/{}", symbol);
    let issuer_path = format!("/issuer/{}", symbol);
    doc.select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| href.contains(&symbol_path) || href.contains(&issuer_path))
        .map(str::to_string)
}

fn link_by_text(doc: &Html, symbol: &SymbolCode) -> Option<String> {
    let anchors = Selector::parse("a").ok()?;
    doc.select(&anchors)
        .find(|a| element_text(*a) == symbol.as_str())
        .and_then(|a| a.value().attr("href").map(str::to_string))
}

/// Resolve the issuer page link from a fetched search-result page.
pub(crate) fn resolve_issuer_link(html: &str, symbol: &SymbolCode) -> Option<String> {
    let doc = Html::parse_document(html);
    for (source, strategy) in LINK_STRATEGIES {
        if let Some(href) = strategy(&doc, symbol) {
            debug!("issuer link for {} resolved via {}", symbol, source);
            return Some(href);
        }
    }
    None
}
