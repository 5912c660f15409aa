use serde::{Deserialize, Serialize};

/// Issuer profile fields scraped from the exchange's issuer page.
///
/// All fields are optional; the page layout varies per issuer and absent
/// fields are omitted from the persisted document. Once an archive carries a
/// profile it is never re-fetched or cleared by a later run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl IssuerProfile {
    /// True when extraction found nothing at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
