//! Strong types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange ticker for one issuer/instrument.
///
/// Examples: "ALK", "KMB", "M060240".
///
/// Codes are treated as opaque and immutable; the exchange assigns them and
/// the archive files are keyed by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SymbolCode(pub String);

impl SymbolCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SymbolCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SymbolCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SymbolCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
