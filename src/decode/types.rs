//! Raw response shapes

use serde::{Deserialize, Serialize};

/// One page of a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub results: Vec<RawEntry>,
    /// URL of the next page; `None` once the listing is exhausted
    #[serde(default)]
    pub next_page: Option<String>,
}

impl RawPage {
    /// Create a page from entries and a cursor
    pub fn new(results: Vec<RawEntry>, next_page: Option<String>) -> Self {
        Self { results, next_page }
    }
}

/// A listing entry as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    pub data: RawEntryData,
}

/// Projected fields of a listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntryData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// API root document, used to find the master ref
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRoot {
    pub refs: Vec<ApiRef>,
}

impl ApiRoot {
    /// The ref that points at the published content
    pub fn master_ref(&self) -> Option<&str> {
        self.refs
            .iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference.as_str())
    }
}

/// A content release reference
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRef {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(rename = "isMasterRef", default)]
    pub is_master_ref: bool,
}
