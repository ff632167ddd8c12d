//! Pagination types

use crate::decode::RawPage;
use crate::types::{Cursor, PostSummary};
use serde::{Deserialize, Serialize};

use super::paginator::map_entry;

/// One page of listing entries plus the cursor to the next page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<PostSummary>,
    pub next_cursor: Option<Cursor>,
}

impl Page {
    /// Create a page
    pub fn new(items: Vec<PostSummary>, next_cursor: Option<Cursor>) -> Self {
        Self { items, next_cursor }
    }
}

impl From<&RawPage> for Page {
    fn from(raw: &RawPage) -> Self {
        Self {
            items: raw.results.iter().map(map_entry).collect(),
            next_cursor: raw.next_page.clone(),
        }
    }
}

/// Accumulated listing and the cursor for "load more"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    items: Vec<PostSummary>,
    next_cursor: Option<Cursor>,
}

impl PaginationState {
    /// Build state directly from an already-fetched first page
    pub fn initialize(first_page: Page) -> Self {
        Self {
            items: first_page.items,
            next_cursor: first_page.next_cursor,
        }
    }

    /// Whether a further page can be requested
    pub fn has_more(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Entries accumulated so far, in fetch order
    pub fn items(&self) -> &[PostSummary] {
        &self.items
    }

    /// Cursor for the next page, if any
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Number of accumulated entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no entries have been accumulated
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// New state with `page` appended and its cursor taking over
    #[must_use]
    pub fn append(&self, page: Page) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + page.items.len());
        items.extend_from_slice(&self.items);
        items.extend(page.items);
        Self {
            items,
            next_cursor: page.next_cursor,
        }
    }
}
