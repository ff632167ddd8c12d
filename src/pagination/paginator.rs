//! Page fetching

use super::types::{Page, PaginationState};
use crate::decode::RawEntry;
use crate::error::{Error, Result};
use crate::source::ContentSource;
use crate::types::{PostSummary, PostSummaryData};
use tracing::debug;

/// Project a raw listing entry onto a [`PostSummary`]
///
/// The publication timestamp is copied verbatim; formatting happens at
/// render time.
pub fn map_entry(entry: &RawEntry) -> PostSummary {
    PostSummary {
        uid: entry.uid.clone(),
        first_publication_date: entry.first_publication_date.clone(),
        data: PostSummaryData {
            title: entry.data.title.clone(),
            subtitle: entry.data.subtitle.clone(),
            author: entry.data.author.clone(),
        },
    }
}

/// Fetch the first listing page and build the initial state from it
pub async fn first_state<S>(source: &S) -> Result<PaginationState>
where
    S: ContentSource + ?Sized,
{
    let raw = source.first_page().await?;
    Ok(PaginationState::initialize(Page::from(&raw)))
}

/// Fetch the page after `state` and return the extended state
///
/// Fails with [`Error::NoMoreResults`] without touching the network when
/// `state` has no cursor. On any fetch or decode failure the error is
/// returned and `state` is left as it was.
pub async fn load_next<S>(state: &PaginationState, source: &S) -> Result<PaginationState>
where
    S: ContentSource + ?Sized,
{
    let cursor = state.next_cursor().ok_or(Error::NoMoreResults)?;
    let raw = source.fetch_page(cursor).await?;
    let page = Page::from(&raw);

    debug!(
        "Loaded {} more posts ({} total), more: {}",
        page.items.len(),
        state.len() + page.items.len(),
        page.next_cursor.is_some()
    );
    Ok(state.append(page))
}

/// Keep loading pages until the cursor runs out or `max_pages` more pages
/// have been fetched
pub async fn load_all<S>(
    state: PaginationState,
    source: &S,
    max_pages: Option<usize>,
) -> Result<PaginationState>
where
    S: ContentSource + ?Sized,
{
    let mut state = state;
    let mut fetched = 0;
    while state.has_more() && max_pages.map_or(true, |max| fetched < max) {
        state = load_next(&state, source).await?;
        fetched += 1;
    }
    Ok(state)
}
