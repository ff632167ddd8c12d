//! Remote content source
//!
//! The paginator and the CLI only ever see the [`ContentSource`] trait; the
//! Prismic-backed implementation lives in [`PrismicSource`].

mod prismic;

pub use prismic::PrismicSource;

use crate::decode::RawPage;
use crate::error::Result;
use crate::types::PostDocument;
use async_trait::async_trait;

/// A cursor-paginated query API over blog posts
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the first listing page
    async fn first_page(&self) -> Result<RawPage>;

    /// Fetch the listing page a cursor points at
    async fn fetch_page(&self, cursor: &str) -> Result<RawPage>;

    /// Fetch a full post by its uid
    async fn get_by_uid(&self, uid: &str) -> Result<PostDocument>;
}
