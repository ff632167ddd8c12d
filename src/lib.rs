// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # blog-feed
//!
//! Listing and post data for a blog whose content lives in a headless CMS.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Accumulate the post listing page by page as an immutable state value
//! - **Reading Time**: Word-count based minute estimates over a post's sections
//! - **Boundary Validation**: CMS responses are checked before they reach the rest of the crate
//! - **Display Views**: Localized dates and rich-text HTML for listing and post pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blog_feed::{load_config, pagination, PrismicSource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = load_config("blog.yaml")?;
//!     let source = PrismicSource::new(config)?;
//!
//!     let state = pagination::first_state(&source).await?;
//!     if state.has_more() {
//!         let state = pagination::load_next(&state, &source).await?;
//!         println!("{} posts", state.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │              CLI  /  preview server (axum)               │
//! └──────────────────────────────────────────────────────────┘
//!          │                    │                   │
//! ┌────────┴───────┐   ┌────────┴───────┐   ┌───────┴────────┐
//! │   Pagination   │   │  Reading time  │   │     Render     │
//! │ initialize     │   │ count_words    │   │ dates          │
//! │ has_more       │   │ estimate       │   │ rich text      │
//! │ load_next      │   │                │   │ views          │
//! └────────┬───────┘   └────────────────┘   └────────────────┘
//! ┌────────┴───────┐   ┌────────────────┐
//! │ ContentSource  │──▶│ Decode / HTTP  │
//! └────────────────┘   └────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Content types
pub mod types;

/// Site configuration
pub mod config;

/// HTTP client
pub mod http;

/// Response decoding and validation
pub mod decode;

/// Remote content source
pub mod source;

/// Listing pagination
pub mod pagination;

/// Reading-time estimation
pub mod reading_time;

/// Dates, rich text and display views
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{load_config, load_config_from_str, BlogConfig};
pub use pagination::{Page, PaginationState};
pub use reading_time::{estimate_read_minutes, DEFAULT_WORDS_PER_MINUTE};
pub use source::{ContentSource, PrismicSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
