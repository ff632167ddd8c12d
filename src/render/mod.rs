//! Presentation helpers
//!
//! Turns content values into display values: localized dates, rich-text
//! HTML and the listing / post views the CLI and preview server emit.
//! Dates are stored raw and only formatted here, so the locale is chosen per
//! render.

mod date;
mod rich_text;
mod view;

pub use date::{format_publication_date, parse_locale, parse_timestamp, DATE_FORMAT};
pub use rich_text::as_html;
pub use view::{static_paths, ListingView, PostCardView, PostView, SectionView};
