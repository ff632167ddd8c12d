//! Content types shared across blog-feed
//!
//! These are the display-ready projections of CMS documents. They are plain
//! values: built once at the decode boundary and never mutated afterwards.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Opaque next-page reference returned by the content source
pub type Cursor = String;

// ============================================================================
// Listing
// ============================================================================

/// Lightweight listing-view projection of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Stable identifier; absent only for degenerate documents
    #[serde(default)]
    pub uid: Option<String>,
    /// Raw publication timestamp, formatted at render time
    #[serde(default)]
    pub first_publication_date: Option<String>,
    /// Listing fields
    pub data: PostSummaryData,
}

/// Nested listing fields of a [`PostSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummaryData {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

// ============================================================================
// Post document
// ============================================================================

/// Full content projection of a single post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub first_publication_date: Option<String>,
    pub data: PostDocumentData,
}

/// Nested content fields of a [`PostDocument`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocumentData {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub author: String,
    pub banner: Banner,
    /// Ordered document sections; `null` or missing decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Vec<Section>,
}

/// Banner image of a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub url: String,
}

/// One heading plus its rich-text body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text, possibly containing inline markup
    pub heading: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: Vec<TextBlock>,
}

impl Section {
    /// Create a section from a heading and its body blocks
    pub fn new(heading: impl Into<String>, body: Vec<TextBlock>) -> Self {
        Self {
            heading: heading.into(),
            body,
        }
    }
}

/// One unit of a rich-text body (a paragraph, list item, heading...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block kind as reported by the CMS (`paragraph`, `list-item`, ...)
    #[serde(rename = "type", default = "default_block_kind")]
    pub kind: String,
    pub text: String,
    /// Inline formatting over `text`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spans: Vec<Span>,
}

impl TextBlock {
    /// Create a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::with_kind(default_block_kind(), text)
    }

    /// Create a block of an explicit kind
    pub fn with_kind(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Add inline formatting
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }
}

/// Inline formatting applied to the characters `start..end` of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Character offset (inclusive)
    pub start: usize,
    /// Character offset (exclusive)
    pub end: usize,
    /// `strong`, `em`, `hyperlink`, `label`, ...
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Option<SpanData>,
}

impl Span {
    /// Create a span without data
    pub fn new(kind: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            kind: kind.into(),
            data: None,
        }
    }

    /// Create a hyperlink span
    pub fn hyperlink(start: usize, end: usize, url: impl Into<String>) -> Self {
        Self {
            data: Some(SpanData {
                url: Some(url.into()),
                ..SpanData::default()
            }),
            ..Self::new("hyperlink", start, end)
        }
    }
}

/// Extra span fields; only the ones rendering needs are kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanData {
    /// Link target of a `hyperlink`
    #[serde(default)]
    pub url: Option<String>,
    /// Window target of a `hyperlink`
    #[serde(default)]
    pub target: Option<String>,
    /// Class name of a `label`
    #[serde(default)]
    pub label: Option<String>,
}

fn default_block_kind() -> String {
    "paragraph".to_string()
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
