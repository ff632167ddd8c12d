//! Display views

use super::date::format_publication_date;
use super::rich_text::as_html;
use crate::error::Result;
use crate::pagination::PaginationState;
use crate::reading_time::estimate_read_minutes;
use crate::types::{PostDocument, PostSummary};
use chrono::Locale;
use serde::Serialize;

fn format_optional(value: Option<&str>, locale: Locale) -> Result<Option<String>> {
    value
        .map(|v| format_publication_date(v, locale))
        .transpose()
}

/// One entry of the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCardView {
    pub uid: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub publication_date: Option<String>,
}

impl PostCardView {
    pub fn render(summary: &PostSummary, locale: Locale) -> Result<Self> {
        Ok(Self {
            uid: summary.uid.clone(),
            title: summary.data.title.clone(),
            subtitle: summary.data.subtitle.clone(),
            author: summary.data.author.clone(),
            publication_date: format_optional(summary.first_publication_date.as_deref(), locale)?,
        })
    }
}

/// The listing page: cards plus the "load more" affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub posts: Vec<PostCardView>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

impl ListingView {
    pub fn render(state: &PaginationState, locale: Locale) -> Result<Self> {
        let posts = state
            .items()
            .iter()
            .map(|summary| PostCardView::render(summary, locale))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            posts,
            has_more: state.has_more(),
            next_cursor: state.next_cursor().map(ToString::to_string),
        })
    }
}

/// One section of a post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Heading markup, passed through unescaped
    pub heading: String,
    pub body_html: String,
}

/// A full post page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub uid: Option<String>,
    pub title: String,
    pub author: String,
    pub banner_url: String,
    pub publication_date: Option<String>,
    pub reading_minutes: u64,
    pub sections: Vec<SectionView>,
}

impl PostView {
    pub fn render(document: &PostDocument, locale: Locale, words_per_minute: u32) -> Result<Self> {
        let data = &document.data;
        let sections = data
            .content
            .iter()
            .map(|section| SectionView {
                heading: section.heading.clone(),
                body_html: as_html(&section.body),
            })
            .collect();

        Ok(Self {
            uid: document.uid.clone(),
            title: data.title.clone(),
            author: data.author.clone(),
            banner_url: data.banner.url.clone(),
            publication_date: format_optional(document.first_publication_date.as_deref(), locale)?,
            reading_minutes: estimate_read_minutes(&data.content, words_per_minute),
            sections,
        })
    }
}

/// Uids of the first `count` listed posts, for ahead-of-time post pages
pub fn static_paths(state: &PaginationState, count: usize) -> Vec<String> {
    state
        .items()
        .iter()
        .filter_map(|summary| summary.uid.clone())
        .take(count)
        .collect()
}
