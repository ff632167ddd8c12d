//! Rich-text to HTML
//!
//! Block kinds follow the CMS naming. Consecutive list items share one list
//! element; unknown kinds render as paragraphs. Inline spans address the
//! block text by character offset and may overlap; an inner element that
//! outlives the one enclosing it is closed and reopened so the output stays
//! well nested.

use pulldown_cmark::escape::{escape_href, escape_html};
use std::cmp::Reverse;

use crate::types::{Span, TextBlock};

/// Render body blocks as an HTML fragment
pub fn as_html(blocks: &[TextBlock]) -> String {
    let mut html = String::new();
    let mut open_list: Option<&'static str> = None;

    for block in blocks {
        let list = match block.kind.as_str() {
            "list-item" => Some("ul"),
            "o-list-item" => Some("ol"),
            _ => None,
        };

        if open_list != list {
            if let Some(tag) = open_list {
                html.push_str(&format!("</{tag}>"));
            }
            if let Some(tag) = list {
                html.push_str(&format!("<{tag}>"));
            }
            open_list = list;
        }

        let tag = match block.kind.as_str() {
            "list-item" | "o-list-item" => "li".to_string(),
            "preformatted" => "pre".to_string(),
            kind @ ("heading1" | "heading2" | "heading3" | "heading4" | "heading5"
            | "heading6") => format!("h{}", &kind["heading".len()..]),
            _ => "p".to_string(),
        };

        html.push_str(&format!("<{tag}>"));
        push_inline(&mut html, &block.text, &block.spans);
        html.push_str(&format!("</{tag}>"));
    }

    if let Some(tag) = open_list {
        html.push_str(&format!("</{tag}>"));
    }
    html
}

/// Write `text` with its spans applied
fn push_inline(out: &mut String, text: &str, spans: &[Span]) {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let end_of = |span: &Span| span.end.min(len);

    let mut spans: Vec<&Span> = spans.iter().filter(|&s| s.start < end_of(s)).collect();
    spans.sort_by_key(|s| (s.start, Reverse(s.end)));

    let mut bounds: Vec<usize> = spans
        .iter()
        .flat_map(|&s| [s.start, end_of(s)])
        .chain([0, len])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut open: Vec<&Span> = Vec::new();
    let mut pending = spans.into_iter().peekable();

    for (i, &at) in bounds.iter().enumerate() {
        if let Some(first_done) = open.iter().position(|&s| end_of(s) <= at) {
            let closing: Vec<&Span> = open.drain(first_done..).collect();
            for span in closing.iter().rev() {
                push_close(out, span);
            }
            for span in closing {
                if end_of(span) > at {
                    push_open(out, span);
                    open.push(span);
                }
            }
        }

        while let Some(span) = pending.next_if(|s| s.start == at) {
            push_open(out, span);
            open.push(span);
        }

        if let Some(&next) = bounds.get(i + 1) {
            let segment: String = chars[at..next].iter().collect();
            push_text(out, &segment);
        }
    }
}

fn push_text(out: &mut String, text: &str) {
    let mut escaped = String::with_capacity(text.len());
    let _ = escape_html(&mut escaped, text);
    out.push_str(&escaped.replace('\n', "<br />"));
}

fn push_open(out: &mut String, span: &Span) {
    let data = span.data.as_ref();
    match span.kind.as_str() {
        "strong" => out.push_str("<strong>"),
        "em" => out.push_str("<em>"),
        "hyperlink" => {
            out.push_str("<a");
            if let Some(url) = data.and_then(|d| d.url.as_deref()) {
                out.push_str(" href=\"");
                let _ = escape_href(&mut *out, url);
                out.push('"');
            }
            if let Some(target) = data.and_then(|d| d.target.as_deref()) {
                out.push_str(" target=\"");
                let _ = escape_html(&mut *out, target);
                out.push_str("\" rel=\"noopener\"");
            }
            out.push('>');
        }
        "label" => {
            out.push_str("<span");
            if let Some(label) = data.and_then(|d| d.label.as_deref()) {
                out.push_str(" class=\"");
                let _ = escape_html(&mut *out, label);
                out.push('"');
            }
            out.push('>');
        }
        _ => {}
    }
}

fn push_close(out: &mut String, span: &Span) {
    match span.kind.as_str() {
        "strong" => out.push_str("</strong>"),
        "em" => out.push_str("</em>"),
        "hyperlink" => out.push_str("</a>"),
        "label" => out.push_str("</span>"),
        _ => {}
    }
}
