//! Extraction pathways, one per source-page shape.
//!
//! Every pathway has the same shape: take an already-fetched document,
//! select item fragments by their structural role, and populate one
//! [`Monster`](crate::types::Monster) per fragment by running the
//! normalizers and pattern parsers over sub-fragments. Missing optional
//! fields are never an error; only a structurally malformed document is.
//!
//! The pathways are pure functions over parsed documents so they can be
//! exercised offline against synthetic fixtures.

pub mod catalog;
pub mod character;
pub mod encounter;
pub mod search;
pub mod statblock;

use scraper::ElementRef;

use crate::client::BASE_URL;
use crate::net::html;
use crate::text;

/// Selected inner text, whitespace-normalized, `None` when missing or blank.
pub(crate) fn field_text(scope: ElementRef<'_>, selector: &str) -> Option<String> {
    html::select_text(scope, selector)
        .as_deref()
        .and_then(text::normalize_whitespace)
}

/// Selected attribute value, whitespace-normalized.
pub(crate) fn field_attr(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    html::select_attr(scope, selector, attr)
        .as_deref()
        .and_then(text::normalize_whitespace)
}

/// Selected attribute value resolved to an absolute site URL.
pub(crate) fn field_url(scope: ElementRef<'_>, selector: &str, attr: &str) -> Option<String> {
    html::select_attr(scope, selector, attr)
        .as_deref()
        .and_then(|url| text::resolve_url(url, BASE_URL))
}
