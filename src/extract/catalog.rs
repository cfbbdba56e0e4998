//! Extraction for content discovery pages: the search filter's source
//! options and the user's homebrew collection listing.

use scraper::{ElementRef, Html, Selector};

use super::{field_text, field_url};
use crate::net::html;
use crate::types::{Monster, Source};

/// Reads every option of the monster search's source filter as a candidate
/// [`Source`].
///
/// Entitlement is determined separately; candidates start out unpurchased.
pub fn extract_source_options(document: &Html) -> Vec<Source> {
    let Ok(selector) = Selector::parse("#filter-source option") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|option| {
            let id = option.value().attr("value")?.to_string();
            let name = option.text().collect::<String>().trim().to_string();
            Some(Source {
                id,
                name,
                purchased: false,
            })
        })
        .collect()
}

/// Extracts lightweight monster stubs from the homebrew collection listing.
///
/// The listing only exposes name, source, and a details URL; no challenge,
/// type, or size is available without visiting each detail page.
pub fn extract_homebrew_listing(document: &Html) -> Vec<Monster> {
    html::parse_rows(
        document,
        ".listing-container .listing-body .list-row",
        parse_row,
    )
}

fn parse_row(row: ElementRef<'_>) -> Option<Monster> {
    let mut monster = Monster::default();
    monster.name = field_text(row, ".list-row-name-primary-text");
    monster.source = field_text(row, ".list-row-name-secondary-text");
    monster.details_page_url = field_url(row, ".list-row-name-primary-text a.link", "href");
    Some(monster)
}
