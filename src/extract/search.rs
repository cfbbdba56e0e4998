//! Extraction for monster search result pages.

use scraper::{ElementRef, Html};

use super::{field_attr, field_text, field_url};
use crate::client::BASE_URL;
use crate::net::html;
use crate::patterns::parse_challenge_rating;
use crate::text::resolve_url;
use crate::types::Monster;

/// Extracts one [`Monster`] per result row of a search page.
///
/// An empty result listing is a legitimate outcome (no matches), not a
/// structural failure.
pub fn extract_search_results(document: &Html) -> Vec<Monster> {
    html::parse_rows(document, ".listing-container .listing-body .info", parse_row)
}

fn parse_row(row: ElementRef<'_>) -> Option<Monster> {
    let mut monster = Monster::default();

    monster.name = field_text(row, ".monster-name .name");
    monster.source = field_text(row, ".monster-name .source");
    monster.challenge_rating_string = field_text(row, ".monster-challenge");
    monster.challenge_rating = monster
        .challenge_rating_string
        .as_deref()
        .and_then(parse_challenge_rating);
    monster.kind = field_text(row, ".monster-type .type");
    monster.subtype = field_text(row, ".monster-type .subtype");
    monster.size = field_text(row, ".monster-size");
    monster.alignment = field_text(row, ".monster-alignment");

    // The environment list lives in a title attribute, not inner text.
    monster.environment = field_attr(row, ".monster-environment span", "title");

    monster.avatar_icon_url = html::select_first(row, ".monster-icon .image")
        .and_then(html::background_image_url)
        .as_deref()
        .and_then(|url| resolve_url(url, BASE_URL));
    monster.large_image_url = field_url(row, ".monster-icon a", "href");
    monster.details_page_url = field_url(row, "a.link", "href");

    Some(monster)
}
