//! Extraction for encounter listing pages.

use scraper::{ElementRef, Html};

use super::{field_text, field_url};
use crate::error::{Error, Result};
use crate::net::html;
use crate::patterns::parse_challenge_rating;
use crate::text::parse_loose_float;
use crate::types::{EncounterEntry, Monster};

/// Extracts one `{monster, quantity}` pair per monster row of an encounter
/// page.
///
/// An encounter always lists at least one monster; zero rows means the
/// document is not an encounter page and is escalated to an error.
pub fn extract_encounter(document: &Html) -> Result<Vec<EncounterEntry>> {
    let entries = html::parse_rows(
        document,
        ".encounter-details__body-main .encounter-monster",
        parse_row,
    );
    if entries.is_empty() {
        return Err(Error::parse("no monster rows found on encounter page"));
    }
    Ok(entries)
}

fn parse_row(row: ElementRef<'_>) -> Option<EncounterEntry> {
    let mut monster = Monster::default();

    monster.name = field_text(row, ".encounter-monster__details .encounter-monster__name");

    // The subtext is a bare "<size> <type>" pair; a positional split is all
    // this page shape supports. Subtype and alignment are not recoverable.
    if let Some(subtext) = field_text(row, ".encounter-monster__details .encounter-monster__subtext")
    {
        let mut tokens = subtext.split_whitespace();
        monster.size = tokens.next().map(str::to_string);
        monster.kind = tokens.next().map(str::to_string);
    }

    monster.challenge_rating_string =
        field_text(row, ".encounter-monster__difficulty .difficulty__value");
    monster.challenge_rating = monster
        .challenge_rating_string
        .as_deref()
        .and_then(parse_challenge_rating);
    monster.avatar_icon_url = field_url(row, ".encounter-monster__avatar img", "src");
    monster.details_page_url = field_url(row, "a", "href");

    let quantity = field_text(row, ".encounter-monster__quantity")
        .and_then(|marker| {
            // Skip the leading multiplier sign, e.g. "×3".
            let digits: String = marker.chars().skip(1).collect();
            parse_loose_float(&digits)
        })
        .filter(|value| *value >= 1.0)
        .map(|value| value as u32)
        .unwrap_or(1);

    Some(EncounterEntry { monster, quantity })
}
