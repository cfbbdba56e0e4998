//! Extraction for stat-block detail pages.

use scraper::Html;

use super::{field_text, field_url};
use crate::dice::Dice;
use crate::net::html;
use crate::patterns::{parse_challenge_rating_and_xp, parse_monster_types};
use crate::text::normalize_whitespace;
use crate::types::Monster;

/// Extracts one [`Monster`] from a stat-block detail page.
///
/// Every field is optional on this page shape too, so a partial stat block
/// still yields a record; hit points default to a flat 1 when the label is
/// missing entirely.
pub fn extract_stat_block(document: &Html, url: &str) -> Monster {
    let root = document.root_element();
    let mut monster = Monster::default();

    // Homebrew pages put the name in the page title instead of the block.
    monster.name = field_text(root, "#content .mon-stat-block__name")
        .or_else(|| field_text(root, "h1.page-title"));
    monster.source = field_text(root, "#content .source.monster-source");

    let hp_text = html::labeled_text(
        root,
        "#content .mon-stat-block__attribute-label",
        "Hit Points",
        ".mon-stat-block__attribute-data",
    )
    .filter(|text| !text.is_empty());
    monster.hp = Some(match hp_text {
        Some(text) => Dice::parse(&text),
        None => Dice::flat(1),
    });

    let challenge = html::labeled_text(
        root,
        "#content .mon-stat-block__tidbit-label",
        "Challenge",
        ".mon-stat-block__tidbit-data",
    );
    if let Some(challenge) = challenge.as_deref().and_then(parse_challenge_rating_and_xp) {
        monster.challenge_rating_string = Some(challenge.text);
        monster.challenge_rating = Some(challenge.value);
        monster.xp = Some(challenge.xp);
    }

    let meta = field_text(root, "#content .mon-stat-block__header .mon-stat-block__meta");
    if let Some(types) = meta.as_deref().and_then(parse_monster_types) {
        monster.kind = Some(types.kind);
        monster.subtype = types.subtype;
        monster.size = Some(types.size);
        monster.alignment = types.alignment;
    }

    let environments: Vec<String> =
        html::select_all_text(root, "#content .environment-tags .environment-tag")
            .iter()
            .filter_map(|tag| normalize_whitespace(tag))
            .collect();
    if !environments.is_empty() {
        monster.environment = Some(environments.join(", "));
    }

    // No avatar icon exists on this page shape.
    monster.large_image_url = field_url(root, "#content .detail-content .image a", "href");
    monster.details_page_url = Some(url.to_string());

    monster
}
