//! Core data types for monsters, content sources, and discovery results.
//!
//! [`Monster`] is the canonical aggregate record assembled by every
//! extraction pathway. All of its fields are optional: each pathway
//! populates whatever the source page shape exposes and leaves the rest
//! `None`. Records are created fresh per extraction and never shared
//! across calls.

use serde::{Deserialize, Serialize};

use crate::dice::Dice;

/// A creature or character record assembled from one source page.
///
/// Any field may be absent; which fields are populated depends on the page
/// shape the record was extracted from (search row, stat block, encounter
/// listing, character profile, homebrew listing).
///
/// # Examples
///
/// ```rust
/// use bestiary::types::Monster;
///
/// let monster = Monster {
///     name: Some("Goblin".to_string()),
///     source: Some("Basic Rules".to_string()),
///     challenge_rating: Some(0.25),
///     challenge_rating_string: Some("1/4".to_string()),
///     ..Default::default()
/// };
/// assert!(monster.matches_query("gob"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Creature name, whitespace-normalized.
    pub name: Option<String>,

    /// Display name of the content source the creature belongs to.
    pub source: Option<String>,

    /// Numeric challenge rating; fractional ratings like "1/4" become 0.25.
    pub challenge_rating: Option<f64>,

    /// Original challenge rating display text, kept because the numeric
    /// form loses formatting.
    pub challenge_rating_string: Option<String>,

    /// Creature type, e.g. "Humanoid".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Creature subtype, e.g. "Goblinoid".
    pub subtype: Option<String>,

    /// Size category, e.g. "Small".
    pub size: Option<String>,

    /// Alignment, e.g. "Neutral Evil".
    pub alignment: Option<String>,

    /// Comma-joined environment list.
    pub environment: Option<String>,

    /// Absolute URL of the small avatar icon.
    pub avatar_icon_url: Option<String>,

    /// Absolute URL of the large image.
    pub large_image_url: Option<String>,

    /// Absolute URL of the creature's detail page.
    pub details_page_url: Option<String>,

    /// Hit points as a dice expression.
    pub hp: Option<Dice>,

    /// XP award or accumulated XP.
    pub xp: Option<u32>,

    /// Opaque theme color, only present on player characters.
    pub theme_color: Option<String>,
}

impl Monster {
    /// Case-insensitive substring match of `query` against every textual
    /// field, used to fold discovered homebrew into search results.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.text_fields()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            &self.name,
            &self.source,
            &self.challenge_rating_string,
            &self.kind,
            &self.subtype,
            &self.size,
            &self.alignment,
            &self.environment,
            &self.avatar_icon_url,
            &self.large_image_url,
            &self.details_page_url,
            &self.theme_color,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
    }
}

/// One purchasable content source (a licensed book or bundle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Site-assigned source identifier, used as a search filter value.
    pub id: String,

    /// Display name of the source.
    pub name: String,

    /// Whether the source is available to the current account. See
    /// [`DndBeyondClient::is_source_purchased`](crate::client::DndBeyondClient::is_source_purchased)
    /// for how this is currently determined.
    #[serde(default)]
    pub purchased: bool,
}

/// One monster row of an encounter listing, with its multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterEntry {
    pub monster: Monster,
    /// Parsed from a leading "×N" marker; 1 when absent or non-numeric.
    pub quantity: u32,
}

/// The merged result of one content discovery run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveredContent {
    /// Every source offered by the site's search filter.
    pub sources: Vec<Source>,

    /// Lightweight stubs for the user's homebrew creations.
    pub homebrew: Vec<Monster>,
}
