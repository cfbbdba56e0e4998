//! Extraction for player-character profile JSON.
//!
//! Character profiles are the one page shape fetched as JSON rather than
//! markup: the document maps directly onto typed structs and the pathway
//! reads fields instead of running selectors.

use serde::Deserialize;
use serde_json::Value;

use crate::dice::Dice;
use crate::error::Result;
use crate::types::Monster;

/// Envelope of the character-profile JSON endpoint.
#[derive(Debug, Deserialize)]
pub struct CharacterEnvelope {
    pub character: CharacterProfile,
}

/// The subset of the character profile the extraction cares about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub name: Option<String>,
    pub base_hit_points: Option<u32>,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    pub current_xp: Option<u32>,
    pub race: Option<CharacterRace>,
    pub avatar_url: Option<String>,
    pub frame_avatar_url: Option<String>,
    pub theme_color: Option<ThemeColor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub level: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRace {
    pub base_name: Option<String>,
    pub full_name: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColor {
    pub theme_color: Option<String>,
}

/// Maps a character-profile JSON document onto a [`Monster`].
///
/// `url` is the profile page the caller asked for, recorded as the details
/// URL (the `/json` suffix is a fetch concern, not part of the record).
pub fn extract_character(document: &Value, url: &str) -> Result<Monster> {
    let envelope: CharacterEnvelope = serde_json::from_value(document.clone())?;
    let character = envelope.character;
    let mut monster = Monster::default();

    monster.name = character.name;
    monster.source = Some("Player Character".to_string());
    monster.hp = character.base_hit_points.map(Dice::flat);

    // A character's stand-in challenge rating is the sum of its class levels.
    let total_level: u32 = character.classes.iter().map(|class| class.level).sum();
    monster.challenge_rating = Some(f64::from(total_level));

    monster.xp = character.current_xp;
    if let Some(race) = character.race {
        monster.kind = race.base_name;
        monster.subtype = race.full_name;
        monster.size = race.size;
    }

    // The two avatar fields fall back to each other; the site often leaves
    // one of them empty.
    let avatar = character.avatar_url.filter(|u| !u.is_empty());
    let frame = character.frame_avatar_url.filter(|u| !u.is_empty());
    monster.large_image_url = avatar.clone().or_else(|| frame.clone());
    monster.avatar_icon_url = frame.or(avatar);

    monster.details_page_url = Some(url.to_string());
    monster.theme_color = character.theme_color.and_then(|theme| theme.theme_color);

    Ok(monster)
}
