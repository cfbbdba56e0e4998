//! Pattern parsers for the free-text fields found on stat blocks and
//! listing rows.
//!
//! Each parser is driven by one fixed grammar and converts a single field
//! value into a typed result, returning `None` when the expected pattern is
//! absent. None of them panic on malformed input; a miss simply leaves the
//! corresponding [`Monster`](crate::types::Monster) field empty.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::title_case;

static CHALLENGE_RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/?(\d*)").expect("valid challenge rating pattern"));

static CHALLENGE_RATING_AND_XP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)/?(\d*)\s*\(([0-9,]+)\s+XP\)").expect("valid challenge/XP pattern")
});

static MONSTER_TYPES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s+(\w+)(?:\s+\(([^)]+)\))?(?:,\s*(\w+(?:\s\w+)?))?")
        .expect("valid type descriptor pattern")
});

// The regex crate has no backreferences, so the quoted forms are spelled out
// instead of matching the opening quote again at the close.
static BACKGROUND_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^url\((?:"([^"]*)"|'([^']*)'|([^'"][^)]*))\)$"#)
        .expect("valid background url pattern")
});

/// A challenge rating together with its display text and XP award.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeRating {
    /// Display form of the rating, e.g. `"1/2"`.
    pub text: String,
    /// Numeric form of the rating, e.g. `0.5`.
    pub value: f64,
    /// XP award with thousands separators stripped.
    pub xp: u32,
}

/// The size/type/subtype/alignment descriptor from a stat-block header.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTypes {
    pub size: String,
    pub kind: String,
    pub subtype: Option<String>,
    pub alignment: Option<String>,
}

/// Parses a challenge rating such as `"10"` or `"1/4"` into its numeric form.
///
/// A fractional rating divides the first integer by the second. Returns
/// `None` when no leading integer is found.
///
/// # Examples
///
/// ```rust
/// use bestiary::patterns::parse_challenge_rating;
///
/// assert_eq!(parse_challenge_rating("1/4"), Some(0.25));
/// assert_eq!(parse_challenge_rating("10"), Some(10.0));
/// assert_eq!(parse_challenge_rating(""), None);
/// ```
pub fn parse_challenge_rating(text: &str) -> Option<f64> {
    let caps = CHALLENGE_RATING.captures(text)?;
    let mut value: f64 = caps[1].parse().ok()?;
    let denominator = &caps[2];
    if !denominator.is_empty() {
        value /= denominator.parse::<f64>().ok()?;
    }
    Some(value)
}

/// Parses a challenge rating followed by a parenthesized XP figure, e.g.
/// `"1/2 (100 XP)"` or `"5 (1,800 XP)"`.
///
/// The display text is reconstructed as `int[/int]` because the numeric
/// form loses the original formatting.
pub fn parse_challenge_rating_and_xp(text: &str) -> Option<ChallengeRating> {
    let caps = CHALLENGE_RATING_AND_XP.captures(text)?;
    let mut display = caps[1].to_string();
    let mut value: f64 = caps[1].parse().ok()?;
    let denominator = &caps[2];
    if !denominator.is_empty() {
        display.push('/');
        display.push_str(denominator);
        value /= denominator.parse::<f64>().ok()?;
    }
    let xp = caps[3].replace(',', "").parse().ok()?;
    Some(ChallengeRating {
        text: display,
        value,
        xp,
    })
}

/// Parses a type descriptor of the shape
/// `<size> <type> [(<subtype>)], <alignment>`.
///
/// Size and type are mandatory for a match; subtype and the one-or-two-word
/// alignment are optional. All captured segments are title-cased.
///
/// # Examples
///
/// ```rust
/// use bestiary::patterns::parse_monster_types;
///
/// let types = parse_monster_types("Large dragon (shapechanger), chaotic evil").unwrap();
/// assert_eq!(types.size, "Large");
/// assert_eq!(types.kind, "Dragon");
/// assert_eq!(types.subtype.as_deref(), Some("Shapechanger"));
/// assert_eq!(types.alignment.as_deref(), Some("Chaotic Evil"));
/// ```
pub fn parse_monster_types(text: &str) -> Option<MonsterTypes> {
    let caps = MONSTER_TYPES.captures(text)?;
    Some(MonsterTypes {
        size: title_case(&caps[1]),
        kind: title_case(&caps[2]),
        subtype: caps.get(3).map(|m| title_case(m.as_str())),
        alignment: caps.get(4).map(|m| title_case(m.as_str())),
    })
}

/// Extracts the quoted or unquoted URL argument from a CSS `url(...)` value.
///
/// # Examples
///
/// ```rust
/// use bestiary::patterns::parse_background_image_url;
///
/// assert_eq!(
///     parse_background_image_url(r#"url("https://example.com/icon.png")"#),
///     Some("https://example.com/icon.png".to_string()),
/// );
/// assert_eq!(parse_background_image_url("none"), None);
/// ```
pub fn parse_background_image_url(value: &str) -> Option<String> {
    let caps = BACKGROUND_URL.captures(value.trim())?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
}
