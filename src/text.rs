//! Text normalizers applied to every value read out of a document.
//!
//! Source pages carry human-authored text with stray whitespace, mixed
//! casing and relative URLs. These helpers normalize such values before they
//! are stored on a [`Monster`](crate::types::Monster).

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Trims a value and collapses internal whitespace runs to a single space.
///
/// Empty or whitespace-only input yields `None`, so an absent field and a
/// blank field look the same to callers.
///
/// # Examples
///
/// ```rust
/// use bestiary::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Dire \n  Wolf "), Some("Dire Wolf".to_string()));
/// assert_eq!(normalize_whitespace("   "), None);
/// ```
pub fn normalize_whitespace(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Capitalizes the first letter of every word token and lowercases the rest.
///
/// Non-word characters pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use bestiary::text::title_case;
///
/// assert_eq!(title_case("chaotic EVIL"), "Chaotic Evil");
/// assert_eq!(title_case("will-o'-wisp"), "Will-O'-Wisp");
/// ```
pub fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &regex::Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
            None => String::new(),
        }
    })
    .into_owned()
}

/// Parses a float out of noisy numeric text.
///
/// All whitespace is stripped before parsing. Returns `None` for empty or
/// non-numeric input, so callers never see NaN.
pub fn parse_loose_float(text: &str) -> Option<f64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Resolves a possibly relative URL against an origin.
///
/// A value containing a scheme separator is already absolute and is returned
/// unchanged; anything else is prefixed with the origin, inserting a path
/// separator unless the value already begins with one.
///
/// # Examples
///
/// ```rust
/// use bestiary::text::resolve_url;
///
/// assert_eq!(
///     resolve_url("/monsters/1", "https://example.com"),
///     Some("https://example.com/monsters/1".to_string()),
/// );
/// assert_eq!(
///     resolve_url("https://other.com/x", "https://example.com"),
///     Some("https://other.com/x".to_string()),
/// );
/// assert_eq!(resolve_url("", "https://example.com"), None);
/// ```
pub fn resolve_url(url: &str, origin: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }
    if url.contains(':') {
        return Some(url.to_string());
    }
    if url.starts_with('/') {
        Some(format!("{origin}{url}"))
    } else {
        Some(format!("{origin}/{url}"))
    }
}
