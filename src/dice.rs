//! Dice expressions parsed out of hit-point fields.
//!
//! Hit points appear on source pages in anything from a bare number (`"8"`)
//! to a full formula (`"45 (7d8 + 14)"`). [`Dice`] partitions whichever
//! numeric tokens are present into their semantic slots and derives the
//! min/max bounds plus one sampled roll.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{normalize_whitespace, parse_loose_float};

// Every component is optional: a literal default value, an opening
// parenthesis, a dice count, the `d` separator, the sides, and a flat bonus.
// Position and punctuation decide which slot a numeric token lands in.
static DICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\b)?(\s\()?(\d+)?(\s*d\s*)?(\d+)?(\s*\+\s*(\d+))?").expect("valid dice pattern")
});

/// A dice expression of the form `N`d`S`+`B`, immutable once constructed.
///
/// Any component may be absent. When the text encodes a bare number instead
/// of dice notation, that number lands in `default_value` and stands in for
/// the bonus so the min/max bounds still reflect it.
///
/// # Examples
///
/// ```rust
/// use bestiary::dice::Dice;
///
/// let dice = Dice::parse("2d6+3");
/// assert_eq!(dice.count, Some(2));
/// assert_eq!(dice.sides, Some(6));
/// assert_eq!(dice.bonus, Some(3));
/// assert_eq!(dice.min_value, 5);
/// assert_eq!(dice.max_value, 15);
///
/// let flat = Dice::parse("8");
/// assert_eq!(flat.count, None);
/// assert_eq!(flat.default_value, Some(8));
/// assert_eq!(flat.min_value, 8);
/// assert_eq!(flat.max_value, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dice {
    /// Number of dice rolled.
    pub count: Option<u32>,
    /// Faces per die.
    pub sides: Option<u32>,
    /// Flat bonus added to every roll.
    pub bonus: Option<u32>,
    /// Literal fallback when the text was a bare number, not a formula.
    pub default_value: Option<u32>,
    /// Smallest possible roll.
    pub min_value: u32,
    /// Largest possible roll.
    pub max_value: u32,
    /// One sample taken at construction time.
    pub random_value: u32,
}

impl Dice {
    /// Parses a dice expression from one formatted string.
    ///
    /// Never fails: tokens that are absent simply leave their slots `None`,
    /// and wholly non-numeric input yields an all-empty expression with
    /// zero bounds.
    pub fn parse(text: &str) -> Self {
        let normalized = normalize_whitespace(text).unwrap_or_default();
        let caps = DICE.captures(&normalized);
        let capture = |index: usize| {
            caps.as_ref()
                .and_then(|c| c.get(index))
                .and_then(|m| parse_loose_float(m.as_str()))
                .map(|v| v as u32)
        };

        let count = capture(3);
        let sides = capture(5);
        let mut bonus = capture(7);
        let default_value = capture(1);

        let (min_base, max_base) = match (count, sides) {
            (Some(count), Some(sides)) => (count, count * sides),
            _ => {
                // Not a formula; the literal number stands in for the bonus.
                if bonus.is_none() {
                    bonus = default_value;
                }
                (0, 0)
            }
        };

        let mut dice = Dice {
            count,
            sides,
            bonus,
            default_value,
            min_value: min_base + bonus.unwrap_or(0),
            max_value: max_base + bonus.unwrap_or(0),
            random_value: 0,
        };
        dice.random_value = dice.roll();
        dice
    }

    /// Builds a dice expression for a flat literal value, as used for
    /// hit points given as a plain number.
    pub fn flat(value: u32) -> Self {
        Self::parse(&value.to_string())
    }

    /// Rolls the expression once: `count` uniform draws over `[1, sides]`,
    /// summed, plus the bonus.
    pub fn roll(&self) -> u32 {
        self.roll_with(1, false)
    }

    /// Rolls with a multiplier applied to the per-die total before the flat
    /// bonus is added. When `maxed` is set, every die contributes its
    /// maximum face value, making the result deterministic.
    pub fn roll_with(&self, multiplier: u32, maxed: bool) -> u32 {
        let mut total = 0;
        if let (Some(count), Some(sides)) = (self.count, self.sides) {
            if sides > 0 {
                for _ in 0..count {
                    total += if maxed { sides } else { fastrand::u32(1..=sides) };
                }
            }
        }
        total * multiplier + self.bonus.unwrap_or(0)
    }
}
