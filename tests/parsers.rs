//! Unit tests for the text normalizers, pattern parsers, and dice model.

use bestiary::dice::Dice;
use bestiary::patterns::{
    parse_background_image_url, parse_challenge_rating, parse_challenge_rating_and_xp,
    parse_monster_types,
};
use bestiary::text::{normalize_whitespace, parse_loose_float, resolve_url, title_case};

#[test]
fn test_normalize_whitespace() {
    assert_eq!(
        normalize_whitespace("  Dire \t\n Wolf  "),
        Some("Dire Wolf".to_string())
    );
    assert_eq!(normalize_whitespace("Goblin"), Some("Goblin".to_string()));
    assert_eq!(normalize_whitespace(""), None);
    assert_eq!(normalize_whitespace("   \n\t "), None);
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("chaotic evil"), "Chaotic Evil");
    assert_eq!(title_case("DRAGON"), "Dragon");
    assert_eq!(title_case("will-o'-wisp"), "Will-O'-Wisp");
    assert_eq!(title_case(""), "");
}

#[test]
fn test_parse_loose_float() {
    assert_eq!(parse_loose_float("3.5"), Some(3.5));
    assert_eq!(parse_loose_float(" 1 4 "), Some(14.0));
    assert_eq!(parse_loose_float(""), None);
    assert_eq!(parse_loose_float("abc"), None);
}

#[test]
fn test_resolve_url() {
    assert_eq!(
        resolve_url("/monsters/1", "https://example.com"),
        Some("https://example.com/monsters/1".to_string())
    );
    assert_eq!(
        resolve_url("monsters/1", "https://example.com"),
        Some("https://example.com/monsters/1".to_string())
    );
    assert_eq!(
        resolve_url("https://cdn.example.com/a.png", "https://example.com"),
        Some("https://cdn.example.com/a.png".to_string())
    );
    assert_eq!(resolve_url("", "https://example.com"), None);
}

#[test]
fn test_challenge_rating_fraction() {
    assert_eq!(parse_challenge_rating("1/4"), Some(0.25));
    assert_eq!(parse_challenge_rating("1/2"), Some(0.5));
}

#[test]
fn test_challenge_rating_whole() {
    assert_eq!(parse_challenge_rating("10"), Some(10.0));
    assert_eq!(parse_challenge_rating("CR 5"), Some(5.0));
}

#[test]
fn test_challenge_rating_no_match() {
    assert_eq!(parse_challenge_rating(""), None);
    assert_eq!(parse_challenge_rating("unknown"), None);
}

#[test]
fn test_challenge_rating_and_xp_fraction() {
    let challenge = parse_challenge_rating_and_xp("1/2 (100 XP)").unwrap();
    assert_eq!(challenge.text, "1/2");
    assert_eq!(challenge.value, 0.5);
    assert_eq!(challenge.xp, 100);
}

#[test]
fn test_challenge_rating_and_xp_thousands() {
    let challenge = parse_challenge_rating_and_xp("5 (1,800 XP)").unwrap();
    assert_eq!(challenge.text, "5");
    assert_eq!(challenge.value, 5.0);
    assert_eq!(challenge.xp, 1800);
}

#[test]
fn test_challenge_rating_and_xp_no_match() {
    assert_eq!(parse_challenge_rating_and_xp("5"), None);
    assert_eq!(parse_challenge_rating_and_xp(""), None);
}

#[test]
fn test_monster_types_full() {
    let types = parse_monster_types("Large dragon (shapechanger), chaotic evil").unwrap();
    assert_eq!(types.size, "Large");
    assert_eq!(types.kind, "Dragon");
    assert_eq!(types.subtype.as_deref(), Some("Shapechanger"));
    assert_eq!(types.alignment.as_deref(), Some("Chaotic Evil"));
}

#[test]
fn test_monster_types_no_subtype() {
    let types = parse_monster_types("Medium humanoid, lawful good").unwrap();
    assert_eq!(types.size, "Medium");
    assert_eq!(types.kind, "Humanoid");
    assert_eq!(types.subtype, None);
    assert_eq!(types.alignment.as_deref(), Some("Lawful Good"));
}

#[test]
fn test_monster_types_single_word_alignment() {
    let types = parse_monster_types("Small fey, unaligned").unwrap();
    assert_eq!(types.size, "Small");
    assert_eq!(types.kind, "Fey");
    assert_eq!(types.alignment.as_deref(), Some("Unaligned"));
}

#[test]
fn test_monster_types_no_match() {
    assert_eq!(parse_monster_types(""), None);
    assert_eq!(parse_monster_types("Dragon"), None);
}

#[test]
fn test_background_image_url() {
    assert_eq!(
        parse_background_image_url(r#"url("https://example.com/icon.png")"#),
        Some("https://example.com/icon.png".to_string())
    );
    assert_eq!(
        parse_background_image_url("url('/avatars/goblin.png')"),
        Some("/avatars/goblin.png".to_string())
    );
    assert_eq!(
        parse_background_image_url("url(/avatars/goblin.png)"),
        Some("/avatars/goblin.png".to_string())
    );
    assert_eq!(parse_background_image_url("none"), None);
    assert_eq!(parse_background_image_url(""), None);
}

#[test]
fn test_dice_flat_value() {
    let dice = Dice::parse("8");
    assert_eq!(dice.count, None);
    assert_eq!(dice.sides, None);
    assert_eq!(dice.default_value, Some(8));
    // The literal stands in for the bonus so the bounds reflect it.
    assert_eq!(dice.bonus, Some(8));
    assert_eq!(dice.min_value, 8);
    assert_eq!(dice.max_value, 8);
    assert_eq!(dice.random_value, 8);
}

#[test]
fn test_dice_formula() {
    let dice = Dice::parse("2d6+3");
    assert_eq!(dice.count, Some(2));
    assert_eq!(dice.sides, Some(6));
    assert_eq!(dice.bonus, Some(3));
    assert_eq!(dice.default_value, None);
    assert_eq!(dice.min_value, 5);
    assert_eq!(dice.max_value, 15);
}

#[test]
fn test_dice_literal_with_formula() {
    let dice = Dice::parse("178 (17d10 + 85)");
    assert_eq!(dice.default_value, Some(178));
    assert_eq!(dice.count, Some(17));
    assert_eq!(dice.sides, Some(10));
    assert_eq!(dice.bonus, Some(85));
    assert_eq!(dice.min_value, 102);
    assert_eq!(dice.max_value, 255);
}

#[test]
fn test_dice_empty_input() {
    let dice = Dice::parse("");
    assert_eq!(dice.count, None);
    assert_eq!(dice.sides, None);
    assert_eq!(dice.bonus, None);
    assert_eq!(dice.min_value, 0);
    assert_eq!(dice.max_value, 0);
    assert_eq!(dice.roll(), 0);
}

#[test]
fn test_dice_roll_bounds() {
    let dice = Dice::parse("2d6+3");
    for _ in 0..100 {
        let roll = dice.roll();
        assert!((5..=15).contains(&roll), "roll {roll} out of bounds");
    }
    assert!((5..=15).contains(&dice.random_value));
}

#[test]
fn test_dice_roll_maxed_is_deterministic() {
    let dice = Dice::parse("2d6+3");
    for _ in 0..10 {
        assert_eq!(dice.roll_with(1, true), 15);
    }
}

#[test]
fn test_dice_roll_multiplier() {
    let dice = Dice::parse("2d6+3");
    // The multiplier scales the dice total; the bonus is added afterwards.
    assert_eq!(dice.roll_with(2, true), 27);
    assert_eq!(dice.roll_with(0, true), 3);
}

#[test]
fn test_dice_flat_constructor() {
    let dice = Dice::flat(1);
    assert_eq!(dice.min_value, 1);
    assert_eq!(dice.max_value, 1);
    assert_eq!(dice.roll(), 1);
}
