//! Classifier for phonics pattern identifiers.
//!
//! Identifiers arrive from the word-generation service as loose strings
//! (`short_a`, `digraph_sh`, `blends`, `i_e`, ...). [`parse`] turns them
//! into a [`PatternId`] once so the locator can `match` on the category.

use super::ast::*;
use super::tables::magic_e_vowel;

/// Category prefixes, longest first so `vowel_teams_` wins over `vowel_team_`.
const PREFIXES: &[(&str, Category)] = &[
    ("consonant_blends_", Category::Blend),
    ("consonant_blend_", Category::Blend),
    ("vowel_teams_", Category::LongVowel),
    ("vowel_team_", Category::LongVowel),
    ("digraphs_", Category::Digraph),
    ("digraph_", Category::Digraph),
    ("silent_e_", Category::MagicE),
    ("magic_e_", Category::MagicE),
    ("blends_", Category::Blend),
    ("blend_", Category::Blend),
    ("short_", Category::ShortVowel),
    ("long_", Category::LongVowel),
];

/// Bare category names that carry no literal.
const GENERIC_NAMES: &[(&str, Category)] = &[
    ("short_vowels", Category::ShortVowel),
    ("short_vowel", Category::ShortVowel),
    ("short", Category::ShortVowel),
    ("long_vowels", Category::LongVowel),
    ("long_vowel", Category::LongVowel),
    ("long", Category::LongVowel),
    ("vowel_teams", Category::LongVowel),
    ("vowel_team", Category::LongVowel),
    ("digraphs", Category::Digraph),
    ("digraph", Category::Digraph),
    ("consonant_blends", Category::Blend),
    ("consonant_blend", Category::Blend),
    ("blends", Category::Blend),
    ("blend", Category::Blend),
    ("magic_e", Category::LongVowel),
    ("silent_e", Category::LongVowel),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Category {
    MagicE,
    LongVowel,
    ShortVowel,
    Digraph,
    Blend,
}

/// Classify a raw pattern identifier.
///
/// Never fails: anything without a known prefix becomes
/// [`PatternId::Unrecognized`].
pub fn parse(raw: &str) -> PatternId {
    let id = raw.trim().to_ascii_lowercase();
    if id.is_empty() {
        return PatternId::Empty;
    }
    if let Some(vowel) = magic_e_vowel(&id) {
        return PatternId::MagicE(vowel);
    }
    if let Some(&(_, category)) = GENERIC_NAMES.iter().find(|(name, _)| *name == id) {
        return generic(category);
    }
    match PREFIXES
        .iter()
        .find_map(|&(prefix, category)| id.strip_prefix(prefix).map(|rest| (category, rest)))
    {
        Some((category, rest)) => specific(category, rest),
        None => PatternId::Unrecognized(id),
    }
}

fn generic(category: Category) -> PatternId {
    match category {
        Category::MagicE | Category::LongVowel => PatternId::LongVowel(None),
        Category::ShortVowel => PatternId::ShortVowel(None),
        Category::Digraph => PatternId::Digraph(None),
        Category::Blend => PatternId::Blend(None),
    }
}

/// Build the specific form from the text after a category prefix.
fn specific(category: Category, rest: &str) -> PatternId {
    if is_category_word(rest) {
        return generic(category);
    }
    let single_vowel = single_vowel(rest);
    // `long_a_e`, `magic_e_o_e`. Other categories keep their own tables.
    let magic_e = magic_e_vowel(rest);
    match (category, magic_e) {
        (Category::MagicE | Category::LongVowel, Some(vowel)) => PatternId::MagicE(vowel),
        (Category::MagicE, None) => match single_vowel {
            Some(vowel) => PatternId::MagicE(vowel),
            None => PatternId::LongVowel(Some(LongSpelling::Team(rest.to_string()))),
        },
        (Category::LongVowel, None) => PatternId::LongVowel(Some(match single_vowel {
            Some(vowel) => LongSpelling::Family(vowel),
            None => LongSpelling::Team(rest.to_string()),
        })),
        // `short_a_e` still asks for the short vowel only.
        (Category::ShortVowel, _) => match single_vowel.or(magic_e) {
            Some(vowel) => PatternId::ShortVowel(Some(vowel)),
            // `short_xyz` names no vowel; keep the literal for the fallback path.
            None => PatternId::Unrecognized(format!("short_{rest}")),
        },
        (Category::Digraph, _) => PatternId::Digraph(Some(rest.to_string())),
        (Category::Blend, _) => PatternId::Blend(Some(rest.to_string())),
    }
}

/// True when `rest` only restates the category (`vowels`, `vowel_sounds`).
fn is_category_word(rest: &str) -> bool {
    rest.split('_').all(|word| {
        matches!(
            word,
            "" | "vowel" | "vowels" | "sound" | "sounds" | "pattern" | "patterns"
        )
    })
}

fn single_vowel(s: &str) -> Option<Vowel> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Vowel::from_char(ch),
        _ => None,
    }
}
