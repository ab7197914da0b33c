//! Fixed phonics tables.
//!
//! Digraph and blend sets are ordered longest first so that a scan in
//! table order prefers `tch` over `ch` and `str` over `st`.

use phf::{OrderedSet, phf_ordered_set};

use super::ast::Vowel;

/// Every digraph, 3-letter entries first.
pub const DIGRAPHS: OrderedSet<&'static str> = phf_ordered_set! {
    "tch", "dge",
    "sh", "ch", "th", "wh", "ph", "ck", "ng", "kn", "wr",
};

/// Every blend: 3-letter, then beginning blends, then ending blends.
/// `st` and `sk` appear once and serve both positions.
pub const BLENDS: OrderedSet<&'static str> = phf_ordered_set! {
    "spr", "str", "scr", "spl", "squ", "thr",
    "bl", "cl", "fl", "gl", "pl", "sl",
    "br", "cr", "dr", "fr", "gr", "pr", "tr",
    "sc", "sk", "sm", "sn", "sp", "st", "sw", "tw",
    "nd", "nt", "mp", "lt", "ft", "lk", "lp", "nk", "ld", "pt", "ct",
};

/// Long-vowel spellings for `vowel`, magic-e form first.
pub fn long_spellings(vowel: Vowel) -> &'static [&'static str] {
    match vowel {
        Vowel::A => &["a_e", "ai", "ay", "eigh"],
        Vowel::E => &["e_e", "ee", "ea", "ey", "ie"],
        Vowel::I => &["i_e", "igh", "ie"],
        Vowel::O => &["o_e", "oa", "ow", "oe"],
        Vowel::U => &["u_e", "ue", "ew"],
    }
}

/// Long-vowel spellings of every vowel, in a, e, i, o, u order.
pub fn all_long_spellings() -> impl Iterator<Item = &'static str> {
    Vowel::ALL
        .into_iter()
        .flat_map(|v| long_spellings(v).iter().copied())
}

pub fn is_digraph(s: &str) -> bool {
    DIGRAPHS.contains(s)
}

pub fn is_blend(s: &str) -> bool {
    BLENDS.contains(s)
}

pub fn is_vowel(ch: char) -> bool {
    Vowel::from_char(ch).is_some()
}

/// Splits a magic-e table entry such as `a_e` into its vowel.
pub fn magic_e_vowel(spelling: &str) -> Option<Vowel> {
    let mut chars = spelling.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(v), Some('_'), Some('e'), None) => Vowel::from_char(v),
        _ => None,
    }
}
