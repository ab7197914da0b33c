//! Locate the target phonics pattern inside a displayed word.
//!
//! # Example
//!
//! ```rust
//! use wildlitz_phonics::locate_pattern;
//!
//! let mask = locate_pattern("fire", "i_e");
//! assert_eq!(mask.as_slice(), &[false, true, false, true]);
//!
//! // Generic ids fall back to the whole category table.
//! assert_eq!(locate_pattern("stop", "blends").render_bracketed("stop"), "[st]op");
//! ```

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::highlight::HighlightMask;
use crate::pattern::ast::{LongSpelling, PatternId, Vowel};
use crate::pattern::matcher::{
    Occurrence, Word, find_any_vowel, find_consecutive, find_first_of, find_magic_e, find_vowel,
};
use crate::pattern::parser::parse;
use crate::pattern::tables::{
    BLENDS, DIGRAPHS, all_long_spellings, is_blend, is_digraph, long_spellings,
};

/// Keywords that mark an unrecognized id as a vowel pattern.
const VOWEL_KEYWORDS: &[&str] = &["vowel", "long", "short", "team", "magic", "silent"];

/// Compute the highlight mask for `pattern_id` in `word`.
///
/// Unknown or empty ids yield an all-false mask.
pub fn locate_pattern(word: &str, pattern_id: &str) -> HighlightMask {
    locate_parsed(word, &parse(pattern_id))
}

/// Like [`locate_pattern`] for an id that has already been classified.
pub fn locate_parsed(word: &str, pattern: &PatternId) -> HighlightMask {
    let mut mask = HighlightMask::for_word(word);
    let prepared = Word::new(word);
    match find_occurrence(&prepared, pattern) {
        Some(occurrence) => {
            trace!(word, ?pattern, ?occurrence, "pattern located");
            for idx in occurrence.indices() {
                mask.mark(idx);
            }
        }
        None => debug!(word, ?pattern, "no pattern occurrence"),
    }
    mask
}

/// Is character `index` of `word` part of the located pattern?
pub fn is_char_part_of_pattern(word: &str, pattern_id: &str, index: usize) -> bool {
    locate_pattern(word, pattern_id).is_highlighted(index)
}

fn find_occurrence(word: &Word, pattern: &PatternId) -> Option<Occurrence> {
    if word.is_empty() {
        return None;
    }
    match pattern {
        PatternId::Empty => None,
        PatternId::MagicE(vowel) => find_magic_e(word, *vowel).or_else(|| {
            trace!(%vowel, "magic-e template absent, trying related spellings");
            find_first_of(word, long_spellings(*vowel).iter().skip(1).copied())
        }),
        PatternId::LongVowel(spelling) => spelling
            .as_ref()
            .and_then(|s| find_long_spelling(word, s))
            .or_else(|| find_first_of(word, all_long_spellings())),
        PatternId::ShortVowel(Some(vowel)) => find_vowel(word, *vowel),
        PatternId::ShortVowel(None) => find_any_vowel(word),
        PatternId::Digraph(literal) => literal
            .as_deref()
            .and_then(|lit| find_consecutive(word, lit))
            .or_else(|| find_first_of(word, DIGRAPHS.iter().copied())),
        PatternId::Blend(literal) => literal
            .as_deref()
            .and_then(|lit| find_consecutive(word, lit))
            .or_else(|| find_first_of(word, BLENDS.iter().copied())),
        PatternId::Unrecognized(id) => find_literal_id(word, id).or_else(|| {
            debug!(id = id.as_str(), "falling back to category search");
            find_by_category(word, id)
        }),
    }
}

fn find_long_spelling(word: &Word, spelling: &LongSpelling) -> Option<Occurrence> {
    match spelling {
        LongSpelling::Family(vowel) => find_first_of(word, long_spellings(*vowel).iter().copied()),
        LongSpelling::Team(team) => find_consecutive(word, team),
    }
}

/// The whole id, then its last `_` segment (`r_controlled_ar` -> `ar`).
fn find_literal_id(word: &Word, id: &str) -> Option<Occurrence> {
    find_consecutive(word, id).or_else(|| {
        id.rsplit_once('_')
            .map(|(_, tail)| tail)
            .filter(|tail| !tail.is_empty())
            .and_then(|tail| find_consecutive(word, tail))
    })
}

/// Heuristic classes for ids no prefix recognized.
#[derive(Debug, Default, PartialEq)]
struct Classes {
    vowel: bool,
    digraph: bool,
    blend: bool,
}

fn classify(id: &str) -> Classes {
    let letters_only = id.chars().all(|ch| ch.is_ascii_alphabetic());
    Classes {
        vowel: VOWEL_KEYWORDS.iter().any(|kw| id.contains(kw))
            || (letters_only && id.chars().all(|ch| Vowel::from_char(ch).is_some())),
        digraph: id.contains("digraph") || is_digraph(id),
        blend: id.contains("blend") || is_blend(id),
    }
}

/// The vowel an id names as one of its `_` segments (`short_a_sound` -> `a`).
fn named_vowel(id: &str) -> Option<Vowel> {
    id.split('_').find_map(|segment| {
        let mut chars = segment.chars();
        match (chars.next().and_then(Vowel::from_char), chars.next()) {
            (Some(v), None) => Some(v),
            _ => None,
        }
    })
}

/// Search only the tables belonging to the id's classes.
///
/// A vowel-ish id mentioning `short` looks for its named vowel letter before
/// any long spelling.
fn find_by_category(word: &Word, id: &str) -> Option<Occurrence> {
    let classes = classify(id);
    trace!(id, ?classes, "classified unrecognized id");
    let named = named_vowel(id);
    let named_letter = || named.and_then(|v| find_vowel(word, v));
    let vowel = || {
        id.contains("short")
            .then(named_letter)
            .flatten()
            .or_else(|| find_first_of(word, all_long_spellings()))
            .or_else(named_letter)
    };
    let digraph = || find_first_of(word, DIGRAPHS.iter().copied());
    let blend = || find_first_of(word, BLENDS.iter().copied());

    classes
        .vowel
        .then(vowel)
        .flatten()
        .or_else(|| classes.digraph.then(digraph).flatten())
        .or_else(|| classes.blend.then(blend).flatten())
}

/// Cached masks kept by [`Locator::new`] before the cache is dropped.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Memoizes masks by `(word, pattern id)` for render loops that ask about
/// the same word on every frame.
///
/// The cache is bounded: once it holds `capacity` masks, the next new key
/// empties it before being inserted.
#[derive(Debug)]
pub struct Locator {
    cache: HashMap<(String, String), HighlightMask>,
    capacity: usize,
}

impl Default for Locator {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl Locator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A locator holding at most `capacity` masks (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn locate(&mut self, word: &str, pattern_id: &str) -> &HighlightMask {
        let key = (word.to_string(), pattern_id.to_string());
        if self.cache.len() >= self.capacity && !self.cache.contains_key(&key) {
            debug!(capacity = self.capacity, "highlight cache full, clearing");
            self.cache.clear();
        }
        self.cache
            .entry(key)
            .or_insert_with(|| locate_pattern(word, pattern_id))
    }

    pub fn is_char_part_of_pattern(&mut self, word: &str, pattern_id: &str, index: usize) -> bool {
        self.locate(word, pattern_id).is_highlighted(index)
    }

    /// Number of cached masks.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
