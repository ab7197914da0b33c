//! Primitive searches over a displayed word.
//!
//! All positions are **character** (not byte) indices into the word as
//! displayed, spaces included.

use super::ast::Vowel;
use super::tables::magic_e_vowel;

/// A word prepared for matching: one case-folded char per display char.
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().map(|ch| ch.to_ascii_lowercase()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Where a pattern was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occurrence {
    /// Contiguous run `start..end`.
    Span { start: usize, end: usize },
    /// Vowel and silent `e`. The letter between them is not part of it.
    MagicE { vowel: usize, e: usize },
}

impl Occurrence {
    fn single(idx: usize) -> Self {
        Occurrence::Span {
            start: idx,
            end: idx + 1,
        }
    }

    /// Character indices covered by this occurrence.
    pub fn indices(&self) -> Vec<usize> {
        match *self {
            Occurrence::Span { start, end } => (start..end).collect(),
            Occurrence::MagicE { vowel, e } => vec![vowel, e],
        }
    }
}

/// First case-insensitive occurrence of `literal` as a consecutive run.
///
/// Literals containing whitespace never match, so a span can never cover
/// a space.
pub fn find_consecutive(word: &Word, literal: &str) -> Option<Occurrence> {
    let needle: Vec<char> = literal.chars().map(|ch| ch.to_ascii_lowercase()).collect();
    if needle.is_empty() || needle.iter().any(|ch| ch.is_whitespace()) {
        return None;
    }
    let start = word
        .chars
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    Some(Occurrence::Span {
        start,
        end: start + needle.len(),
    })
}

/// First `vowel + letter + e` window. The middle must be a letter.
pub fn find_magic_e(word: &Word, vowel: Vowel) -> Option<Occurrence> {
    let v = vowel.as_char();
    let start = word
        .chars
        .windows(3)
        .position(|w| w[0] == v && w[1].is_alphabetic() && w[2] == 'e')?;
    Some(Occurrence::MagicE {
        vowel: start,
        e: start + 2,
    })
}

/// Locate one table spelling; `_e` entries use the magic-e template.
pub fn find_spelling(word: &Word, spelling: &str) -> Option<Occurrence> {
    match magic_e_vowel(spelling) {
        Some(vowel) => find_magic_e(word, vowel),
        None => find_consecutive(word, spelling),
    }
}

/// Try each spelling in order and return the first one present.
///
/// Table order wins over position: an earlier entry found late in the
/// word beats a later entry found early.
pub fn find_first_of<'a, I>(word: &Word, spellings: I) -> Option<Occurrence>
where
    I: IntoIterator<Item = &'a str>,
{
    spellings
        .into_iter()
        .find_map(|spelling| find_spelling(word, spelling))
}

/// First occurrence of a single vowel letter.
pub fn find_vowel(word: &Word, vowel: Vowel) -> Option<Occurrence> {
    let v = vowel.as_char();
    word.chars.iter().position(|&ch| ch == v).map(Occurrence::single)
}

/// First occurrence of any vowel letter.
pub fn find_any_vowel(word: &Word) -> Option<Occurrence> {
    word.chars
        .iter()
        .position(|&ch| Vowel::from_char(ch).is_some())
        .map(Occurrence::single)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consecutive(word: &str, literal: &str) -> Option<Vec<usize>> {
        find_consecutive(&Word::new(word), literal).map(|o| o.indices())
    }

    fn magic(word: &str, vowel: Vowel) -> Option<Vec<usize>> {
        find_magic_e(&Word::new(word), vowel).map(|o| o.indices())
    }

    // --- Consecutive ---

    #[test]
    fn consecutive_at_start() {
        assert_eq!(consecutive("ship", "sh"), Some(vec![0, 1]));
    }

    #[test]
    fn consecutive_case_folded() {
        assert_eq!(consecutive("SHip", "sh"), Some(vec![0, 1]));
        assert_eq!(consecutive("ship", "SH"), Some(vec![0, 1]));
    }

    #[test]
    fn consecutive_first_occurrence_only() {
        assert_eq!(consecutive("shush", "sh"), Some(vec![0, 1]));
    }

    #[test]
    fn consecutive_no_match() {
        assert_eq!(consecutive("cat", "sh"), None);
    }

    #[test]
    fn consecutive_never_spans_a_space() {
        assert_eq!(consecutive("bus hop", "s h"), None);
        assert_eq!(consecutive("bus hop", "sh"), None);
    }

    #[test]
    fn consecutive_empty_literal() {
        assert_eq!(consecutive("cat", ""), None);
    }

    #[test]
    fn consecutive_literal_longer_than_word() {
        assert_eq!(consecutive("at", "tch"), None);
    }

    #[test]
    fn consecutive_counts_chars_not_bytes() {
        assert_eq!(consecutive("café shop", "sh"), Some(vec![5, 6]));
    }

    // --- Magic-e ---

    #[test]
    fn magic_e_skips_middle_letter() {
        assert_eq!(magic("fire", Vowel::I), Some(vec![1, 3]));
    }

    #[test]
    fn magic_e_requires_letter_in_middle() {
        assert_eq!(magic("a e", Vowel::A), None);
    }

    #[test]
    fn magic_e_wrong_vowel() {
        assert_eq!(magic("cake", Vowel::O), None);
    }

    #[test]
    fn magic_e_in_phrase() {
        assert_eq!(magic("the bike", Vowel::I), Some(vec![5, 7]));
    }

    // --- Tables ---

    #[test]
    fn first_of_follows_table_order() {
        let word = Word::new("chip shop");
        let found = find_first_of(&word, ["sh", "ch"]).map(|o| o.indices());
        assert_eq!(found, Some(vec![5, 6]));
    }

    #[test]
    fn spelling_dispatches_magic_e() {
        let word = Word::new("home");
        assert_eq!(
            find_spelling(&word, "o_e"),
            Some(Occurrence::MagicE { vowel: 1, e: 3 })
        );
        assert_eq!(find_spelling(&word, "oa"), None);
    }

    // --- Vowels ---

    #[test]
    fn single_vowel() {
        let word = Word::new("Cat");
        assert_eq!(find_vowel(&word, Vowel::A).map(|o| o.indices()), Some(vec![1]));
        assert_eq!(find_vowel(&word, Vowel::E), None);
    }

    #[test]
    fn any_vowel() {
        assert_eq!(
            find_any_vowel(&Word::new("strip")).map(|o| o.indices()),
            Some(vec![3])
        );
        assert_eq!(find_any_vowel(&Word::new("shh")), None);
    }
}
