//! Parsed phonics pattern identifiers.

use std::fmt;

/// One of the five vowel letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    E,
    I,
    O,
    U,
}

impl Vowel {
    /// All vowels in table-scan order.
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Case-insensitive conversion from a letter.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(Vowel::A),
            'e' => Some(Vowel::E),
            'i' => Some(Vowel::I),
            'o' => Some(Vowel::O),
            'u' => Some(Vowel::U),
            _ => None,
        }
    }

    /// Lowercase letter for this vowel.
    pub fn as_char(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::E => 'e',
            Vowel::I => 'i',
            Vowel::O => 'o',
            Vowel::U => 'u',
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The specific part of a long-vowel identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LongSpelling {
    /// `long_a`: any long spelling of this vowel.
    Family(Vowel),
    /// `long_ea`, `vowel_team_oa`: a literal letter team.
    Team(String),
}

/// A phonics pattern identifier after classification.
///
/// Generic ids (`blends`, `long_vowels`, ...) carry `None`; specific ones
/// carry the literal letters to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternId {
    /// Blank identifier. Never highlights anything.
    Empty,
    /// `a_e`, `i_e`, ...: vowel, any letter, silent `e`.
    MagicE(Vowel),
    LongVowel(Option<LongSpelling>),
    ShortVowel(Option<Vowel>),
    Digraph(Option<String>),
    Blend(Option<String>),
    /// No category prefix matched. Holds the normalised id.
    Unrecognized(String),
}

impl PatternId {
    /// True for category-only identifiers with no literal to search for.
    pub fn is_generic(&self) -> bool {
        matches!(
            self,
            PatternId::LongVowel(None)
                | PatternId::ShortVowel(None)
                | PatternId::Digraph(None)
                | PatternId::Blend(None)
        )
    }
}
