//! Per-character highlight masks and their rendering.

use std::ops::Range;

use itertools::Itertools;
use serde::Serialize;

/// One flag per character of the word; `true` marks a pattern character.
///
/// The length always equals the word's character count, spaces included,
/// so a renderer can walk the mask in lockstep with `word.chars()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct HighlightMask(Vec<bool>);

/// A run of characters that share the same highlight state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightMask {
    /// An all-false mask of `len` characters.
    pub fn empty(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// All-false mask sized for `word`.
    pub fn for_word(word: &str) -> Self {
        Self::empty(word.chars().count())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Out-of-range indices are never highlighted.
    pub fn is_highlighted(&self, idx: usize) -> bool {
        self.0.get(idx).copied().unwrap_or(false)
    }

    /// True if at least one character is highlighted.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&b| b)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// Mark `idx`. Indices past the end are ignored.
    pub(crate) fn mark(&mut self, idx: usize) {
        if let Some(flag) = self.0.get_mut(idx) {
            *flag = true;
        }
    }

    /// Maximal runs of highlighted characters.
    pub fn spans(&self) -> Vec<Range<usize>> {
        self.0
            .iter()
            .enumerate()
            .chunk_by(|&(_, &flag)| flag)
            .into_iter()
            .filter(|(flag, _)| *flag)
            .filter_map(|(_, run)| run.map(|(idx, _)| idx).minmax().into_option())
            .map(|(first, last)| first..last + 1)
            .collect()
    }

    /// Split `word` into alternating plain and highlighted segments.
    pub fn segments(&self, word: &str) -> Vec<Segment> {
        word.chars()
            .enumerate()
            .chunk_by(|&(idx, _)| self.is_highlighted(idx))
            .into_iter()
            .map(|(highlighted, run)| Segment {
                text: run.map(|(_, ch)| ch).collect(),
                highlighted,
            })
            .collect()
    }

    /// Render `word` with highlighted runs in brackets: `[sh]ip`, `f[i]r[e]`.
    pub fn render_bracketed(&self, word: &str) -> String {
        self.segments(word)
            .into_iter()
            .map(|seg| {
                if seg.highlighted {
                    format!("[{}]", seg.text)
                } else {
                    seg.text
                }
            })
            .collect()
    }

    /// Render as `0`/`1` digits, one per character.
    pub fn render_bits(&self) -> String {
        self.0.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

impl From<HighlightMask> for Vec<bool> {
    fn from(mask: HighlightMask) -> Self {
        mask.0
    }
}
