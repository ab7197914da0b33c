//! Word objects delivered by the word-generation service.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::highlight::HighlightMask;
use crate::locator::locate_pattern;

/// One word shown to the learner together with its target pattern.
///
/// `target_letter` and `pattern_position` are optional hints from the
/// service; they are consulted only when the pattern itself cannot be
/// located in the word.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordChallenge {
    pub word: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_position: Option<usize>,
}

impl WordChallenge {
    pub fn new(word: &str, pattern: &str) -> Self {
        Self {
            word: word.to_string(),
            pattern: pattern.to_string(),
            target_letter: None,
            pattern_position: None,
        }
    }

    /// Highlight mask for this challenge's word.
    pub fn highlight(&self) -> HighlightMask {
        let mask = locate_pattern(&self.word, &self.pattern);
        if mask.any() {
            return mask;
        }
        self.hinted_mask().unwrap_or(mask)
    }

    /// Mark `target_letter` at `pattern_position` when the word really holds
    /// those letters there.
    fn hinted_mask(&self) -> Option<HighlightMask> {
        let target = self.target_letter.as_deref()?.trim();
        let position = self.pattern_position?;
        if target.is_empty() || target.contains(char::is_whitespace) {
            return None;
        }
        let len = target.chars().count();
        let matches = self
            .word
            .chars()
            .skip(position)
            .take(len)
            .map(|ch| ch.to_ascii_lowercase())
            .eq(target.chars().map(|ch| ch.to_ascii_lowercase()));
        if !matches {
            debug!(
                word = self.word.as_str(),
                target, position, "target hint does not match word"
            );
            return None;
        }
        let mut mask = HighlightMask::for_word(&self.word);
        for idx in position..position + len {
            mask.mark(idx);
        }
        Some(mask)
    }
}

/// Parse a JSON array of challenges, or a single challenge object.
pub fn parse_challenges(json: &str) -> Result<Vec<WordChallenge>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Challenge input is not valid JSON")?;
    if value.is_array() {
        serde_json::from_value(value).context("Invalid challenge list")
    } else {
        let single: WordChallenge =
            serde_json::from_value(value).context("Invalid challenge object")?;
        Ok(vec![single])
    }
}
