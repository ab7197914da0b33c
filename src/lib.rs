//! Phonics pattern locator for the WildLitz literacy games.
//!
//! Given a word shown to the learner and the pattern id supplied by the
//! word-generation service, compute which characters to highlight.
//!
//! # Example
//!
//! ```rust
//! use wildlitz_phonics::{WordChallenge, locate_pattern};
//!
//! let mask = locate_pattern("ship", "digraph_sh");
//! assert_eq!(mask.as_slice(), &[true, true, false, false]);
//! assert_eq!(mask.render_bracketed("ship"), "[sh]ip");
//!
//! let challenge = WordChallenge::new("cake", "a_e");
//! assert_eq!(challenge.highlight().render_bracketed("cake"), "c[a]k[e]");
//! ```

mod challenge;
mod highlight;
mod locator;
pub mod pattern;

pub use challenge::{WordChallenge, parse_challenges};
pub use highlight::{HighlightMask, Segment};
pub use locator::{
    DEFAULT_CACHE_CAPACITY, Locator, is_char_part_of_pattern, locate_parsed, locate_pattern,
};
pub use pattern::{PatternId, parse as parse_pattern_id};
