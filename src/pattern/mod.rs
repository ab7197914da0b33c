//! Phonics pattern identifiers, tables and primitive searches.
//!
//! # Identifier forms
//!
//! | Identifier                     | Meaning                                  |
//! |--------------------------------|------------------------------------------|
//! | `a_e` `i_e` `long_o_e`         | Magic-e: vowel, one letter, silent `e`   |
//! | `long_ea` `vowel_team_oa`      | Specific long-vowel team                 |
//! | `long_a`                       | Any long spelling of one vowel           |
//! | `long_vowels` `vowel_teams`    | Any long-vowel spelling                  |
//! | `short_a`                      | One short vowel letter                   |
//! | `short_vowels`                 | The first vowel letter                   |
//! | `digraph_sh` / `digraphs`      | Specific digraph / any digraph           |
//! | `blend_st` / `blends`          | Specific blend / any blend               |
//! | anything else                  | Literal letters, then keyword heuristics |

pub mod ast;
pub mod matcher;
pub mod parser;
pub mod tables;

pub use ast::{LongSpelling, PatternId, Vowel};
pub use matcher::{Occurrence, Word};
pub use parser::parse;
