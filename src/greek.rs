//! Polytonic Greek text analysis: letters, graphemes, syllables, positions.
//!
//! Everything under this module is pure and allocation-light; the rule engine
//! calls it once per record and shares the results between rules.

#[path = "greek/accent.rs"]
mod accent;
#[path = "greek/classify.rs"]
pub mod classify;
#[path = "greek/letters.rs"]
pub mod letters;
#[path = "greek/position.rs"]
mod position;
#[path = "greek/syllabify.rs"]
mod syllabify;

pub use accent::AccentClass;
pub use classify::{Element, ElementKind, classify_at, preprocess, segment};
pub use letters::Diacritics;
pub use position::{IndexedLetter, PositionIndex, index, ordinal_of_last_vowel};
pub use syllabify::{Syllable, syllabify, syllables};
