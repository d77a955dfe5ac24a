//! Vowel-length inference for Ancient Greek word forms.
//!
//! The vowels α, ι and υ (*dichrona*) can be long or short and the ordinary
//! spelling does not say which. This crate syllabifies polytonic Greek
//! tokens, addresses their letters by base-letter ordinal, and runs an
//! ordered pipeline of heuristics that add length markers (`_4` long, `^7`
//! short) to annotated records without ever overwriting an earlier claim.
//!
//! ```
//! use dichrona::{Record, annotate, syllabify};
//!
//! assert_eq!(syllabify("πατρός"), vec!["πατ", "ρός"]);
//!
//! let mut records = vec![
//!     Record::new("μεγίστης", "a-s---fgs", "μέγας"),
//!     Record::new("μέγιστον", "a-s---nas", "μέγας").with_annotation("^4"),
//! ];
//! annotate(&mut records);
//! assert_eq!(records[0].annotation.to_string(), "^4");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
pub mod annotation;
mod api;
mod config;
mod engine;
mod error;
pub mod greek;
mod record;
mod rules;
pub mod sources;

pub use annotation::{Annotation, Length, Marker, SourceTag};
pub use api::{Context, annotate, annotate_with};
pub use config::{Options, Stage};
pub use engine::{RuleHits, RunMetrics, StageMetrics};
pub use error::{AnnotationError, ConfigError, Error, RecordError, Result};
pub use greek::{AccentClass, Syllable, index, ordinal_of_last_vowel, preprocess, syllabify, syllables};
pub use record::{Corpus, MIN_COLUMNS, ReadReport, Record, Tag, TagSlot};

use crate::engine::Word;

// --- Internal types ---------------------------------------------------------

// Trait to convert rule production results into annotations
pub(crate) trait IntoAnnotation {
    fn into_annotation(self) -> Option<Annotation>;
}

impl IntoAnnotation for Marker {
    fn into_annotation(self) -> Option<Annotation> {
        Some(Annotation::from(self))
    }
}

impl IntoAnnotation for Annotation {
    fn into_annotation(self) -> Option<Annotation> {
        (!self.is_empty()).then_some(self)
    }
}

pub(crate) type Production = Box<dyn Fn(&Word<'_>) -> Option<Annotation> + Send + Sync>;

/// A length heuristic: a name, an optional tag filter, a trait mask and a
/// `production` that inspects one word and optionally returns the markers it
/// is confident about.
pub(crate) struct Rule {
    pub name: &'static str,
    /// Anchored regex the record's morphology tag must match.
    pub tag: Option<&'static Regex>,
    /// `TokenTraits` bits that must all be present for the production to run.
    pub requires: u32,
    pub production: Production,
}

impl Rule {
    pub(crate) fn apply(&self, word: &Word<'_>) -> Option<Annotation> {
        if self.tag.is_some_and(|re| !word.tag().matches(re)) {
            return None;
        }
        if (!word.traits.bits() & self.requires) != 0 {
            return None;
        }
        (self.production)(word)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("tag", &self.tag.map(Regex::as_str))
            .field("production", &"<function>")
            .field("requires", &self.requires)
            .finish()
    }
}
