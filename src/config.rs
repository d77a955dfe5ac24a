//! Pipeline configuration.
//!
//! ```toml
//! stages = ["circumflex", "accent", "nominal", "prefix", "barytone", "generalize"]
//! parallel = true
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// One step of the annotation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Curated token→annotation table.
    Lexicon,
    /// Consensus of metrical scansions.
    Metrical,
    /// Circumflexed vowels are long.
    Circumflex,
    /// Short final dichronon forced by the accent position.
    Accent,
    /// Declension endings.
    Nominal,
    /// Known prefixes.
    Prefix,
    /// Grave-accented forms inherit from their oxytone counterparts.
    Barytone,
    /// Forms of one lemma sharing a stem share their lengths.
    Generalize,
}

impl Stage {
    pub const ALL: [Stage; 8] = [
        Stage::Lexicon,
        Stage::Metrical,
        Stage::Circumflex,
        Stage::Accent,
        Stage::Nominal,
        Stage::Prefix,
        Stage::Barytone,
        Stage::Generalize,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Lexicon => "lexicon",
            Stage::Metrical => "metrical",
            Stage::Circumflex => "circumflex",
            Stage::Accent => "accent",
            Stage::Nominal => "nominal",
            Stage::Prefix => "prefix",
            Stage::Barytone => "barytone",
            Stage::Generalize => "generalize",
        }
    }

    /// Source label added to records this stage changes.
    ///
    /// The lexicon stage uses its lexicon's own label instead; this is only its fallback.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Lexicon => "lexicon",
            Stage::Metrical => "metrical",
            Stage::Circumflex => "circumflex",
            Stage::Accent => "breve_ultima",
            Stage::Nominal => "nominal",
            Stage::Prefix => "prefix",
            Stage::Barytone => "barytone",
            Stage::Generalize => "cognate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownStage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Stages in run order. A stage may appear more than once.
    pub stages: Vec<Stage>,
    /// Run record-local stages on the rayon thread pool.
    pub parallel: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { stages: Stage::ALL.to_vec(), parallel: true }
    }
}

impl Options {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn with_stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.stages = stages.into_iter().collect();
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
