//! Length heuristics, grouped by the pipeline stage that runs them.

use once_cell::sync::Lazy;

use crate::Rule;
use crate::config::Stage;

pub(crate) mod length {
    pub(crate) mod helpers;
    pub(crate) mod predicates;
    pub(crate) mod rules;
    #[cfg(test)]
    mod tests;
}

static CIRCUMFLEX_RULES: Lazy<Vec<Rule>> = Lazy::new(length::rules::circumflex);
static ACCENT_RULES: Lazy<Vec<Rule>> = Lazy::new(length::rules::accent);
static NOMINAL_RULES: Lazy<Vec<Rule>> = Lazy::new(length::rules::nominal);
static PREFIX_RULES: Lazy<Vec<Rule>> = Lazy::new(length::rules::prefix);

/// Rules a record-local stage runs, in order. Empty for stages that are not rule-driven.
pub(crate) fn for_stage(stage: Stage) -> &'static [Rule] {
    match stage {
        Stage::Circumflex => &CIRCUMFLEX_RULES,
        Stage::Accent => &ACCENT_RULES,
        Stage::Nominal => &NOMINAL_RULES,
        Stage::Prefix => &PREFIX_RULES,
        Stage::Lexicon | Stage::Metrical | Stage::Barytone | Stage::Generalize => &[],
    }
}
