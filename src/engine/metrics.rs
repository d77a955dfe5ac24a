//! Pipeline run metrics.
//!
//! Every stage returns a [`StageMetrics`] and the pipeline collects them into
//! one [`RunMetrics`]; nothing is counted in global state.
//!
//! The intended usage is:
//!
//! - `annotate` / `annotate_with` return the metrics alongside the mutated records.
//! - The CLI prints them as the stage report on stderr.
//!
//! ## Design notes
//!
//! - A hit is a rule (or source) whose candidate added at least one marker to
//!   a record. Candidates swallowed entirely by first-writer-wins are not hits.
//! - `updated` counts records, not markers; `markers_added` counts markers.

use std::time::Duration;

use crate::config::Stage;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the whole pipeline.
    pub total: Duration,
    /// Records the pipeline ran over.
    pub records: usize,
    /// Records with at least one marker before the first stage.
    pub annotated_before: usize,
    /// Records with at least one marker after the last stage.
    pub annotated_after: usize,
    /// One entry per configured stage, in run order.
    pub stages: Vec<StageMetrics>,
}

impl RunMetrics {
    pub fn stage(&self, stage: Stage) -> Option<&StageMetrics> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    pub fn markers_added(&self) -> usize {
        self.stages.iter().map(|s| s.markers_added).sum()
    }
}

/// Outcome of one stage.
#[derive(Debug, Clone)]
pub struct StageMetrics {
    pub stage: Stage,
    /// Source label written to records this stage changed.
    pub label: String,
    pub duration: Duration,
    /// Records whose annotation changed.
    pub updated: usize,
    pub markers_added: usize,
    /// Hits per rule, in first-hit order.
    pub rule_hits: Vec<RuleHits>,
    /// The stage's collaborator was not configured, so nothing ran.
    pub skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHits {
    pub rule: &'static str,
    pub hits: usize,
}

impl StageMetrics {
    pub(crate) fn new(stage: Stage, label: &str) -> Self {
        StageMetrics {
            stage,
            label: label.to_string(),
            duration: Duration::ZERO,
            updated: 0,
            markers_added: 0,
            rule_hits: Vec::new(),
            skipped: false,
        }
    }

    pub(crate) fn skipped(stage: Stage) -> Self {
        StageMetrics { skipped: true, ..StageMetrics::new(stage, stage.label()) }
    }

    pub(crate) fn record_hit(&mut self, rule: &'static str) {
        match self.rule_hits.iter_mut().find(|h| h.rule == rule) {
            Some(entry) => entry.hits += 1,
            None => self.rule_hits.push(RuleHits { rule, hits: 1 }),
        }
    }

    pub fn hits(&self, rule: &str) -> usize {
        self.rule_hits.iter().find(|h| h.rule == rule).map_or(0, |h| h.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_accumulate_per_rule() {
        let mut metrics = StageMetrics::new(Stage::Nominal, "nominal");
        metrics.record_hit("short dative -ι");
        metrics.record_hit("long -ας");
        metrics.record_hit("short dative -ι");
        assert_eq!(metrics.hits("short dative -ι"), 2);
        assert_eq!(metrics.hits("long -ας"), 1);
        assert_eq!(metrics.hits("short -α"), 0);
        assert_eq!(metrics.rule_hits[0].rule, "short dative -ι");
    }
}
