//! The stage fold.
//!
//! `Pipeline::run` walks `Options::stages` in order. Record-local stages
//! compute candidates for each record independently (on the rayon pool when
//! `parallel` is set) and merge them straight into that record. Barrier
//! stages read the whole record set first and apply their updates after.
//! Either way a record gets the stage's source label only when its
//! annotation actually grew.

use std::time::Instant;

use rayon::prelude::*;

use crate::annotation::Annotation;
use crate::api::Context;
use crate::config::{Options, Stage};
use crate::engine::{RunMetrics, StageMetrics, Word, barytone, generalize};
use crate::record::Record;
use crate::rules;
use crate::sources::metrical_consensus;

/// What one record-local stage did to one record.
#[derive(Default)]
struct Outcome {
    fired: Vec<&'static str>,
    added: usize,
}

pub struct Pipeline<'a> {
    context: &'a Context<'a>,
    options: &'a Options,
}

impl<'a> Pipeline<'a> {
    pub fn new(context: &'a Context<'a>, options: &'a Options) -> Self {
        Pipeline { context, options }
    }

    pub fn run(&self, records: &mut [Record]) -> RunMetrics {
        let start = Instant::now();
        let mut metrics = RunMetrics {
            records: records.len(),
            annotated_before: records.iter().filter(|r| !r.annotation.is_empty()).count(),
            ..RunMetrics::default()
        };

        for &stage in &self.options.stages {
            let stage_start = Instant::now();
            let mut stage_metrics = self.run_stage(stage, records);
            stage_metrics.duration = stage_start.elapsed();
            if stage_metrics.skipped {
                log::debug!("stage {}: skipped, no source configured", stage);
            } else {
                log::debug!(
                    "stage {}: {} records updated, {} markers added in {:?}",
                    stage,
                    stage_metrics.updated,
                    stage_metrics.markers_added,
                    stage_metrics.duration
                );
            }
            metrics.stages.push(stage_metrics);
        }

        metrics.annotated_after = records.iter().filter(|r| !r.annotation.is_empty()).count();
        metrics.total = start.elapsed();
        metrics
    }

    fn run_stage(&self, stage: Stage, records: &mut [Record]) -> StageMetrics {
        match stage {
            Stage::Lexicon => match self.context.lexicon {
                Some(lexicon) => self.run_local(stage, lexicon.label(), records, |record| {
                    lexicon.lookup(&record.token).map(|a| vec![("lexicon entry", a)]).unwrap_or_default()
                }),
                None => StageMetrics::skipped(stage),
            },
            Stage::Metrical => match self.context.metrical {
                Some(metrical) => self.run_local(stage, stage.label(), records, |record| {
                    let scansions = metrical.scansions(&record.token);
                    metrical_consensus(&record.token, &scansions)
                        .map(|a| vec![("metrical consensus", a)])
                        .unwrap_or_default()
                }),
                None => StageMetrics::skipped(stage),
            },
            Stage::Circumflex | Stage::Accent | Stage::Nominal | Stage::Prefix => {
                let stage_rules = rules::for_stage(stage);
                self.run_local(stage, stage.label(), records, |record| {
                    let word = Word::new(record);
                    stage_rules.iter().filter_map(|rule| rule.apply(&word).map(|a| (rule.name, a))).collect()
                })
            }
            Stage::Barytone => {
                let updates = barytone::inherit(records, self.options.parallel);
                apply_updates(stage, records, updates, "acute counterpart")
            }
            Stage::Generalize => {
                let updates = generalize::inherit(records, self.context.stems, self.options.parallel);
                apply_updates(stage, records, updates, "shared stem")
            }
        }
    }

    fn run_local<F>(&self, stage: Stage, label: &str, records: &mut [Record], candidates: F) -> StageMetrics
    where
        F: Fn(&Record) -> Vec<(&'static str, Annotation)> + Sync,
    {
        let apply = |record: &mut Record| -> Outcome {
            let mut outcome = Outcome::default();
            for (name, candidate) in candidates(record) {
                let added = record.annotation.merge(&candidate);
                if added > 0 {
                    log::trace!("{}: {} added {} to {}", stage, name, candidate, record.token);
                    outcome.fired.push(name);
                    outcome.added += added;
                }
            }
            if outcome.added > 0 {
                record.source.add(label);
            }
            outcome
        };

        let outcomes: Vec<Outcome> = if self.options.parallel {
            records.par_iter_mut().map(apply).collect()
        } else {
            records.iter_mut().map(apply).collect()
        };

        let mut metrics = StageMetrics::new(stage, label);
        for outcome in outcomes.into_iter().filter(|o| o.added > 0) {
            metrics.updated += 1;
            metrics.markers_added += outcome.added;
            for name in outcome.fired {
                metrics.record_hit(name);
            }
        }
        metrics
    }
}

fn apply_updates(
    stage: Stage,
    records: &mut [Record],
    updates: Vec<(usize, Annotation)>,
    rule: &'static str,
) -> StageMetrics {
    let mut metrics = StageMetrics::new(stage, stage.label());
    for (i, candidate) in updates {
        let record = &mut records[i];
        let added = record.annotation.merge(&candidate);
        if added > 0 {
            record.source.add(stage.label());
            metrics.updated += 1;
            metrics.markers_added += added;
            metrics.record_hit(rule);
        }
    }
    metrics
}
