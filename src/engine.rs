//! Annotation engine.
//!
//! This module is the entry point the public API drives. It owns the stage
//! fold and the two corpus-level phases; the rules themselves live under
//! `src/rules/**` and the Greek analysis under `src/greek/**`.
//!
//! ## How the parts work together
//!
//! Annotating a record set is a fold over the configured stages:
//!
//! ```text
//! records ──┐
//!           │  for stage in Options::stages            (pipeline.rs)
//!           v
//!   record-local stage                 barrier stage
//!   (lexicon, metrical,                (barytone, generalize)
//!    circumflex, accent,                 - read a snapshot of all records
//!    nominal, prefix)                    - barytone.rs / generalize.rs
//!     - Word::new: syllables,              compute (index, annotation)
//!       positions, TokenTraits::scan     - apply updates afterwards
//!       (word.rs, trigger.rs)                   │
//!     - rules gated by tag + traits             │
//!     - merge candidates into the record        │
//!           │                                   │
//!           └──────────────┬────────────────────┘
//!                          v
//!                 StageMetrics per stage ──> RunMetrics   (metrics.rs)
//! ```
//!
//! Every candidate goes through `Annotation::merge`, so a stage can only add
//! markers on positions nobody has claimed yet. The order of
//! `Options::stages` is therefore also a priority order: earlier stages win
//! disagreements.
//!
//! ## Responsibilities by module
//!
//! - `pipeline.rs`: runs stages in order, parallel or sequential, and tallies metrics.
//! - `word.rs`: the per-record analysis shared by the rules of one stage.
//! - `trigger.rs`: scans a token for coarse traits so rules can be skipped cheaply.
//! - `barytone.rs`: grave-accented forms inherit from their acute spelling.
//! - `generalize.rs`: forms of one lemma with a common stem share their lengths.
//! - `metrics.rs`: per-stage and per-run counters and timings.
//!
//! ## Adding a rule
//!
//! - Write it with `rule!` under `src/rules/length/rules.rs` and list it in
//!   the stage table in `src/rules.rs`.
//! - If it needs a new coarse trigger, add a `TokenTraits` bit and set it in
//!   `TokenTraits::scan`.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=dichrona=trace` to see every marker a rule adds.

#[path = "engine/barytone.rs"]
mod barytone;
#[path = "engine/generalize.rs"]
mod generalize;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/trigger.rs"]
mod trigger;
#[path = "engine/word.rs"]
mod word;

pub use metrics::{RuleHits, RunMetrics, StageMetrics};
pub use pipeline::Pipeline;
pub use trigger::TokenTraits;
pub(crate) use word::Word;
