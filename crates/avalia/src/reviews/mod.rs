//! 360° review scoring: rule tables, the scoring engine, the batch driver,
//! and the HTTP surface over them.

pub mod domain;
pub(crate) mod evaluation;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{EvaluationBatch, EvaluationRecord, InputError, SubScoreEntry, INSUFFICIENT_DATA};
pub use evaluation::rubric::{CategoryRule, Rubric, RubricError, ThresholdTable};
pub use evaluation::{CategoryResults, PerformanceTier, PotentialTier, ReviewEngine};
pub use router::review_router;
pub use service::ReviewService;
