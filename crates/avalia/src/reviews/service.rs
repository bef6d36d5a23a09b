use serde_json::Value;

use super::domain::{EvaluationBatch, EvaluationRecord};
use super::evaluation::rubric::Rubric;
use super::evaluation::ReviewEngine;

/// Batch driver: applies the engine to every record of an envelope,
/// preserving input order. Stateless and safe to share across requests.
pub struct ReviewService {
    engine: ReviewEngine,
}

impl ReviewService {
    pub fn new(rubric: Rubric) -> Self {
        Self {
            engine: ReviewEngine::new(rubric),
        }
    }

    pub fn engine(&self) -> &ReviewEngine {
        &self.engine
    }

    /// Score every record of the batch. Entries that are not JSON objects are
    /// scored as empty records rather than failing the run.
    pub fn score_batch(&self, batch: &EvaluationBatch) -> EvaluationBatch {
        let avaliacoes = batch
            .avaliacoes
            .iter()
            .map(|entry| {
                let scored = match entry {
                    Value::Object(record) => self.engine.score(record),
                    _ => self.engine.score(&EvaluationRecord::new()),
                };
                Value::Object(scored)
            })
            .collect();

        EvaluationBatch { avaliacoes }
    }
}
