mod classify;
pub mod rubric;
mod scoring;

pub use classify::{PerformanceTier, PotentialTier};
pub use scoring::CategoryResults;

use serde_json::{json, Map, Value};

use crate::reviews::domain::{EvaluationRecord, INSUFFICIENT_DATA};
use rubric::Rubric;

/// Stateless scorer applying the rubric to one raw evaluation record.
pub struct ReviewEngine {
    rubric: Rubric,
}

impl ReviewEngine {
    pub fn new(rubric: Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    /// Score one record. Returns a new record with `score_final`,
    /// `classificacao`, `alertas`, and `pesos` written; every other field
    /// passes through untouched. Never fails: malformed ratings degrade to
    /// "missing" and surface through the alert and tier fallbacks.
    pub fn score(&self, record: &EvaluationRecord) -> EvaluationRecord {
        let mut scored = record.clone();

        let weights = self.rubric.weights_with_overrides(record.get("pesos"));
        let results = scoring::aggregate(record, &self.rubric, &weights);
        scored.insert(
            "score_final".to_string(),
            json!(scoring::round2(results.score_final)),
        );

        let notas = record.get("notas");
        let performance = classify::performance_tier(notas, &self.rubric.performance);
        let potential = classify::potential_tier(notas, &self.rubric);

        let mut classification = match scored.get("classificacao") {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Map::new(),
        };
        classification.insert(
            "performance".to_string(),
            Value::from(performance.label()),
        );
        classification.insert("potencial".to_string(), Value::from(potential.label()));
        classification.insert(
            "nove_box".to_string(),
            Value::from(classify::nine_box_label(performance, potential)),
        );
        scored.insert("classificacao".to_string(), Value::Object(classification));

        let mut alerts: Vec<String> = match record.get("alertas") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };
        if results.missing_data {
            alerts.push(INSUFFICIENT_DATA.to_string());
        }
        alerts.sort();
        alerts.dedup();
        scored.insert("alertas".to_string(), Value::from(alerts));

        let mut pesos = Map::new();
        for (name, weight) in &weights {
            pesos.insert(name.clone(), json!(weight));
        }
        scored.insert("pesos".to_string(), Value::Object(pesos));

        scored
    }
}
