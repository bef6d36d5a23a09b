use serde_json::Value;

use super::rubric::{CategoryRule, Rubric};
use crate::reviews::domain::{EvaluationRecord, SubScoreEntry};

/// Transient result of the weighted aggregation pass over one record.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResults {
    /// Weighted sum over the categories that had at least one rating.
    /// Weights of skipped categories are not redistributed.
    pub score_final: f64,
    /// Record-wide flag: set by any absent or non-numeric sub-criterion,
    /// whether or not its category ended up contributing to the score.
    pub missing_data: bool,
}

/// Ratings present for one category, in rubric order, plus whether any of its
/// sub-criteria was missing or malformed.
pub(crate) fn category_subscores(notas: Option<&Value>, rule: &CategoryRule) -> (Vec<f64>, bool) {
    let entries = notas.and_then(|value| value.get(&rule.name));
    let mut scores = Vec::with_capacity(rule.subcriteria.len());
    let mut missing = false;

    for subcriterion in &rule.subcriteria {
        match entries
            .and_then(|category| category.get(subcriterion))
            .and_then(SubScoreEntry::resolve)
        {
            Some(nota) => scores.push(nota),
            None => missing = true,
        }
    }

    (scores, missing)
}

pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Steps 1 and 2: per-category means folded into the weighted final score.
/// `weights` must run parallel to `rubric.categories` (see
/// [`Rubric::weights_with_overrides`]).
pub(crate) fn aggregate(
    record: &EvaluationRecord,
    rubric: &Rubric,
    weights: &[(String, f64)],
) -> CategoryResults {
    let notas = record.get("notas");
    let mut score_final = 0.0;
    let mut missing_data = false;

    for (rule, (_, weight)) in rubric.categories.iter().zip(weights) {
        let (scores, missing) = category_subscores(notas, rule);
        if missing {
            missing_data = true;
        }
        if let Some(avg) = mean(&scores) {
            score_final += avg * weight;
        }
    }

    CategoryResults {
        score_final,
        missing_data,
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
