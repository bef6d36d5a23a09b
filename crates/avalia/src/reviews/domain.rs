use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Alert emitted (and classification fallback used) whenever a required
/// numeric rating is absent or malformed.
pub const INSUFFICIENT_DATA: &str = "dados_insuficientes";

/// One raw evaluation payload. Records are open maps: every field the caller
/// sends survives into the output, with only the computed fields overwritten.
pub type EvaluationRecord = Map<String, Value>;

/// Input/output envelope for a scoring run. The `avaliacoes` key is required;
/// a document without it is rejected before any record is scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBatch {
    pub avaliacoes: Vec<Value>,
}

/// Accepted shapes for a sub-criterion entry: a bare number, or an object
/// carrying a numeric `nota` alongside arbitrary metadata. Every other shape
/// resolves to "missing" rather than an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SubScoreEntry {
    Number(f64),
    Detailed { nota: Option<f64> },
}

impl SubScoreEntry {
    /// Resolve a raw JSON value to its numeric rating, if it carries one.
    /// Booleans, strings, nulls, and arrays all count as missing.
    pub fn resolve(value: &Value) -> Option<f64> {
        match SubScoreEntry::deserialize(value) {
            Ok(SubScoreEntry::Number(nota)) => Some(nota),
            Ok(SubScoreEntry::Detailed { nota }) => nota,
            Err(_) => None,
        }
    }
}

/// Failure to parse an input document into the evaluation envelope.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid evaluation document: {0}")]
    Malformed(#[from] serde_json::Error),
}
