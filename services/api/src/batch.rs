use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use avalia::error::AppError;
use avalia::reviews::{EvaluationBatch, InputError};
use clap::Args;

use crate::infra::build_service;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path of the JSON document with the raw evaluations, or `-` for stdin
    pub(crate) input: PathBuf,
    /// Write the scored document here instead of stdout
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = read_input(&args.input)?;
    let rendered = score_document(&raw)?;

    match args.output {
        Some(path) => write_output(&path, &rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Parse, score, and pretty-print one document. A document that is not the
/// expected envelope fails here; malformed individual records do not.
pub(crate) fn score_document(raw: &str) -> Result<String, AppError> {
    let batch: EvaluationBatch = serde_json::from_str(raw).map_err(InputError::from)?;
    let service = build_service()?;
    let scored = service.score_batch(&batch);
    serde_json::to_string_pretty(&scored).map_err(|err| AppError::Io(err.into()))
}

fn read_input(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    Ok(fs::read_to_string(path)?)
}

fn write_output(path: &Path, rendered: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn score_document_round_trips_an_envelope() {
        let raw = r#"{
            "avaliacoes": [
                {"id": "p1", "notas": {"entrega_resultados": {"atingimento_metas": 9}}}
            ]
        }"#;

        let rendered = score_document(raw).expect("valid envelope scores");
        let payload: Value = serde_json::from_str(&rendered).expect("output is JSON");

        assert_eq!(
            payload["avaliacoes"][0]["classificacao"]["performance"],
            Value::from("Alta")
        );
        assert_eq!(payload["avaliacoes"][0]["id"], Value::from("p1"));
    }

    #[test]
    fn score_document_rejects_missing_envelope_key() {
        let result = score_document(r#"{"colaboradores": []}"#);
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn score_document_rejects_invalid_json() {
        assert!(score_document("not json").is_err());
    }

    #[test]
    fn run_score_writes_output_file_creating_parent_dirs() {
        let base = std::env::temp_dir().join(format!("avalia-batch-{}", std::process::id()));
        fs::create_dir_all(&base).expect("temp dir");
        let input_path = base.join("input.json");
        fs::write(&input_path, r#"{"avaliacoes": []}"#).expect("input written");
        let output_path = base.join("nested/out/result.json");

        run_score(ScoreArgs {
            input: input_path,
            output: Some(output_path.clone()),
        })
        .expect("score command runs");

        let written = fs::read_to_string(&output_path).expect("output file exists");
        let payload: Value = serde_json::from_str(&written).expect("output is JSON");
        assert_eq!(payload, serde_json::json!({"avaliacoes": []}));

        fs::remove_dir_all(&base).ok();
    }
}
