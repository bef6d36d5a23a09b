use serde_json::Value;

use crate::reviews::{EvaluationRecord, ReviewEngine, ReviewService, Rubric};

pub(super) fn engine() -> ReviewEngine {
    ReviewEngine::new(Rubric::standard())
}

pub(super) fn service() -> ReviewService {
    ReviewService::new(Rubric::standard())
}

pub(super) fn record(value: Value) -> EvaluationRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("record fixture must be a JSON object, got {other}"),
    }
}

/// A record with every sub-criterion rated. Weighted sum works out to 7.75:
/// category means 8.0, 8.0, 7.0, 8.0, 9.0, 6.0, 8.0 against the standard
/// weights.
pub(super) fn complete_record() -> EvaluationRecord {
    record(serde_json::json!({
        "id": "colab-001",
        "notas": {
            "valores_cultura": {
                "postura_de_dono": 8,
                "fome_de_crescer": 9,
                "disciplina_para_entregar": 7,
                "transparencia_de_dados": 8
            },
            "entrega_resultados": {
                "atingimento_metas": {"nota": 7, "comentario": "metas parciais"},
                "qualidade_entregas": 9
            },
            "habilidades_tecnicas": {
                "dominio_ferramentas": 6,
                "conhecimento_produto": 8
            },
            "habilidades_comportamentais": {
                "comunicacao": 9,
                "colaboracao": 7
            },
            "pontualidade_confiabilidade": {
                "pontualidade": 10,
                "assiduidade": 8
            },
            "ownership_comercial": {
                "prospeccao_followup": 5,
                "organizacao_crm": 7
            },
            "evolucao_aprendizagem": {
                "melhoria_continua": 8
            }
        }
    }))
}

pub(super) fn alerts_of(scored: &EvaluationRecord) -> Vec<String> {
    scored["alertas"]
        .as_array()
        .expect("alertas is an array")
        .iter()
        .map(|entry| entry.as_str().expect("alert is a string").to_string())
        .collect()
}

pub(super) fn classification_of<'a>(scored: &'a EvaluationRecord, field: &str) -> &'a str {
    scored["classificacao"][field]
        .as_str()
        .expect("classification field is a string")
}
