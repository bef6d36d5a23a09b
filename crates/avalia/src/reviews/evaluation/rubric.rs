use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category hosting the single rating that drives the performance tier.
pub const PERFORMANCE_CATEGORY: &str = "entrega_resultados";
/// Sub-criterion that drives the performance tier.
pub const PERFORMANCE_SUBCRITERION: &str = "atingimento_metas";
/// Categories whose means are averaged into the potential tier.
pub const POTENTIAL_CATEGORIES: [&str; 3] = [
    "valores_cultura",
    "habilidades_comportamentais",
    "evolucao_aprendizagem",
];

/// One evaluation dimension: its weight in the final score and the ordered
/// sub-criteria it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub name: String,
    pub weight: f64,
    pub subcriteria: Vec<String>,
}

impl CategoryRule {
    fn new(name: &str, weight: f64, subcriteria: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            weight,
            subcriteria: subcriteria.iter().map(|sub| sub.to_string()).collect(),
        }
    }
}

/// Ordered cutoffs for a tier table: `high` and above is the top tier, `mid`
/// and above the middle one, anything below the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub high: f64,
    pub mid: f64,
}

/// The full rule table set: seven categories in display order plus the tier
/// cutoffs. Built once at startup and shared read-only; per-record weight
/// overrides produce a new table and never touch this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rubric {
    pub categories: Vec<CategoryRule>,
    pub performance: ThresholdTable,
    pub potential: ThresholdTable,
}

impl Rubric {
    /// The standard 360° rubric.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                CategoryRule::new(
                    "valores_cultura",
                    0.20,
                    &[
                        "postura_de_dono",
                        "fome_de_crescer",
                        "disciplina_para_entregar",
                        "transparencia_de_dados",
                    ],
                ),
                CategoryRule::new(
                    "entrega_resultados",
                    0.25,
                    &["atingimento_metas", "qualidade_entregas"],
                ),
                CategoryRule::new(
                    "habilidades_tecnicas",
                    0.15,
                    &["dominio_ferramentas", "conhecimento_produto"],
                ),
                CategoryRule::new(
                    "habilidades_comportamentais",
                    0.15,
                    &["comunicacao", "colaboracao"],
                ),
                CategoryRule::new(
                    "pontualidade_confiabilidade",
                    0.10,
                    &["pontualidade", "assiduidade"],
                ),
                CategoryRule::new(
                    "ownership_comercial",
                    0.10,
                    &["prospeccao_followup", "organizacao_crm"],
                ),
                CategoryRule::new("evolucao_aprendizagem", 0.05, &["melhoria_continua"]),
            ],
            performance: ThresholdTable { high: 8.0, mid: 6.0 },
            potential: ThresholdTable { high: 8.0, mid: 6.0 },
        }
    }

    /// Startup invariant: category weights must sum to 1.0.
    pub fn validate(&self) -> Result<(), RubricError> {
        let total: f64 = self.categories.iter().map(|rule| rule.weight).sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(RubricError::WeightSum { total });
        }
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&CategoryRule> {
        self.categories.iter().find(|rule| rule.name == name)
    }

    /// Weight table for one computation: the rubric weights with any numeric
    /// entries of a record's `pesos` object layered on top, in category
    /// order. Unknown keys and non-numeric values in the override are
    /// ignored. Returns a fresh table parallel to `categories`.
    pub fn weights_with_overrides(&self, overrides: Option<&Value>) -> Vec<(String, f64)> {
        self.categories
            .iter()
            .map(|rule| {
                let weight = overrides
                    .and_then(|pesos| pesos.get(&rule.name))
                    .and_then(Value::as_f64)
                    .unwrap_or(rule.weight);
                (rule.name.clone(), weight)
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RubricError {
    #[error("category weights sum to {total}, expected 1.0")]
    WeightSum { total: f64 },
}
