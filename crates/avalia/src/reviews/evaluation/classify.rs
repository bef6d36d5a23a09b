use serde_json::Value;

use super::rubric::{
    Rubric, ThresholdTable, PERFORMANCE_CATEGORY, PERFORMANCE_SUBCRITERION, POTENTIAL_CATEGORIES,
};
use super::scoring::{category_subscores, mean};
use crate::reviews::domain::{SubScoreEntry, INSUFFICIENT_DATA};

/// Performance tier, driven solely by the goal-attainment rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Alta,
    Ok,
    Baixa,
    DadosInsuficientes,
}

impl PerformanceTier {
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Alta => "Alta",
            PerformanceTier::Ok => "Ok",
            PerformanceTier::Baixa => "Baixa",
            PerformanceTier::DadosInsuficientes => INSUFFICIENT_DATA,
        }
    }

    pub fn display_phrase(&self) -> &'static str {
        match self {
            PerformanceTier::Alta => "Alta Perf",
            PerformanceTier::Ok => "Ok Perf",
            PerformanceTier::Baixa => "Baixa Perf",
            PerformanceTier::DadosInsuficientes => "Perf Indefinida",
        }
    }
}

/// Potential tier, driven by the culture, behavioral, and learning categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialTier {
    Alto,
    Medio,
    Baixo,
    DadosInsuficientes,
}

impl PotentialTier {
    pub fn label(&self) -> &'static str {
        match self {
            PotentialTier::Alto => "Alto",
            PotentialTier::Medio => "Medio",
            PotentialTier::Baixo => "Baixo",
            PotentialTier::DadosInsuficientes => INSUFFICIENT_DATA,
        }
    }

    pub fn display_phrase(&self) -> &'static str {
        match self {
            PotentialTier::Alto => "Alto Potencial",
            PotentialTier::Medio => "Médio Potencial",
            PotentialTier::Baixo => "Baixo Potencial",
            PotentialTier::DadosInsuficientes => "Potencial Indefinido",
        }
    }
}

pub(crate) fn performance_tier(
    notas: Option<&Value>,
    thresholds: &ThresholdTable,
) -> PerformanceTier {
    let attainment = notas
        .and_then(|value| value.get(PERFORMANCE_CATEGORY))
        .and_then(|category| category.get(PERFORMANCE_SUBCRITERION))
        .and_then(SubScoreEntry::resolve);

    match attainment {
        Some(nota) if nota >= thresholds.high => PerformanceTier::Alta,
        Some(nota) if nota >= thresholds.mid => PerformanceTier::Ok,
        Some(_) => PerformanceTier::Baixa,
        None => PerformanceTier::DadosInsuficientes,
    }
}

/// Mean of the per-category means (not a pooled mean of sub-scores); fully
/// absent categories are left out of the average.
pub(crate) fn potential_tier(notas: Option<&Value>, rubric: &Rubric) -> PotentialTier {
    let mut category_means = Vec::with_capacity(POTENTIAL_CATEGORIES.len());
    for name in POTENTIAL_CATEGORIES {
        let Some(rule) = rubric.category(name) else {
            continue;
        };
        let (scores, _) = category_subscores(notas, rule);
        if let Some(avg) = mean(&scores) {
            category_means.push(avg);
        }
    }

    match mean(&category_means) {
        Some(score) if score >= rubric.potential.high => PotentialTier::Alto,
        Some(score) if score >= rubric.potential.mid => PotentialTier::Medio,
        Some(_) => PotentialTier::Baixo,
        None => PotentialTier::DadosInsuficientes,
    }
}

pub(crate) fn nine_box_label(performance: PerformanceTier, potential: PotentialTier) -> String {
    format!(
        "{} / {}",
        performance.display_phrase(),
        potential.display_phrase()
    )
}
