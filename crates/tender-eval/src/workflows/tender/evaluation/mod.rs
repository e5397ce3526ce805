pub(crate) mod financial;
mod ranking;
pub(crate) mod rounding;
pub(crate) mod technical;

pub use ranking::{LotRanking, LotStatistics, RankedOffer, TieBreak, WinningOffer};

use serde::{Deserialize, Serialize};

use super::allocation::{self, NameMatching, ProcedureAllocation};
use super::domain::{Lot, Project};

/// Weighting and policy knobs for one evaluation run.
///
/// The technical weight is always the complement of the financial weight; it is derived,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub financial_weight: f64,
    pub vat_rate: f64,
    pub tie_break: TieBreak,
    pub name_matching: NameMatching,
}

impl EvaluationConfig {
    /// Default policies with the weighting the case file carries.
    pub fn for_project(project: &Project) -> Self {
        Self {
            financial_weight: project.financial_weight,
            vat_rate: project.vat_rate,
            tie_break: TieBreak::default(),
            name_matching: NameMatching::default(),
        }
    }

    pub fn technical_weight(&self) -> f64 {
        100.0 - self.financial_weight
    }
}

/// Stateless evaluator deriving rankings and the cross-lot allocation from an immutable
/// case-file snapshot. Recomputed on demand; never the source of truth.
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn for_project(project: &Project) -> Self {
        Self::new(EvaluationConfig::for_project(project))
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Ranks one lot, or `None` for a lot with no candidates, which never appears in
    /// ranked output.
    pub fn rank_lot(&self, lot: &Lot) -> Option<LotRanking> {
        if lot.candidates.is_empty() {
            tracing::debug!(lot = %lot.id.0, "lot has no candidates; skipping");
            return None;
        }

        let financial = financial::score_lot(lot, self.config.financial_weight);
        let technical = technical::score_lot(lot, self.config.technical_weight());

        Some(ranking::rank_lot(
            lot,
            &financial,
            &technical,
            self.config.vat_rate,
            self.config.tie_break,
        ))
    }

    /// Evaluates every lot of the case file and classifies candidates across lots.
    pub fn evaluate(&self, project: &Project) -> ProjectEvaluation {
        let lots: Vec<LotRanking> = project
            .lots
            .iter()
            .filter_map(|lot| self.rank_lot(lot))
            .collect();
        let allocation = allocation::classify(&lots, self.config.name_matching);

        ProjectEvaluation { lots, allocation }
    }
}

/// Complete engine output for one consultation: per-lot rankings plus the cross-lot
/// winner / loser / mixed partition feeding notification builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEvaluation {
    pub lots: Vec<LotRanking>,
    pub allocation: ProcedureAllocation,
}
