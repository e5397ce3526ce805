use std::collections::HashMap;

use super::rounding::round2;
use crate::workflows::tender::domain::{CandidateId, CriterionId, Lot, MAX_NOTE};

/// Per-candidate outcome of the technical pass.
pub(crate) struct TechnicalLine {
    pub candidate: CandidateId,
    pub score: f64,
}

/// Scores every candidate of the lot from the notation grid.
///
/// Each criterion contributes `note / MAX_NOTE x base_points`; the sum is normalized from
/// the lot's total base points onto `technical_weight`, so barèmes need not sum to the
/// configured weight. A lot with no criterion points defined scores 0 for everyone.
pub(crate) fn score_lot(lot: &Lot, technical_weight: f64) -> Vec<TechnicalLine> {
    let total_base: f64 = lot.criteria.iter().map(|criterion| criterion.base_points).sum();

    if total_base <= 0.0 {
        tracing::debug!(lot = %lot.id.0, "no technical bareme defined; lot scores 0 technically");
        return lot
            .candidates
            .iter()
            .map(|candidate| TechnicalLine {
                candidate: candidate.id.clone(),
                score: 0.0,
            })
            .collect();
    }

    // The notation grid is sparse; index it once instead of scanning per pair.
    let notes: HashMap<(&CandidateId, &CriterionId), u8> = lot
        .notations
        .iter()
        .map(|notation| ((&notation.candidate, &notation.criterion), notation.score))
        .collect();

    lot.candidates
        .iter()
        .map(|candidate| {
            let raw_points: f64 = lot
                .criteria
                .iter()
                .map(|criterion| {
                    let note = notes
                        .get(&(&candidate.id, &criterion.id))
                        .copied()
                        .unwrap_or(0);
                    f64::from(note) / f64::from(MAX_NOTE) * criterion.base_points
                })
                .sum();

            TechnicalLine {
                candidate: candidate.id.clone(),
                score: round2(raw_points / total_base * technical_weight),
            }
        })
        .collect()
}
