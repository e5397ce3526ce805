use super::rounding::round2;
use crate::workflows::tender::domain::{CandidateId, Lot};

/// Per-candidate outcome of the financial pass: the lot total and its normalized score.
pub(crate) struct FinancialLine {
    pub candidate: CandidateId,
    /// Pre-tax total over the financial grid, already rounded for surfacing.
    pub amount: f64,
    pub score: f64,
}

/// Sums a candidate's offer over every row of the financial grid; a row where the
/// candidate left no unit price contributes 0.
pub(crate) fn lot_amount(lot: &Lot, candidate: &CandidateId) -> f64 {
    lot.financial_rows
        .iter()
        .map(|row| row.quantity * row.unit_price(candidate))
        .sum()
}

/// Scores every candidate of the lot against the lowest strictly-positive total.
///
/// The cheapest positive offer receives exactly `financial_weight`; others receive
/// `min / amount x weight`. A non-positive total is an invalid offer, not a free one,
/// and scores 0. When no candidate has a positive total the whole lot scores 0.
pub(crate) fn score_lot(lot: &Lot, financial_weight: f64) -> Vec<FinancialLine> {
    let amounts: Vec<f64> = lot
        .candidates
        .iter()
        .map(|candidate| round2(lot_amount(lot, &candidate.id)))
        .collect();

    let min_positive = amounts
        .iter()
        .copied()
        .filter(|amount| *amount > 0.0)
        .fold(None, |best: Option<f64>, amount| match best {
            Some(current) if current <= amount => Some(current),
            _ => Some(amount),
        });

    if min_positive.is_none() {
        tracing::debug!(lot = %lot.id.0, "no positive financial offer; lot scores 0 financially");
    }

    lot.candidates
        .iter()
        .zip(amounts)
        .map(|(candidate, amount)| {
            let score = match min_positive {
                Some(min) if amount > 0.0 => round2(min / amount * financial_weight),
                _ => 0.0,
            };
            FinancialLine {
                candidate: candidate.id.clone(),
                amount,
                score,
            }
        })
        .collect()
}
