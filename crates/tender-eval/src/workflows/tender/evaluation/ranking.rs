use serde::{Deserialize, Serialize};

use super::financial::FinancialLine;
use super::rounding::round2;
use super::technical::TechnicalLine;
use crate::workflows::tender::domain::{CandidateId, Lot, LotId};

/// Secondary comparator applied when two offers hold equal scores.
///
/// The historical behavior keeps the candidates' position in the lot's candidate list;
/// `LowestAmount` is the opt-in alternative favoring the cheaper offer on ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    #[default]
    InsertionOrder,
    LowestAmount,
}

/// One candidate's line in the ranked offer table of a lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOffer {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub amount_pre_tax: f64,
    pub amount_incl_tax: f64,
    pub financial_score: f64,
    pub technical_score: f64,
    pub final_score: f64,
    pub rank_final: u32,
    pub rank_financial: u32,
    pub rank_technical: u32,
}

impl RankedOffer {
    /// An offer counts toward statistics and classification only when it carries money.
    pub fn is_valid(&self) -> bool {
        self.amount_incl_tax > 0.0
    }
}

/// The winning valid offer of a lot, as surfaced in statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinningOffer {
    pub candidate_name: String,
    pub amount_incl_tax: f64,
}

/// Descriptive statistics over the lot's valid (positive-amount) offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotStatistics {
    pub valid_offer_count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub winner: Option<WinningOffer>,
    /// `average - winner` amount; what awarding the best offer saves against the mean.
    pub saving_amount: f64,
    /// Signed percentage of the average; negative when the winner undercuts the mean.
    pub saving_percent: f64,
}

/// Complete ranked output for one lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRanking {
    pub lot_id: LotId,
    pub lot_number: u32,
    pub lot_name: String,
    pub offers: Vec<RankedOffer>,
    pub statistics: LotStatistics,
}

impl LotRanking {
    pub fn valid_offers(&self) -> impl Iterator<Item = &RankedOffer> {
        self.offers.iter().filter(|offer| offer.is_valid())
    }

    /// The valid offer holding final rank 1, falling back to the first valid offer when
    /// rank 1 went to an invalid one. This is the same offer `statistics.winner` names.
    pub(crate) fn winner_offer(&self) -> Option<&RankedOffer> {
        self.valid_offers()
            .find(|offer| offer.rank_final == 1)
            .or_else(|| self.valid_offers().next())
    }
}

/// Assembles the per-lot ranked table from the financial and technical passes.
///
/// `financial` and `technical` are both in candidate insertion order, one line per
/// candidate of the lot.
pub(crate) fn rank_lot(
    lot: &Lot,
    financial: &[FinancialLine],
    technical: &[TechnicalLine],
    vat_rate: f64,
    tie_break: TieBreak,
) -> LotRanking {
    let amounts_incl_tax: Vec<f64> = financial
        .iter()
        .map(|line| round2(line.amount * (1.0 + vat_rate)))
        .collect();
    let final_scores: Vec<f64> = financial
        .iter()
        .zip(technical)
        .map(|(fin, tech)| round2(fin.score + tech.score))
        .collect();

    debug_assert!(financial
        .iter()
        .zip(technical)
        .all(|(fin, tech)| fin.candidate == tech.candidate));

    let financial_scores: Vec<f64> = financial.iter().map(|line| line.score).collect();
    let technical_scores: Vec<f64> = technical.iter().map(|line| line.score).collect();

    let ranks_final = assign_ranks(&final_scores, &amounts_incl_tax, tie_break);
    let ranks_financial = assign_ranks(&financial_scores, &amounts_incl_tax, tie_break);
    let ranks_technical = assign_ranks(&technical_scores, &amounts_incl_tax, tie_break);

    let offers: Vec<RankedOffer> = lot
        .candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| RankedOffer {
            candidate_id: financial[index].candidate.clone(),
            candidate_name: candidate.company_name.clone(),
            amount_pre_tax: financial[index].amount,
            amount_incl_tax: amounts_incl_tax[index],
            financial_score: financial[index].score,
            technical_score: technical[index].score,
            final_score: final_scores[index],
            rank_final: ranks_final[index],
            rank_financial: ranks_financial[index],
            rank_technical: ranks_technical[index],
        })
        .collect();

    let statistics = statistics(&lot.id, &offers);

    LotRanking {
        lot_id: lot.id.clone(),
        lot_number: lot.number,
        lot_name: lot.name.clone(),
        offers,
        statistics,
    }
}

/// Ranks are 1 + the number of offers ahead in the stable descending order, so ties take
/// distinct consecutive ranks decided by the tie-break and the rank set is exactly `1..=N`.
fn assign_ranks(scores: &[f64], amounts: &[f64], tie_break: TieBreak) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b].total_cmp(&scores[a]).then_with(|| match tie_break {
            TieBreak::InsertionOrder => a.cmp(&b),
            TieBreak::LowestAmount => amounts[a].total_cmp(&amounts[b]).then(a.cmp(&b)),
        })
    });

    let mut ranks = vec![0u32; scores.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position as u32 + 1;
    }
    ranks
}

fn statistics(lot_id: &LotId, offers: &[RankedOffer]) -> LotStatistics {
    let valid: Vec<&RankedOffer> = offers.iter().filter(|offer| offer.is_valid()).collect();

    if valid.is_empty() {
        tracing::debug!(lot = %lot_id.0, "no valid offer on lot; statistics degenerate to zero");
        return LotStatistics {
            valid_offer_count: 0,
            average: 0.0,
            min: 0.0,
            max: 0.0,
            winner: None,
            saving_amount: 0.0,
            saving_percent: 0.0,
        };
    }

    let sum: f64 = valid.iter().map(|offer| offer.amount_incl_tax).sum();
    let average = round2(sum / valid.len() as f64);
    let min = round2(valid.iter().map(|offer| offer.amount_incl_tax).fold(f64::MAX, f64::min));
    let max = round2(valid.iter().map(|offer| offer.amount_incl_tax).fold(f64::MIN, f64::max));

    let winner = valid
        .iter()
        .find(|offer| offer.rank_final == 1)
        .copied()
        .unwrap_or(valid[0]);

    let saving_amount = round2(average - winner.amount_incl_tax);
    let saving_percent = if average > 0.0 {
        round2(-(average - winner.amount_incl_tax) / average * 100.0)
    } else {
        0.0
    };

    LotStatistics {
        valid_offer_count: valid.len(),
        average,
        min,
        max,
        winner: Some(WinningOffer {
            candidate_name: winner.candidate_name.clone(),
            amount_incl_tax: winner.amount_incl_tax,
        }),
        saving_amount,
        saving_percent,
    }
}
