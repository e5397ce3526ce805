use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::evaluation::{LotRanking, RankedOffer};
use crate::workflows::tender::domain::LotId;

/// How candidate display names are correlated across lots.
///
/// Candidates bidding on several lots carry lot-scoped identifiers, so the classifier
/// matches by raison sociale. `Exact` preserves the historical behavior; `Normalized`
/// folds case and common diacritics for callers that want the tightened policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameMatching {
    #[default]
    Exact,
    Normalized,
}

impl NameMatching {
    fn key(self, name: &str) -> String {
        match self {
            NameMatching::Exact => name.to_string(),
            NameMatching::Normalized => name
                .chars()
                .map(fold_diacritic)
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' | 'À' | 'Â' | 'Ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'î' | 'ï' | 'Î' | 'Ï' => 'i',
        'ô' | 'ö' | 'Ô' | 'Ö' => 'o',
        'ù' | 'û' | 'ü' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        other => other,
    }
}

/// Cross-lot classification of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationOutcome {
    Winner,
    Loser,
    Mixed,
}

impl AllocationOutcome {
    pub const fn label(self) -> &'static str {
        match self {
            AllocationOutcome::Winner => "winner",
            AllocationOutcome::Loser => "loser",
            AllocationOutcome::Mixed => "mixed",
        }
    }
}

/// A lot the candidate won, with everything an award notice needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WonLot {
    pub lot_id: LotId,
    pub lot_number: u32,
    pub lot_name: String,
    pub final_score: f64,
    pub financial_score: f64,
    pub technical_score: f64,
    pub amount_incl_tax: f64,
}

/// A lot the candidate lost, carrying the comparative basis a rejection notice must show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostLot {
    pub lot_id: LotId,
    pub lot_number: u32,
    pub lot_name: String,
    pub rank_final: u32,
    pub final_score: f64,
    pub financial_score: f64,
    pub technical_score: f64,
    pub winner_name: String,
    pub winner_final_score: f64,
    pub winner_financial_score: f64,
    pub winner_technical_score: f64,
    /// Free text stating the comparative basis of the rejection.
    pub rationale: String,
}

/// Everything known about one candidate across the lots of the procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAllocation {
    pub candidate_name: String,
    pub lots_won: Vec<WonLot>,
    pub lots_lost: Vec<LostLot>,
}

impl CandidateAllocation {
    pub fn outcome(&self) -> AllocationOutcome {
        match (self.lots_won.is_empty(), self.lots_lost.is_empty()) {
            (false, false) => AllocationOutcome::Mixed,
            (false, true) => AllocationOutcome::Winner,
            _ => AllocationOutcome::Loser,
        }
    }
}

/// The three disjoint buckets driving award and rejection notifications.
///
/// Their union is exactly the set of candidates holding at least one valid offer in at
/// least one ranked lot; lots without valid offers contribute nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureAllocation {
    pub winners: Vec<CandidateAllocation>,
    pub losers: Vec<CandidateAllocation>,
    pub mixed: Vec<CandidateAllocation>,
}

impl ProcedureAllocation {
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty() && self.losers.is_empty() && self.mixed.is_empty()
    }
}

/// Aggregates per-lot rankings into the winner / loser / mixed partition.
pub fn classify(lots: &[LotRanking], matching: NameMatching) -> ProcedureAllocation {
    // First-seen order of candidate names, so output is stable across recomputation.
    let mut allocations: Vec<CandidateAllocation> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for ranking in lots {
        let Some(winner) = ranking.winner_offer() else {
            continue;
        };

        for offer in ranking.valid_offers() {
            let key = matching.key(&offer.candidate_name);
            let index = *by_name.entry(key).or_insert_with(|| {
                allocations.push(CandidateAllocation {
                    candidate_name: offer.candidate_name.clone(),
                    lots_won: Vec::new(),
                    lots_lost: Vec::new(),
                });
                allocations.len() - 1
            });

            if offer.candidate_id == winner.candidate_id {
                allocations[index].lots_won.push(won_lot(ranking, offer));
            } else {
                allocations[index]
                    .lots_lost
                    .push(lost_lot(ranking, offer, winner));
            }
        }
    }

    let mut partition = ProcedureAllocation {
        winners: Vec::new(),
        losers: Vec::new(),
        mixed: Vec::new(),
    };
    for allocation in allocations {
        match allocation.outcome() {
            AllocationOutcome::Winner => partition.winners.push(allocation),
            AllocationOutcome::Loser => partition.losers.push(allocation),
            AllocationOutcome::Mixed => partition.mixed.push(allocation),
        }
    }
    partition
}

fn won_lot(ranking: &LotRanking, offer: &RankedOffer) -> WonLot {
    WonLot {
        lot_id: ranking.lot_id.clone(),
        lot_number: ranking.lot_number,
        lot_name: ranking.lot_name.clone(),
        final_score: offer.final_score,
        financial_score: offer.financial_score,
        technical_score: offer.technical_score,
        amount_incl_tax: offer.amount_incl_tax,
    }
}

fn lost_lot(ranking: &LotRanking, offer: &RankedOffer, winner: &RankedOffer) -> LostLot {
    // The notice compares against the valid-offer count, so the rank is restated among
    // valid offers too; `rank_final` alone spans the full table, invalid offers included.
    let rank_among_valid = ranking
        .valid_offers()
        .filter(|other| other.rank_final <= offer.rank_final)
        .count();
    let rationale = format!(
        "Offer ranked {} of {} on lot {} ({}): final score {:.2} points against {:.2} for {}.",
        rank_among_valid,
        ranking.statistics.valid_offer_count,
        ranking.lot_number,
        ranking.lot_name,
        offer.final_score,
        winner.final_score,
        winner.candidate_name,
    );

    LostLot {
        lot_id: ranking.lot_id.clone(),
        lot_number: ranking.lot_number,
        lot_name: ranking.lot_name.clone(),
        rank_final: offer.rank_final,
        final_score: offer.final_score,
        financial_score: offer.financial_score,
        technical_score: offer.technical_score,
        winner_name: winner.candidate_name.clone(),
        winner_final_score: winner.final_score,
        winner_financial_score: winner.financial_score,
        winner_technical_score: winner.technical_score,
        rationale,
    }
}
