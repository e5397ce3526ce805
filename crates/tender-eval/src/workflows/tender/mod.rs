//! Offer evaluation and multi-lot allocation for procurement consultations.
//!
//! The editing workflow owns the mutable case file; everything here is pure derivation
//! over immutable snapshots, recomputed on every relevant input change.

pub mod allocation;
pub mod domain;
pub mod evaluation;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use allocation::{
    classify, AllocationOutcome, CandidateAllocation, LostLot, NameMatching,
    ProcedureAllocation, WonLot,
};
pub use domain::{
    Candidate, CandidateId, Criterion, CriterionGroup, CriterionId, FinancialRow, Lot, LotId,
    Notation, Project, MAX_NOTE,
};
pub use evaluation::{
    EvaluationConfig, EvaluationEngine, LotRanking, LotStatistics, ProjectEvaluation,
    RankedOffer, TieBreak, WinningOffer,
};
pub use snapshot::SnapshotError;
