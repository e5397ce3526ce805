use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for candidates, stable across financial rows, notations, and rankings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for lots within a consultation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LotId(pub String);

/// Identifier wrapper for technical evaluation criteria.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CriterionId(pub String);

/// Top of the evaluation scale; notations run 0 (non-conforming) to 4 (exceeds expectations).
pub const MAX_NOTE: u8 = 4;

/// Immutable snapshot of a consultation case file as supplied by the editing workflow.
///
/// The financial weight is a percentage of the final score; the technical weight is always
/// its complement and is never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub consultation_code: String,
    pub buyer: String,
    pub requester: String,
    pub offers_deadline: Option<NaiveDate>,
    /// Applied to pre-tax amounts when surfacing amounts including tax, e.g. `0.2` for 20%.
    pub vat_rate: f64,
    /// Percentage in `0..=100`; the editing workflow enforces the bound.
    pub financial_weight: f64,
    pub suppliers_to_select: u32,
    pub lots: Vec<Lot>,
}

impl Project {
    /// Derived complement of the financial weight.
    pub fn technical_weight(&self) -> f64 {
        100.0 - self.financial_weight
    }
}

/// An independently awarded sub-portion of the consultation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    pub number: u32,
    pub name: String,
    pub candidates: Vec<Candidate>,
    pub financial_rows: Vec<FinancialRow>,
    pub criteria: Vec<Criterion>,
    /// Sparse notation grid; a missing (candidate, criterion) pair counts as note 0.
    pub notations: Vec<Notation>,
}

impl Lot {
    pub fn candidate_name(&self, id: &CandidateId) -> Option<&str> {
        self.candidates
            .iter()
            .find(|candidate| &candidate.id == id)
            .map(|candidate| candidate.company_name.as_str())
    }

    pub fn notation(&self, candidate: &CandidateId, criterion: &CriterionId) -> Option<&Notation> {
        self.notations
            .iter()
            .find(|notation| &notation.candidate == candidate && &notation.criterion == criterion)
    }
}

/// A bidder submitting an offer on the lot. The display name (raison sociale) is what the
/// multi-lot classifier correlates across lots; it is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub company_name: String,
}

/// A priced line item of the financial grid (BPU/DPGF line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRow {
    pub designation: String,
    /// May be fractional (hours, tonnes, ...).
    pub quantity: f64,
    /// Unit price offered per candidate; a candidate absent from the map offered 0.
    pub unit_prices: BTreeMap<CandidateId, f64>,
}

impl FinancialRow {
    pub fn unit_price(&self, candidate: &CandidateId) -> f64 {
        self.unit_prices.get(candidate).copied().unwrap_or(0.0)
    }
}

/// A technical evaluation dimension with its allocated point weight (bareme).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub code: String,
    pub label: String,
    /// Non-negative; barèmes need not sum to the technical weight, scoring normalizes.
    pub base_points: f64,
    /// Display grouping only; never influences scoring.
    pub group: Option<CriterionGroup>,
}

/// Optional 3-level hierarchy metadata used to group criteria in rendered grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionGroup {
    pub criterion_code: String,
    pub criterion_label: String,
    pub sub_criterion_code: String,
    pub sub_criterion_label: String,
}

/// The note an evaluator assigned a candidate on one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notation {
    pub candidate: CandidateId,
    pub criterion: CriterionId,
    /// Expected in `0..=MAX_NOTE`; the editing workflow enforces the scale.
    pub score: u8,
    pub comment: Option<String>,
}
