use std::collections::BTreeMap;

use crate::workflows::tender::allocation::NameMatching;
use crate::workflows::tender::domain::{
    Candidate, CandidateId, Criterion, CriterionId, FinancialRow, Lot, LotId, Notation, Project,
};
use crate::workflows::tender::evaluation::{EvaluationConfig, EvaluationEngine, TieBreak};

pub(super) fn candidate(id: &str, name: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        company_name: name.to_string(),
    }
}

pub(super) fn row(designation: &str, quantity: f64, prices: &[(&str, f64)]) -> FinancialRow {
    let unit_prices: BTreeMap<CandidateId, f64> = prices
        .iter()
        .map(|(id, price)| (CandidateId(id.to_string()), *price))
        .collect();
    FinancialRow {
        designation: designation.to_string(),
        quantity,
        unit_prices,
    }
}

pub(super) fn criterion(id: &str, base_points: f64) -> Criterion {
    Criterion {
        id: CriterionId(id.to_string()),
        code: id.to_uppercase(),
        label: format!("Criterion {id}"),
        base_points,
        group: None,
    }
}

pub(super) fn notation(candidate: &str, criterion: &str, score: u8) -> Notation {
    Notation {
        candidate: CandidateId(candidate.to_string()),
        criterion: CriterionId(criterion.to_string()),
        score,
        comment: None,
    }
}

pub(super) fn empty_lot(number: u32, name: &str) -> Lot {
    Lot {
        id: LotId(format!("lot-{number}")),
        number,
        name: name.to_string(),
        candidates: Vec::new(),
        financial_rows: Vec::new(),
        criteria: Vec::new(),
        notations: Vec::new(),
    }
}

/// Two candidates, pre-tax totals 100 and 120, one criterion noted 4 and 2.
pub(super) fn two_candidate_lot() -> Lot {
    let mut lot = empty_lot(1, "Cleaning services");
    lot.candidates = vec![candidate("acme", "Acme"), candidate("bravo", "Bravo")];
    lot.financial_rows = vec![row("Monthly service", 10.0, &[("acme", 10.0), ("bravo", 12.0)])];
    lot.criteria = vec![criterion("c1", 10.0)];
    lot.notations = vec![notation("acme", "c1", 4), notation("bravo", "c1", 2)];
    lot
}

pub(super) fn engine(financial_weight: f64, vat_rate: f64) -> EvaluationEngine {
    EvaluationEngine::new(config(financial_weight, vat_rate))
}

pub(super) fn config(financial_weight: f64, vat_rate: f64) -> EvaluationConfig {
    EvaluationConfig {
        financial_weight,
        vat_rate,
        tie_break: TieBreak::default(),
        name_matching: NameMatching::default(),
    }
}

pub(super) fn project(financial_weight: f64, vat_rate: f64, lots: Vec<Lot>) -> Project {
    Project {
        consultation_code: "2026-DSI-014".to_string(),
        buyer: "Ville de Rennes".to_string(),
        requester: "Direction des achats".to_string(),
        offers_deadline: None,
        vat_rate,
        financial_weight,
        suppliers_to_select: 1,
        lots,
    }
}
