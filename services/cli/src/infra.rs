use std::collections::BTreeMap;

use chrono::{Days, Local};
use tender_eval::config::EvaluationDefaults;
use tender_eval::workflows::tender::{
    Candidate, CandidateId, Criterion, CriterionId, FinancialRow, Lot, LotId, Notation, Project,
    ProjectEvaluation,
};

/// Two-lot sample consultation used by the demo command: Atelier Nord is cheapest on
/// lot 1, Bureau Concept is better noted on lot 2, so the allocation shows every bucket.
pub(crate) fn sample_project(defaults: EvaluationDefaults) -> Project {
    let lot_1 = Lot {
        id: LotId("lot-1".to_string()),
        number: 1,
        name: "Printing and reprographics".to_string(),
        candidates: vec![
            candidate("l1-nord", "Atelier Nord"),
            candidate("l1-concept", "Bureau Concept"),
            candidate("l1-sud", "Imprimerie du Sud"),
        ],
        financial_rows: vec![
            row(
                "Black and white page (thousand)",
                120.0,
                &[("l1-nord", 3.1), ("l1-concept", 3.6), ("l1-sud", 3.4)],
            ),
            row(
                "Color page (thousand)",
                40.0,
                &[("l1-nord", 8.2), ("l1-concept", 8.9), ("l1-sud", 8.0)],
            ),
        ],
        criteria: vec![
            criterion("lead-time", "Turnaround time", 10.0),
            criterion("quality", "Print quality", 10.0),
        ],
        notations: vec![
            notation("l1-nord", "lead-time", 3),
            notation("l1-nord", "quality", 3),
            notation("l1-concept", "lead-time", 4),
            notation("l1-concept", "quality", 3),
            notation("l1-sud", "lead-time", 2),
            notation("l1-sud", "quality", 4),
        ],
    };

    let lot_2 = Lot {
        id: LotId("lot-2".to_string()),
        number: 2,
        name: "Signage".to_string(),
        candidates: vec![
            candidate("l2-nord", "Atelier Nord"),
            candidate("l2-concept", "Bureau Concept"),
        ],
        financial_rows: vec![row(
            "Interior panel",
            25.0,
            &[("l2-nord", 60.0), ("l2-concept", 64.0)],
        )],
        criteria: vec![criterion("durability", "Material durability", 5.0)],
        notations: vec![
            notation("l2-nord", "durability", 2),
            notation("l2-concept", "durability", 4),
        ],
    };

    Project {
        consultation_code: "DEMO-2026-001".to_string(),
        buyer: "Ville de Quimper".to_string(),
        requester: "Direction de la communication".to_string(),
        offers_deadline: Local::now().date_naive().checked_add_days(Days::new(30)),
        vat_rate: defaults.vat_rate,
        financial_weight: defaults.financial_weight,
        suppliers_to_select: 1,
        lots: vec![lot_1, lot_2],
    }
}

pub(crate) fn render_evaluation(project: &Project, evaluation: &ProjectEvaluation) {
    println!(
        "Consultation {} for {} (financial weight {:.0}%, technical weight {:.0}%)",
        project.consultation_code,
        project.buyer,
        project.financial_weight,
        project.technical_weight()
    );

    for lot in &evaluation.lots {
        println!("\nLot {}: {}", lot.lot_number, lot.lot_name);
        for offer in &lot.offers {
            println!(
                "  #{} {:<20} final {:>6.2} (financial {:>6.2}, technical {:>6.2})  amount incl. tax {:>10.2}",
                offer.rank_final,
                offer.candidate_name,
                offer.final_score,
                offer.financial_score,
                offer.technical_score,
                offer.amount_incl_tax
            );
        }

        let stats = &lot.statistics;
        match &stats.winner {
            Some(winner) => println!(
                "  Average {:.2}, winner {} at {:.2}, saving {:.2} ({:+.2}%)",
                stats.average,
                winner.candidate_name,
                winner.amount_incl_tax,
                stats.saving_amount,
                stats.saving_percent
            ),
            None => println!("  No valid offer on this lot"),
        }
    }

    println!("\nClassification:");
    for entry in evaluation
        .allocation
        .winners
        .iter()
        .chain(&evaluation.allocation.mixed)
        .chain(&evaluation.allocation.losers)
    {
        println!(
            "  {:<20} {} (won {}, lost {})",
            entry.candidate_name,
            entry.outcome().label(),
            entry.lots_won.len(),
            entry.lots_lost.len()
        );
    }

    println!("\nAward notifications:");
    for entry in &evaluation.allocation.winners {
        let lots: Vec<String> = entry
            .lots_won
            .iter()
            .map(|won| won.lot_number.to_string())
            .collect();
        println!("  {} wins lot(s) {}", entry.candidate_name, lots.join(", "));
    }
    for entry in &evaluation.allocation.mixed {
        let won: Vec<String> = entry
            .lots_won
            .iter()
            .map(|won| won.lot_number.to_string())
            .collect();
        println!(
            "  {} wins lot(s) {} and is notified of rejection elsewhere",
            entry.candidate_name,
            won.join(", ")
        );
    }

    println!("\nRejection notifications:");
    for entry in evaluation
        .allocation
        .losers
        .iter()
        .chain(&evaluation.allocation.mixed)
    {
        for lost in &entry.lots_lost {
            println!("  {}: {}", entry.candidate_name, lost.rationale);
        }
    }
}

fn candidate(id: &str, name: &str) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        company_name: name.to_string(),
    }
}

fn row(designation: &str, quantity: f64, prices: &[(&str, f64)]) -> FinancialRow {
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

fn criterion(id: &str, label: &str, base_points: f64) -> Criterion {
    Criterion {
        id: CriterionId(id.to_string()),
        code: id.to_uppercase(),
        label: label.to_string(),
        base_points,
        group: None,
    }
}

fn notation(candidate_id: &str, criterion_id: &str, score: u8) -> Notation {
    Notation {
        candidate: CandidateId(candidate_id.to_string()),
        criterion: CriterionId(criterion_id.to_string()),
        score,
        comment: None,
    }
}
