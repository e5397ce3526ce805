use super::common::*;

#[test]
fn final_score_is_the_rounded_sum_of_both_passes() {
    let lot = two_candidate_lot();
    let ranking = engine(60.0, 0.2).rank_lot(&lot).expect("ranked lot");

    let acme = &ranking.offers[0];
    assert_eq!(lot.candidate_name(&acme.candidate_id), Some("Acme"));
    assert_eq!(acme.financial_score, 60.0);
    assert_eq!(acme.technical_score, 40.0);
    assert_eq!(acme.final_score, 100.0);
    assert_eq!(acme.amount_incl_tax, 120.0);

    let bravo = &ranking.offers[1];
    assert_eq!(bravo.final_score, 70.0);
    assert_eq!(bravo.amount_incl_tax, 144.0);
}

#[test]
fn three_rankings_are_independent() {
    // Acme is cheap but poorly noted; Bravo is expensive but excellent.
    let mut lot = two_candidate_lot();
    lot.notations = vec![notation("acme", "c1", 0), notation("bravo", "c1", 4)];

    let ranking = engine(50.0, 0.0).rank_lot(&lot).expect("ranked lot");

    let acme = &ranking.offers[0];
    let bravo = &ranking.offers[1];
    assert_eq!(acme.rank_financial, 1);
    assert_eq!(acme.rank_technical, 2);
    assert_eq!(bravo.rank_financial, 2);
    assert_eq!(bravo.rank_technical, 1);
    // Final: acme 50.0 vs bravo 41.67 + 50.0 = 91.67.
    assert_eq!(bravo.rank_final, 1);
    assert_eq!(acme.rank_final, 2);
}

#[test]
fn equal_scores_rank_by_candidate_list_order() {
    let mut lot = two_candidate_lot();
    lot.financial_rows = vec![row("Monthly service", 10.0, &[("acme", 10.0), ("bravo", 10.0)])];
    lot.notations = vec![notation("acme", "c1", 2), notation("bravo", "c1", 2)];

    let ranking = engine(60.0, 0.2).rank_lot(&lot).expect("ranked lot");

    assert_eq!(ranking.offers[0].final_score, ranking.offers[1].final_score);
    assert_eq!(ranking.offers[0].rank_final, 1);
    assert_eq!(ranking.offers[1].rank_final, 2);
}

#[test]
fn lowest_amount_tie_break_prefers_the_cheaper_offer() {
    use crate::workflows::tender::evaluation::{EvaluationEngine, TieBreak};

    // Weight the finances at zero and drop the bareme so every final score ties at 0.
    let mut lot = two_candidate_lot();
    lot.criteria.clear();
    lot.notations.clear();

    let mut tie_config = config(0.0, 0.0);
    tie_config.tie_break = TieBreak::LowestAmount;
    let ranking = EvaluationEngine::new(tie_config)
        .rank_lot(&lot)
        .expect("ranked lot");

    // Acme (100) beats Bravo (120) on the tie even though both score 0.
    assert_eq!(ranking.offers[0].rank_final, 1);
    assert_eq!(ranking.offers[1].rank_final, 2);

    // Flip the list order; the cheaper offer still wins the tie.
    lot.candidates.reverse();
    let ranking = EvaluationEngine::new(tie_config)
        .rank_lot(&lot)
        .expect("ranked lot");
    assert_eq!(ranking.offers[0].candidate_name, "Bravo");
    assert_eq!(ranking.offers[0].rank_final, 2);
    assert_eq!(ranking.offers[1].rank_final, 1);
}

#[test]
fn ranks_partition_one_to_n() {
    let mut lot = two_candidate_lot();
    lot.candidates.push(candidate("carol", "Carol SARL"));
    lot.candidates.push(candidate("dune", "Dune SAS"));
    lot.financial_rows = vec![row(
        "Monthly service",
        1.0,
        &[("acme", 90.0), ("bravo", 110.0), ("carol", 90.0), ("dune", 75.0)],
    )];

    let ranking = engine(60.0, 0.2).rank_lot(&lot).expect("ranked lot");

    let mut ranks: Vec<u32> = ranking.offers.iter().map(|offer| offer.rank_final).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn statistics_summarize_valid_offers() {
    let lot = two_candidate_lot();
    let ranking = engine(60.0, 0.2).rank_lot(&lot).expect("ranked lot");

    let stats = &ranking.statistics;
    assert_eq!(stats.valid_offer_count, 2);
    assert_eq!(stats.average, 132.0);
    assert_eq!(stats.min, 120.0);
    assert_eq!(stats.max, 144.0);

    let winner = stats.winner.as_ref().expect("winner");
    assert_eq!(winner.candidate_name, "Acme");
    assert_eq!(winner.amount_incl_tax, 120.0);
    assert_eq!(stats.saving_amount, 12.0);
    assert_eq!(stats.saving_percent, -9.09);
}

#[test]
fn lot_with_no_candidates_is_skipped() {
    let lot = empty_lot(3, "Deserted lot");
    assert!(engine(60.0, 0.2).rank_lot(&lot).is_none());
}

#[test]
fn lot_with_only_zero_amounts_degenerates_cleanly() {
    let mut lot = two_candidate_lot();
    lot.financial_rows = vec![row("Monthly service", 10.0, &[])];

    let ranking = engine(60.0, 0.2).rank_lot(&lot).expect("ranked lot");

    assert_eq!(ranking.valid_offers().count(), 0);
    let stats = &ranking.statistics;
    assert_eq!(stats.average, 0.0);
    assert!(stats.winner.is_none());
    assert_eq!(stats.saving_amount, 0.0);
    assert_eq!(stats.saving_percent, 0.0);
}

#[test]
fn engine_config_mirrors_the_case_file_weighting() {
    use crate::workflows::tender::evaluation::EvaluationEngine;

    let project = project(70.0, 0.1, vec![two_candidate_lot()]);
    let eval = EvaluationEngine::for_project(&project);

    assert_eq!(eval.config().financial_weight, 70.0);
    assert_eq!(eval.config().technical_weight(), 30.0);
    assert_eq!(eval.config().vat_rate, 0.1);
}

#[test]
fn project_evaluation_skips_candidateless_lots() {
    use crate::workflows::tender::evaluation::EvaluationEngine;

    let project = project(60.0, 0.2, vec![two_candidate_lot(), empty_lot(2, "Deserted")]);
    let evaluation = EvaluationEngine::for_project(&project).evaluate(&project);

    assert_eq!(evaluation.lots.len(), 1);
    assert_eq!(evaluation.lots[0].lot_number, 1);
    assert!(!evaluation.allocation.is_empty());
}

#[test]
fn statistics_winner_falls_back_to_first_valid_offer() {
    // Acme files no prices but aces the bareme; with a 10/90 weighting it takes final
    // rank 1 while holding an invalid (zero) offer.
    let mut lot = two_candidate_lot();
    lot.financial_rows = vec![row("Monthly service", 10.0, &[("bravo", 12.0)])];
    lot.notations = vec![notation("acme", "c1", 4), notation("bravo", "c1", 0)];

    let ranking = engine(10.0, 0.0).rank_lot(&lot).expect("ranked lot");

    assert_eq!(ranking.offers[0].rank_final, 1);
    assert!(!ranking.offers[0].is_valid());

    let winner = ranking.statistics.winner.as_ref().expect("winner");
    assert_eq!(winner.candidate_name, "Bravo");
}
