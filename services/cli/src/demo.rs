use std::path::PathBuf;

use clap::Args;
use tender_eval::config::AppConfig;
use tender_eval::error::AppError;
use tender_eval::workflows::tender::{
    snapshot, EvaluationConfig, EvaluationEngine, NameMatching, SnapshotError, TieBreak,
};

use crate::infra::{render_evaluation, sample_project};

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to the case-file snapshot (JSON) exported by the editing workflow
    pub(crate) snapshot: PathBuf,
    /// Emit machine-readable JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Correlate candidates across lots ignoring case and diacritics
    #[arg(long)]
    pub(crate) normalized_names: bool,
    /// Break score ties by the lower offer amount instead of candidate list order
    #[arg(long)]
    pub(crate) cheapest_wins_ties: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the sample consultation's financial weight percentage
    #[arg(long)]
    pub(crate) financial_weight: Option<f64>,
    /// Emit machine-readable JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
    /// Print the sample case file as a JSON snapshot (feed it back to `evaluate`) and exit
    #[arg(long)]
    pub(crate) snapshot: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let project = snapshot::load_project(&args.snapshot)?;

    let mut config = EvaluationConfig::for_project(&project);
    if args.normalized_names {
        config.name_matching = NameMatching::Normalized;
    }
    if args.cheapest_wins_ties {
        config.tie_break = TieBreak::LowestAmount;
    }

    let engine = EvaluationEngine::new(config);
    tracing::info!(
        consultation = %project.consultation_code,
        lots = project.lots.len(),
        financial_weight = engine.config().financial_weight,
        technical_weight = engine.config().technical_weight(),
        "evaluating case-file snapshot"
    );
    let evaluation = engine.evaluate(&project);

    if args.json {
        let raw = serde_json::to_string_pretty(&evaluation).map_err(SnapshotError::Malformed)?;
        println!("{raw}");
    } else {
        render_evaluation(&project, &evaluation);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut defaults = config.evaluation;
    if let Some(weight) = args.financial_weight {
        defaults.financial_weight = weight;
    }

    let project = sample_project(defaults);
    if args.snapshot {
        println!("{}", snapshot::to_json(&project)?);
        return Ok(());
    }

    let evaluation = EvaluationEngine::for_project(&project).evaluate(&project);

    if args.json {
        let raw = serde_json::to_string_pretty(&evaluation).map_err(SnapshotError::Malformed)?;
        println!("{raw}");
    } else {
        println!("Tender evaluation demo");
        render_evaluation(&project, &evaluation);
    }
    Ok(())
}
