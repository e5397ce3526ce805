use crate::demo::{run_demo, run_evaluate, DemoArgs, EvaluateArgs};
use clap::{Parser, Subcommand};
use tender_eval::config::AppConfig;
use tender_eval::error::AppError;
use tender_eval::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Tender Evaluation Desk",
    about = "Evaluate procurement case files and derive award/rejection sets from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a case-file snapshot and print rankings and the cross-lot allocation
    Evaluate(EvaluateArgs),
    /// Run the built-in two-lot sample consultation end to end (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args, &config),
    }
}
