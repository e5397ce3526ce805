mod cli;
mod demo;
mod infra;

use tender_eval::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
