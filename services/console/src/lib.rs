mod cli;
mod demo;
mod infra;

use referral_desk::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
