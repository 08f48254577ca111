use crate::demo::{run_demo, run_resolve, run_validate, DemoArgs, ResolveArgs, ValidateArgs};
use clap::{Parser, Subcommand};
use referral_desk::config::AppConfig;
use referral_desk::error::AppError;
use referral_desk::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Referral Desk",
    about = "Inspect and exercise the automatic referral-assignment engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end walkthrough of config editing and referral routing (default command)
    Demo(DemoArgs),
    /// Work with stored assignment configurations
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Resolve a single student against an assignment configuration
    Resolve(ResolveArgs),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Check a configuration file for malformed ranges, overlaps, and empty labels
    Validate(ValidateArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "referral desk console starting");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Config {
            command: ConfigCommand::Validate(args),
        } => run_validate(args),
        Command::Resolve(args) => run_resolve(args),
    }
}
