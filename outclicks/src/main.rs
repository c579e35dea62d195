use clap::{Parser, Subcommand};
use outclicks_core::analysis::AnalysisError;
use outclicks_core::cli;
use outclicks_core::cli::stats::StatsArgs;
use outclicks_core::logging::{LogFormat, default_log_format, init_logging};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "outclicks",
    version,
    about = "outclicks: outbound click-through statistics from access logs"
)]
struct Cli {
    /// Diagnostic output format on stderr (default: pretty on a terminal, json otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute exit-click statistics for an access log (default)
    Stats(StatsArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::Stats(args)) => cli::stats::run(args),
        Some(Command::Config { cmd }) => cli::conf::run(cmd),
        None => cli::stats::run(StatsArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Budget exhaustion was already reported line by line; stop silently.
            if !matches!(
                err.downcast_ref::<AnalysisError>(),
                Some(AnalysisError::BudgetExhausted { .. })
            ) {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
