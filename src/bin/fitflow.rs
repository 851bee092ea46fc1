//! FitFlow CLI - Command-line entry point for the FitFlow helpers
//!
//! Modes:
//! - --list: List the available helper functions
//! - --demo: Print sample output from a selection of helpers
//!
//! With neither flag the listing is printed along with a hint. The process
//! always exits successfully; failures are reported on stderr.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use fitflow::catalog::write_mode;
use fitflow::{FitflowError, APP_NAME, FITFLOW_VERSION};

/// Environment variable holding the log filter (e.g. "debug", "fitflow=trace")
const LOG_ENV: &str = "FITFLOW_LOG";

/// FitFlow - Fitness-tracking helpers
#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = FITFLOW_VERSION)]
#[command(about = "FitFlow fitness-tracking helpers", long_about = None)]
struct Cli {
    /// List available sections
    #[arg(long)]
    list: bool,

    /// Run demo
    #[arg(long)]
    demo: bool,
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!(
            "{}",
            serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string())
        );
    }

    ExitCode::SUCCESS
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Logs go to stderr so demo output on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), FitflowCliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_mode(cli.list, cli.demo, &mut out)?;

    out.flush()?;
    Ok(())
}

// Error types

#[derive(Debug)]
enum FitflowCliError {
    Io(io::Error),
    Helper(FitflowError),
}

impl From<io::Error> for FitflowCliError {
    fn from(e: io::Error) -> Self {
        FitflowCliError::Io(e)
    }
}

impl From<FitflowError> for FitflowCliError {
    fn from(e: FitflowError) -> Self {
        FitflowCliError::Helper(e)
    }
}

impl std::fmt::Display for FitflowCliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitflowCliError::Io(e) => write!(f, "{e}"),
            FitflowCliError::Helper(e) => write!(f, "{e}"),
        }
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<FitflowCliError> for CliError {
    fn from(e: FitflowCliError) -> Self {
        match e {
            FitflowCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check that stdout is writable".to_string()),
            },
            FitflowCliError::Helper(FitflowError::IoError(e)) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check that stdout is writable".to_string()),
            },
            FitflowCliError::Helper(e) => CliError {
                code: "HELPER_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
        }
    }
}
