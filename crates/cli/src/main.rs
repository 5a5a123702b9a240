// verdict CLI - compare a report's test outcomes against a golden reference

mod compare;
mod exit_codes;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use compare::OutputFlags;
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "verdict")]
#[command(about = "Reconcile test results against a golden reference")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). VERDICT_LOG overrides.
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a report against a golden result file and write a colour-coded report
    #[command(after_help = "\
Exit code 0 means the report artifact was written, even when tests differ.
Pass --fail-on-mismatch to exit 7 on any mismatch, missing test or count mismatch.

Examples:
  verdict compare golden.json report.json
  verdict compare golden.json report.json -o nightly.xlsx
  verdict compare golden.json report.json --format csv
  verdict compare golden.json report.json --json -q | jq .summary
  verdict compare golden.json report.json --ignore-case --fail-on-mismatch")]
    Compare {
        /// Golden (expected) result file
        golden: PathBuf,

        /// Report (actual) result file
        report: PathBuf,

        /// Output file (default: ComparisonResults.xlsx)
        #[arg(long, short = 'o', env = "VERDICT_OUTPUT")]
        output: Option<PathBuf>,

        /// Report format: xlsx, csv or json (inferred from --output if omitted)
        #[arg(long, short = 'f')]
        format: Option<String>,

        /// Reject documents without a TestingScope field instead of treating them as empty
        #[arg(long)]
        strict_scope: bool,

        /// Treat results that differ only in case as equal
        #[arg(long)]
        ignore_case: bool,

        /// Also print the JSON report to stdout
        #[arg(long)]
        json: bool,

        /// Exit 7 when any discrepancy is found
        #[arg(long)]
        fail_on_mismatch: bool,

        /// Suppress the summary and success lines (warnings still print)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Run a comparison described by a TOML job file
    #[command(after_help = "\
Examples:
  verdict run nightly.toml
  verdict run nightly.toml -o out/result.csv
  verdict run nightly.toml --json --fail-on-mismatch")]
    Run {
        /// Path to the job .toml file
        config: PathBuf,

        /// Output file (overrides [output] path in the config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Also print the JSON report to stdout
        #[arg(long)]
        json: bool,

        /// Exit 7 when any discrepancy is found
        #[arg(long)]
        fail_on_mismatch: bool,

        /// Suppress the summary and success lines (warnings still print)
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a job file without running it
    #[command(after_help = "\
Examples:
  verdict validate nightly.toml")]
    Validate {
        /// Path to the job .toml file
        config: PathBuf,

        /// Print the resolved job as JSON
        #[arg(long)]
        json: bool,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  verdict-recon ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        None => {
            // No subcommand = show usage
            eprintln!("Usage: verdict <command> [options]");
            eprintln!("       verdict --help for more information");
            Err(CliError { code: EXIT_USAGE, message: String::new(), hint: None })
        }
        Some(Commands::Compare {
            golden,
            report,
            output,
            format,
            strict_scope,
            ignore_case,
            json,
            fail_on_mismatch,
            quiet,
        }) => compare::cmd_compare(
            golden,
            report,
            output,
            format,
            strict_scope,
            ignore_case,
            OutputFlags { json, fail_on_mismatch, quiet },
        ),
        Some(Commands::Run { config, output, json, fail_on_mismatch, quiet }) => {
            compare::cmd_run(config, output, OutputFlags { json, fail_on_mismatch, quiet })
        }
        Some(Commands::Validate { config, json }) => compare::cmd_validate(config, json),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn eval(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }
}
