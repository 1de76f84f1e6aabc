//! ransom-check CLI entry point
//!
//! Checks a CSS ransom note project against the exercise requirements.

use clap::Parser;
use ransom_check::cli::args::{Args, CheckArgs, Command};
use ransom_check::cli::init_logging;
use ransom_check::cli::output::{get_formatter, SilentReporter, TerminalReporter};
use ransom_check::engine::orchestrator::create_all_checks;
use ransom_check::engine::result::ValidationReport;
use ransom_check::version::get_build_info;
use ransom_check::{run_validation, ValidatorConfig, ValidatorError};

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match Args::parse().into_command() {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => {
            print_check_list();
            ExitCode::SUCCESS
        }
        Command::Check(args) => run_checks(&args),
    }
}

fn print_check_list() {
    println!("Available checks:");
    println!();
    for check in create_all_checks() {
        println!("  {:<18} {:<11} {}", check.id, check.source.to_string(), check.description);
    }
}

fn run_checks(args: &CheckArgs) -> ExitCode {
    init_logging(args.verbose);

    let config = ValidatorConfig::from_args(args);
    tracing::debug!(?config, "starting validation");

    let outcome = match get_formatter(args.format) {
        None => {
            let stdout = io::stdout();
            let mut reporter = TerminalReporter::new(stdout.lock(), !args.no_color, args.quiet);
            run_validation(&config, &mut reporter)
        }
        Some(formatter) => run_validation(&config, &mut SilentReporter).and_then(|report| {
            println!("{}", formatter.format(&report)?);
            Ok(report)
        }),
    };

    exit_code(outcome)
}

fn exit_code(outcome: Result<ValidationReport, ValidatorError>) -> ExitCode {
    match outcome {
        Ok(report) if report.overall_passed => ExitCode::SUCCESS,
        Ok(report) => {
            tracing::debug!(failed = report.summary().failed, "validation failed");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error during validation: {}", e);
            ExitCode::from(1)
        }
    }
}
