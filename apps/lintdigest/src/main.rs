//! lintdigest CLI binary entry point.
//! Resolves settings, reads the input, and prints the digest.

use clap::Parser;
use lintdigest::cli::Cli;
use lintdigest::config::{self, OutputMode};
use lintdigest::utils::{error_prefix, note_prefix, read_input};
use lintdigest::{aggregate, output};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let eff = match config::resolve_effective(cli.into(), |key| std::env::var(key).ok()) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return ExitCode::from(2);
        }
    };
    debug!(
        input = %eff.input_label(),
        output = ?eff.output,
        order = ?eff.order,
        "resolved settings"
    );

    let text = match read_input(eff.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{} {}", error_prefix(), e);
            return ExitCode::from(2);
        }
    };

    let digest = aggregate::digest(&text);
    if digest.is_empty() && eff.output == OutputMode::Human {
        eprintln!(
            "{} No linter messages recognized in {}",
            note_prefix(),
            eff.input_label()
        );
    }
    output::print_digest(&digest, eff.output, eff.order, eff.use_colors());
    ExitCode::SUCCESS
}
