//! CLI argument parsing via `clap`.

use crate::config::{CategoryOrder, CliArgs, ColorChoice, OutputMode};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "lintdigest",
    version,
    about = "Digest long pylint/mypy output into a per-file summary",
    long_about = "lintdigest — group linter messages by category per file, listing line numbers, and show anything it cannot classify verbatim.\n\nConfiguration precedence: CLI > environment (LINTDIGEST_*) > defaults.",
    after_help = "Examples:\n  lintdigest\n  lintdigest pylint.log --order priority\n  mypy src | lintdigest - --output json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Linter output to digest; '-' reads stdin (default: input.txt)")]
    pub input: Option<String>,
    #[arg(long, value_enum, help = "Output mode: human|json (default: human)")]
    pub output: Option<OutputMode>,
    #[arg(long, value_enum, help = "Category order per file: first-seen|priority (default: first-seen)")]
    pub order: Option<CategoryOrder>,
    #[arg(long, value_enum, help = "Colorize human output: auto|always|never (default: auto)")]
    pub color: Option<ColorChoice>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Log parsing and classification details to stderr")]
    pub verbose: bool,
}

impl From<Cli> for CliArgs {
    fn from(cli: Cli) -> Self {
        CliArgs {
            input: cli.input,
            output: cli.output,
            order: cli.order,
            color: cli.color,
            verbose: cli.verbose,
        }
    }
}
