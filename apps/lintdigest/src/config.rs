//! Effective settings resolution.
//!
//! Merges CLI flags with environment variables and defaults into an
//! `Effective` config. There are no configuration files.
//!
//! Defaults:
//! - `input`: `input.txt` (`LINTDIGEST_INPUT`)
//! - `output`: `human` (`LINTDIGEST_OUTPUT`)
//! - `order`: `first-seen` (`LINTDIGEST_ORDER`)
//! - `color`: `auto`; a set `NO_COLOR` forces `never` unless the CLI says otherwise
//!
//! Overrides precedence: CLI > environment > defaults.

use crate::error::{Error, Result};
use clap::ValueEnum;
use std::io::IsTerminal;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "input.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
/// Report format written to stdout.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
/// Order of category lines within a file block.
pub enum CategoryOrder {
    /// Order in which categories first appear in the file.
    #[default]
    FirstSeen,
    /// Fixed reading order: imports, formatting, docs, typing, then the rest.
    Priority,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default)]
/// Raw CLI values; `None` means the flag was not given.
pub struct CliArgs {
    pub input: Option<String>,
    pub output: Option<OutputMode>,
    pub order: Option<CategoryOrder>,
    pub color: Option<ColorChoice>,
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    /// Input path; `None` reads standard input.
    pub input: Option<PathBuf>,
    pub output: OutputMode,
    pub order: CategoryOrder,
    pub color: ColorChoice,
    pub verbose: bool,
}

impl Effective {
    /// Whether styled output should be written. JSON is never colored.
    pub fn use_colors(&self) -> bool {
        if self.output == OutputMode::Json {
            return false;
        }
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub fn input_label(&self) -> String {
        match &self.input {
            Some(p) => p.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

fn env_setting<T: ValueEnum>(
    env: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    expected: &'static str,
) -> Result<Option<T>> {
    match env(key) {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => T::from_str(v.trim(), true)
            .map(Some)
            .map_err(|_| Error::InvalidSetting {
                key,
                value: v,
                expected,
            }),
    }
}

/// Resolve `Effective` from CLI values and an environment lookup.
///
/// `env` is injected so resolution stays pure; the binary passes
/// `std::env::var(..).ok()`.
pub fn resolve_effective(cli: CliArgs, env: impl Fn(&str) -> Option<String>) -> Result<Effective> {
    let input = cli
        .input
        .or_else(|| env("LINTDIGEST_INPUT").filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let input = if input == "-" {
        None
    } else {
        Some(PathBuf::from(input))
    };

    let output = match cli.output {
        Some(o) => o,
        None => env_setting(&env, "LINTDIGEST_OUTPUT", "human|json")?.unwrap_or_default(),
    };

    let order = match cli.order {
        Some(o) => o,
        None => env_setting(&env, "LINTDIGEST_ORDER", "first-seen|priority")?.unwrap_or_default(),
    };

    let color = match cli.color {
        Some(c) => c,
        None if env("NO_COLOR").is_some() => ColorChoice::Never,
        None => ColorChoice::Auto,
    };

    Ok(Effective {
        input,
        output,
        order,
        color,
        verbose: cli.verbose,
    })
}
