//! Stderr prefixes and input loading used by the binary.

use crate::error::{Error, Result};
use owo_colors::OwoColorize;
use std::io::{self, Read};
use std::path::Path;

fn stderr_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if stderr_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if stderr_colors() {
        "note:".blue().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Read the whole input: a file path, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::InputNotFound {
                    path: p.to_path_buf(),
                }
            } else {
                Error::ReadInput {
                    path: p.to_path_buf(),
                    source,
                }
            }
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::ReadInput {
                    path: "<stdin>".into(),
                    source,
                })?;
            Ok(buf)
        }
    }
}
