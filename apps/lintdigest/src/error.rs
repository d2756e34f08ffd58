//! Error types for input loading, settings, and rule compilation.
//!
//! The digest pipeline itself never fails; these cover the edges around it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("Could not find '{}'. Put your lint output there or pass a path.", path.display())]
    InputNotFound { path: PathBuf },

    /// The input exists but could not be read as UTF-8 text.
    #[error("Failed to read '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An environment setting holds a value outside its accepted set.
    #[error("Invalid value '{value}' for {key} (expected {expected})")]
    InvalidSetting {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A rule pattern failed to compile.
    #[error("Invalid rule pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
