//! lintdigest core library.
//!
//! Turns long pylint/mypy text output into a compact per-file summary:
//! messages are grouped by category with their line numbers, and anything no
//! rule recognizes is listed verbatim as an unreconcilable message.
//!
//! High-level modules:
//! - `parse`: File-header and message-line recognition.
//! - `rules`: Ordered pattern table and first-match-wins classifier.
//! - `aggregate`: Per-file category buckets and the unreconciled list.
//! - `output`: Human/JSON rendering of the digest.
//! - `models`: Data models for messages, categories, and the digest.
//! - `config`: Effective settings from CLI flags, environment, and defaults.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `utils`: Input loading and stderr prefixes.
//! - `error`: Error types for the edges around the pipeline.
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod rules;
pub mod utils;

pub use aggregate::{digest, digest_with, Aggregator};
pub use config::CategoryOrder;
pub use models::{Category, Digest};
pub use output::render;
