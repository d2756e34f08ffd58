//! Block parser for linter text output.
//!
//! Two line shapes matter:
//! - file headers such as `tests/foo.py: 3 errors:`, which switch the
//!   current file;
//! - message lines such as `12: Trailing whitespace`, attributed to the
//!   current file.
//!
//! Everything else is skipped. Header recognition runs first, so a line that
//! fits both shapes starts a new file.

use crate::models::RawMessage;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static HEADER_RE: OnceLock<Regex> = OnceLock::new();
static ENTRY_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| {
        Regex::new(r"^(?P<file>[^:]+):\s*\d+\s+errors?:\s*$").expect("header regex is valid")
    })
}

fn entry_re() -> &'static Regex {
    ENTRY_RE.get_or_init(|| {
        Regex::new(r"^(?P<line>\d+):\s*(?P<msg>.+?)\s*$").expect("entry regex is valid")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shape of a single input line.
pub enum LineShape<'a> {
    Header(&'a str),
    Message { line: u32, text: &'a str },
    Other,
}

/// Recognize the shape of one line (without its terminator).
pub fn recognize(line: &str) -> LineShape<'_> {
    if let Some(caps) = header_re().captures(line) {
        let file = caps.name("file").map_or("", |m| m.as_str()).trim();
        if !file.is_empty() {
            return LineShape::Header(file);
        }
    }
    if let Some(caps) = entry_re().captures(line) {
        // Numbers that overflow u32 disqualify the line.
        let number = caps.name("line").and_then(|m| m.as_str().parse::<u32>().ok());
        let text = caps.name("msg").map_or("", |m| m.as_str()).trim();
        if let Some(number) = number {
            if !text.is_empty() {
                return LineShape::Message { line: number, text };
            }
        }
    }
    LineShape::Other
}

/// Parse raw linter output into messages in input order.
///
/// Message lines seen before any header have no file to belong to and are
/// dropped.
pub fn parse(input: &str) -> Vec<RawMessage<'_>> {
    let mut current: Option<&str> = None;
    let mut out = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        match recognize(raw) {
            LineShape::Header(file) => current = Some(file),
            LineShape::Message { line, text } => match current {
                Some(file) => out.push(RawMessage { file, line, text }),
                None => debug!(input_line = idx + 1, "skipping message before any file header"),
            },
            LineShape::Other => {}
        }
    }
    out
}
