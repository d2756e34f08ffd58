//! Shared data models for parsed messages and the aggregated digest.

pub mod category;

pub use category::Category;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One message line attributed to a file, borrowed from the raw input.
pub struct RawMessage<'a> {
    pub file: &'a str,
    pub line: u32,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Line numbers collected for one category, in input order.
pub struct Bucket {
    pub category: Category,
    pub lines: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Per-file aggregation. Buckets keep the order categories were first seen.
pub struct FileReport {
    pub file: String,
    pub buckets: Vec<Bucket>,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            buckets: Vec::new(),
        }
    }

    /// Append `line` to the bucket for `category`, creating it on first use.
    pub fn record(&mut self, category: Category, line: u32) {
        match self.buckets.iter_mut().find(|b| b.category == category) {
            Some(bucket) => bucket.lines.push(line),
            None => self.buckets.push(Bucket {
                category,
                lines: vec![line],
            }),
        }
    }

    pub fn lines_for(&self, category: Category) -> Option<&[u32]> {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.lines.as_slice())
    }

    /// Number of classified messages recorded for this file.
    pub fn classified_count(&self) -> usize {
        self.buckets.iter().map(|b| b.lines.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A message no rule matched, kept verbatim.
pub struct UnreconciledEntry {
    pub file: String,
    pub line: u32,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Final aggregation state: files in first-seen order plus unmatched messages.
pub struct Digest {
    pub files: Vec<FileReport>,
    pub unreconciled: Vec<UnreconciledEntry>,
}

impl Digest {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.unreconciled.is_empty()
    }

    pub fn file(&self, path: &str) -> Option<&FileReport> {
        self.files.iter().find(|f| f.file == path)
    }

    pub fn classified_count(&self) -> usize {
        self.files.iter().map(FileReport::classified_count).sum()
    }

    /// Every ingested message lands in exactly one bucket slot or one
    /// unreconciled entry, so this equals the number of parsed messages.
    pub fn message_count(&self) -> usize {
        self.classified_count() + self.unreconciled.len()
    }
}
