//! Aggregation of parsed messages into per-file category buckets.
//!
//! Files and categories keep the order they were first seen. Messages no
//! rule matches go to one global unreconciled list in input order.

use crate::models::{Digest, FileReport, RawMessage, UnreconciledEntry};
use crate::parse::parse;
use crate::rules::{self, Rule};
use std::collections::HashMap;
use tracing::{debug, trace};

pub struct Aggregator<'r> {
    rules: &'r [Rule],
    files: Vec<FileReport>,
    index: HashMap<String, usize>,
    unreconciled: Vec<UnreconciledEntry>,
}

impl Default for Aggregator<'static> {
    fn default() -> Self {
        Self::new(rules::builtin())
    }
}

impl<'r> Aggregator<'r> {
    pub fn new(rules: &'r [Rule]) -> Self {
        Self {
            rules,
            files: Vec::new(),
            index: HashMap::new(),
            unreconciled: Vec::new(),
        }
    }

    /// Classify one message and record it.
    pub fn ingest(&mut self, msg: &RawMessage<'_>) {
        let category = rules::classify_with(self.rules, msg.text);
        trace!(file = msg.file, line = msg.line, ?category, "classified");
        match category {
            Some(category) => self.file_mut(msg.file).record(category, msg.line),
            None => {
                self.file_mut(msg.file);
                self.unreconciled.push(UnreconciledEntry {
                    file: msg.file.to_string(),
                    line: msg.line,
                    message: msg.text.to_string(),
                });
            }
        }
    }

    pub fn ingest_all<'a, I>(&mut self, msgs: I)
    where
        I: IntoIterator<Item = RawMessage<'a>>,
    {
        for msg in msgs {
            self.ingest(&msg);
        }
    }

    fn file_mut(&mut self, path: &str) -> &mut FileReport {
        let idx = match self.index.get(path) {
            Some(&idx) => idx,
            None => {
                self.files.push(FileReport::new(path));
                let idx = self.files.len() - 1;
                self.index.insert(path.to_string(), idx);
                idx
            }
        };
        &mut self.files[idx]
    }

    pub fn finish(self) -> Digest {
        let digest = Digest {
            files: self.files,
            unreconciled: self.unreconciled,
        };
        debug!(
            files = digest.files.len(),
            classified = digest.classified_count(),
            unreconciled = digest.unreconciled.len(),
            "aggregation finished"
        );
        digest
    }
}

/// Parse and aggregate `input` with the built-in rule table.
pub fn digest(input: &str) -> Digest {
    digest_with(input, rules::builtin())
}

/// Parse and aggregate `input` with a caller-supplied rule table.
pub fn digest_with(input: &str, rules: &[Rule]) -> Digest {
    let mut agg = Aggregator::new(rules);
    agg.ingest_all(parse(input));
    agg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    const SAMPLE: &str = "\
tests/foo.py: 5 errors:
12: Trailing whitespace
18: Unused import os
27: Function is missing a return type annotation
40: Unused import sys
18: Unused import os
tests/bar.py: 1 errors:
44: Some message we didn't match
tests/foo.py: 1 errors:
3: Trailing whitespace
";

    #[test]
    fn test_groups_lines_per_category_in_input_order() {
        let d = digest(SAMPLE);
        let foo = d.file("tests/foo.py").unwrap();
        assert_eq!(foo.lines_for(Category::UnusedImport), Some(&[18, 40, 18][..]));
        assert_eq!(foo.lines_for(Category::TrailingWhitespace), Some(&[12, 3][..]));
        assert_eq!(
            foo.lines_for(Category::MissingTypeAnnotation),
            Some(&[27][..])
        );
        let order: Vec<_> = foo.buckets.iter().map(|b| b.category).collect();
        assert_eq!(
            order,
            vec![
                Category::TrailingWhitespace,
                Category::UnusedImport,
                Category::MissingTypeAnnotation
            ]
        );
    }

    #[test]
    fn test_repeated_header_merges_into_first_seen_file() {
        let d = digest(SAMPLE);
        let files: Vec<_> = d.files.iter().map(|f| f.file.as_str()).collect();
        assert_eq!(files, vec!["tests/foo.py", "tests/bar.py"]);
    }

    #[test]
    fn test_unmatched_messages_are_unreconciled_with_file_and_line() {
        let d = digest(SAMPLE);
        assert_eq!(
            d.unreconciled,
            vec![UnreconciledEntry {
                file: "tests/bar.py".into(),
                line: 44,
                message: "Some message we didn't match".into(),
            }]
        );
        // the file still gets a report, with no buckets
        assert!(d.file("tests/bar.py").unwrap().buckets.is_empty());
    }

    #[test]
    fn test_every_message_accounted_for_once() {
        let inputs = [
            SAMPLE,
            "",
            "1: orphan\n",
            "x.py: 2 errors:\n1: ???\n1: ???\n",
            "y.py: 3 errors:\n1: Trailing whitespace\n2: nope\n3: Unused argument 'a'\n",
        ];
        for input in inputs {
            let parsed = parse(input).len();
            let d = digest(input);
            assert_eq!(d.message_count(), parsed, "input: {input:?}");
        }
    }

    #[test]
    fn test_empty_rule_table_routes_everything_to_unreconciled() {
        let d = digest_with(SAMPLE, &[]);
        assert_eq!(d.classified_count(), 0);
        assert_eq!(d.unreconciled.len(), parse(SAMPLE).len());
        assert_eq!(d.files.len(), 2);
    }

    #[test]
    fn test_orphan_messages_produce_nothing() {
        let d = digest("12: Trailing whitespace\n");
        assert!(d.is_empty());
    }

    #[test]
    fn test_aggregator_accepts_messages_directly() {
        let mut agg = Aggregator::default();
        agg.ingest(&RawMessage {
            file: "z.py",
            line: 5,
            text: "Missing module docstring",
        });
        let d = agg.finish();
        assert_eq!(
            d.file("z.py").unwrap().lines_for(Category::MissingDocstring),
            Some(&[5][..])
        );
    }
}
