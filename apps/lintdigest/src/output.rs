//! Output rendering for the digest.
//!
//! Supports `human` (default) and `json` outputs. The human form is the
//! per-file summary followed by the unreconcilable messages; the JSON form
//! carries the same data plus a top-level summary.

use crate::config::{CategoryOrder, OutputMode};
use crate::models::{Bucket, Digest, FileReport};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

pub const UNRECONCILED_HEADER: &str = "unreconcilable messages:";

/// Buckets of `report` in the requested order.
fn ordered_buckets(report: &FileReport, order: CategoryOrder) -> Vec<&Bucket> {
    let mut buckets: Vec<&Bucket> = report.buckets.iter().collect();
    if order == CategoryOrder::Priority {
        buckets.sort_by_key(|b| b.category);
    }
    buckets
}

fn join_lines(lines: &[u32]) -> String {
    lines
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the plain-text report. Identical digests render identically;
/// an empty digest renders as an empty string.
pub fn render(digest: &Digest, order: CategoryOrder) -> String {
    render_styled(digest, order, false)
}

/// Render the report, optionally with terminal styling.
pub fn render_styled(digest: &Digest, order: CategoryOrder, color: bool) -> String {
    let mut blocks: Vec<String> = Vec::new();
    for report in &digest.files {
        let mut block = String::new();
        if color {
            block.push_str(&format!("{}\n", format!("{}:", report.file).bold()));
        } else {
            block.push_str(&format!("{}:\n", report.file));
        }
        for bucket in ordered_buckets(report, order) {
            let label = bucket.category.label();
            let label = if color {
                label.cyan().to_string()
            } else {
                label.to_string()
            };
            block.push_str(&format!(
                "  - {} ({}): {}\n",
                label,
                bucket.lines.len(),
                join_lines(&bucket.lines)
            ));
        }
        blocks.push(block);
    }

    if !digest.unreconciled.is_empty() {
        let mut block = String::new();
        if color {
            block.push_str(&format!("{}\n", UNRECONCILED_HEADER.yellow().bold()));
        } else {
            block.push_str(UNRECONCILED_HEADER);
            block.push('\n');
        }
        for entry in &digest.unreconciled {
            block.push_str(&format!(
                "- {} @ {}: {}\n",
                entry.file, entry.line, entry.message
            ));
        }
        blocks.push(block);
    }

    blocks.join("\n")
}

/// Compose the digest JSON object (pure) for testing/snapshot purposes.
pub fn compose_digest_json(digest: &Digest, order: CategoryOrder) -> JsonVal {
    let files: Vec<_> = digest
        .files
        .iter()
        .map(|report| {
            let categories: Vec<_> = ordered_buckets(report, order)
                .into_iter()
                .map(|b| {
                    json!({
                        "category": b.category,
                        "count": b.lines.len(),
                        "lines": b.lines,
                    })
                })
                .collect();
            json!({"file": report.file, "categories": categories})
        })
        .collect();
    let summary = json!({
        "files": digest.files.len(),
        "messages": digest.message_count(),
        "classified": digest.classified_count(),
        "unreconciled": digest.unreconciled.len(),
    });
    json!({
        "files": files,
        "unreconciled": digest.unreconciled,
        "summary": summary,
    })
}

/// Print the digest to stdout in the requested format.
pub fn print_digest(digest: &Digest, output: OutputMode, order: CategoryOrder, color: bool) {
    match output {
        OutputMode::Json => println!(
            "{}",
            serde_json::to_string_pretty(&compose_digest_json(digest, order))
                .expect("digest JSON is always serializable")
        ),
        OutputMode::Human => print!("{}", render_styled(digest, order, color)),
    }
}
