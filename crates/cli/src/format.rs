//! Result → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default on TTY): numbered list / labeled averages
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): tab-separated values, no labels
//!
//! Formatting is deliberately outside the engines so the benchmark
//! harness times bare computation.

use taglens_analysis::{BenchReport, RankedEntry, TagAverage};
use taglens_core::Error;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Labeled, numbered output for a terminal.
    Human,
    /// Pretty-printed JSON.
    Json,
    /// Tab-separated values.
    Raw,
}

/// Format a ranked top-N result.
pub fn format_ranking(entries: &[RankedEntry], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(entries),
        OutputMode::Raw => entries
            .iter()
            .map(|e| format!("{}\t{}", e.ratio, e.title))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            if entries.is_empty() {
                return "No matching videos.".to_string();
            }
            let mut out = String::from("Top videos by like/view ratio for selected tags:\n");
            for (i, entry) in entries.iter().enumerate() {
                out.push_str(&format!(
                    "{}. {} (ratio: {:.6})\n",
                    i + 1,
                    entry.title,
                    entry.ratio
                ));
            }
            out.pop();
            out
        }
    }
}

/// Format per-tag averages.
pub fn format_averages(averages: &[TagAverage], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(averages),
        OutputMode::Raw => averages
            .iter()
            .map(|t| match t.mean {
                Some(mean) => format!("{}\t{}", t.query, mean),
                None => format!("{}\t", t.query),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputMode::Human => {
            let mut out = String::from("Average like/view ratio for each selected tag:\n");
            for avg in averages {
                match avg.mean {
                    Some(mean) => out.push_str(&format!(" - {}: {:.6}\n", avg.query, mean)),
                    None => out.push_str(&format!(" - {}: (no data)\n", avg.query)),
                }
            }
            out.pop();
            out
        }
    }
}

/// Format a benchmark report.
pub fn format_bench(report: &BenchReport, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(report),
        OutputMode::Raw => {
            let mut lines: Vec<String> = report
                .runs
                .iter()
                .map(|s| format!("{}\t{}", s.heap_ms, s.table_ms))
                .collect();
            lines.push(format!("{}\t{}", report.avg_heap_ms, report.avg_table_ms));
            lines.push(report.verdict.as_str().to_string());
            lines.join("\n")
        }
        OutputMode::Human => {
            let mut out = String::from("Heap vs hash table over identical input:\n");
            for (i, sample) in report.runs.iter().enumerate() {
                out.push_str(&format!(
                    "run {}: heap {} ms, hash table {} ms\n",
                    i + 1,
                    sample.heap_ms,
                    sample.table_ms
                ));
            }
            out.push_str(&format!(
                "average: heap {:.2} ms, hash table {:.2} ms\n",
                report.avg_heap_ms, report.avg_table_ms
            ));
            out.push_str(&format!("verdict: {}", report.verdict.as_str()));
            out
        }
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("(error) {}", e))
}
