//! taglens - Tag correlation analysis for trending-video datasets
//!
//! taglens ingests tabular records describing published video items and
//! answers two questions about an operator-chosen set of tag substrings:
//! which matching videos have the best like/view ratio, and what is the
//! average ratio per queried tag. Both answers are computed by two
//! interchangeable strategies — a max-heap and a hash table — and a
//! built-in harness benchmarks them head-to-head.
//!
//! # Quick Start
//!
//! ```ignore
//! use taglens::{aggregate, rank, Record};
//!
//! let records = taglens::load("data/")?;
//! let queries = vec!["music".to_string(), "gaming".to_string()];
//!
//! // Top 10 by like/view ratio
//! for entry in rank(&records, &queries) {
//!     println!("{} ({})", entry.title, entry.ratio);
//! }
//!
//! // Per-tag averages
//! for avg in aggregate(&records, &queries) {
//!     println!("{}: {:?}", avg.query, avg.mean);
//! }
//! ```
//!
//! # Architecture
//!
//! The analysis engines live in `taglens-analysis` and are pure: they
//! borrow a pre-validated record slice and return plain data. Ingestion
//! (`taglens-ingest`) owns all parsing and row filtering; the CLI crate
//! owns formatting and the interactive surface.

// Re-export the public API from the member crates
pub use taglens_analysis::{
    aggregate, compare, compare_default, rank, rank_top, record_matches, tag_matches, BenchReport,
    BenchSample, RankedEntry, TagAverage, Verdict,
};
pub use taglens_core::{Error, Record, Result, DEFAULT_BENCH_RUNS, TOP_N};
pub use taglens_ingest::{load, load_dir, load_file};
