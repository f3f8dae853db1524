//! Tag-matching analysis engines for taglens
//!
//! This crate provides:
//! - tag_matches: the substring predicate both engines share
//! - rank / rank_top: heap-based top-N ranking by like/view ratio
//! - aggregate: hash-map per-query mean ratios with a "no data" sentinel
//! - compare: benchmark harness running both engines head-to-head
//!
//! The engines are pure: they borrow a pre-validated record slice, build
//! their working structures fresh per call, and return plain data.
//! Formatting and I/O live in the CLI crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod bench;
pub mod matcher;
pub mod ranking;

// Re-export commonly used types
pub use aggregate::{aggregate, TagAverage};
pub use bench::{compare, compare_default, BenchReport, BenchSample, Verdict};
pub use matcher::{record_matches, tag_matches};
pub use ranking::{rank, rank_top, RankedEntry};
