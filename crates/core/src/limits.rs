//! Shared constants for analysis and ingestion.

/// Number of entries the ranking engine returns.
pub const TOP_N: usize = 10;

/// Default repetition count for the benchmark harness.
pub const DEFAULT_BENCH_RUNS: usize = 3;

/// Column index of the title field in the trending-video export.
pub const COL_TITLE: usize = 2;

/// Column index of the `|`-separated tags field.
pub const COL_TAGS: usize = 6;

/// Column index of the view count field.
pub const COL_VIEWS: usize = 7;

/// Column index of the like count field.
pub const COL_LIKES: usize = 8;

/// Minimum field count for a row to be considered well-formed.
///
/// The trending export carries 16 columns; anything shorter is a
/// truncated or mis-quoted row and is skipped by ingestion.
pub const MIN_FIELDS: usize = 16;
