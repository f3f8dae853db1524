//! Core types for taglens
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: one ingested video item with its cached like/view ratio
//! - Error / Result: workspace-wide error handling
//! - Limits: shared constants (top-N cutoff, benchmark run count, CSV
//!   column layout of the trending-video export)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::{COL_LIKES, COL_TAGS, COL_TITLE, COL_VIEWS, DEFAULT_BENCH_RUNS, MIN_FIELDS, TOP_N};
pub use record::Record;
