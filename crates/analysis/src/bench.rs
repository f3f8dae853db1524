//! Benchmark harness: heap vs hash-map over identical input.
//!
//! Runs both engines back-to-back a fixed number of times, timing only
//! the computation (the engines return plain data and never format or
//! print, so the measured interval contains no output cost). Reports
//! per-run millisecond pairs, per-column averages, and a verdict.

use std::hint::black_box;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use taglens_core::{Error, Record, Result, DEFAULT_BENCH_RUNS};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::ranking::rank;

/// Millisecond timings for one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchSample {
    /// Elapsed wall-clock for the heap-based ranking engine.
    pub heap_ms: u128,
    /// Elapsed wall-clock for the hash-map aggregation engine.
    pub table_ms: u128,
}

/// Which engine averaged faster across the runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The heap-based ranking engine averaged strictly faster.
    RankingFaster,
    /// The hash-map aggregation engine averaged strictly faster.
    AggregationFaster,
    /// The averages were exactly equal.
    Tie,
}

impl Verdict {
    /// Stable string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::RankingFaster => "ranking-faster",
            Verdict::AggregationFaster => "aggregation-faster",
            Verdict::Tie => "tie",
        }
    }
}

/// Full benchmark output: per-run samples, averages, verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// One sample per run, in execution order.
    pub runs: Vec<BenchSample>,
    /// Mean of the heap column across all runs.
    pub avg_heap_ms: f64,
    /// Mean of the hash-map column across all runs.
    pub avg_table_ms: f64,
    /// Three-way comparison of the two averages.
    pub verdict: Verdict,
}

/// Run both engines `runs` times over the same input and compare.
///
/// Runs are strictly sequential; run N+1 starts only after run N's two
/// measured calls complete. Nothing is shared across runs except the
/// read-only inputs and the accumulating samples — each engine call
/// allocates fresh working structures.
///
/// # Errors
///
/// `runs == 0` is an invalid configuration (the averages would divide by
/// zero) and returns [`Error::InvalidConfig`].
pub fn compare(records: &[Record], queries: &[String], runs: usize) -> Result<BenchReport> {
    if runs == 0 {
        return Err(Error::InvalidConfig("runs must be >= 1".into()));
    }

    let mut samples = Vec::with_capacity(runs);

    for run in 0..runs {
        let start = Instant::now();
        black_box(rank(records, queries));
        let heap_ms = start.elapsed().as_millis();

        let start = Instant::now();
        black_box(aggregate(records, queries));
        let table_ms = start.elapsed().as_millis();

        debug!(run, heap_ms, table_ms, "benchmark sample");
        samples.push(BenchSample { heap_ms, table_ms });
    }

    let avg_heap_ms = samples.iter().map(|s| s.heap_ms as f64).sum::<f64>() / runs as f64;
    let avg_table_ms = samples.iter().map(|s| s.table_ms as f64).sum::<f64>() / runs as f64;

    let verdict = if avg_heap_ms < avg_table_ms {
        Verdict::RankingFaster
    } else if avg_table_ms < avg_heap_ms {
        Verdict::AggregationFaster
    } else {
        Verdict::Tie
    };

    Ok(BenchReport {
        runs: samples,
        avg_heap_ms,
        avg_table_ms,
        verdict,
    })
}

/// [`compare`] with the default run count of 3.
pub fn compare_default(records: &[Record], queries: &[String]) -> Result<BenchReport> {
    compare(records, queries, DEFAULT_BENCH_RUNS)
}
