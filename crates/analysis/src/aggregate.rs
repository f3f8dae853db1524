//! Hash-map aggregation engine.
//!
//! The grouping-structure strategy: matched ratios accumulate in a map
//! keyed by the query string (not by the tag that matched), and each
//! query's arithmetic mean comes out at the end. A query with no matches
//! reports "no data" rather than zero — zero is reserved for queries
//! whose matched ratios are all genuinely zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use taglens_core::Record;

use crate::matcher::tag_matches;

/// Per-query aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagAverage {
    /// The query string this entry aggregates.
    pub query: String,
    /// Arithmetic mean of all matched ratios; `None` means no match was
    /// found anywhere in the record set.
    pub mean: Option<f64>,
    /// Number of (tag, query) matches folded into the mean.
    pub samples: usize,
}

/// Average the ratio of every match, grouped by query string.
///
/// Returns one [`TagAverage`] per query in caller-supplied order.
/// Duplicate query strings produce duplicate entries; each reads the same
/// accumulator key and recomputes the identical mean.
///
/// Every (record, tag, query) match contributes one sample — a record
/// whose two tags both match a query contributes that record's ratio
/// twice. The empty-sample case is checked before dividing, so the mean
/// is always well-defined.
pub fn aggregate(records: &[Record], queries: &[String]) -> Vec<TagAverage> {
    let mut ratios: HashMap<&str, Vec<f64>> = HashMap::new();

    for record in records {
        for tag in &record.tags {
            for query in queries {
                if tag_matches(tag, query) {
                    ratios.entry(query.as_str()).or_default().push(record.ratio);
                }
            }
        }
    }

    queries
        .iter()
        .map(|query| {
            let samples = ratios.get(query.as_str()).map(Vec::as_slice).unwrap_or(&[]);
            let mean = if samples.is_empty() {
                None
            } else {
                Some(samples.iter().sum::<f64>() / samples.len() as f64)
            };
            TagAverage {
                query: query.clone(),
                mean,
                samples: samples.len(),
            }
        })
        .collect()
}
