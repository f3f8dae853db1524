//! Heap-based ranking engine.
//!
//! The priority-structure strategy: every (record, tag, query) match
//! pushes the record's cached ratio onto a max-heap, and the top entries
//! pop out in descending ratio order. The heap holds a multiset — a
//! record that matches through two different tags is inserted twice and
//! surfaces twice in the output.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use taglens_core::{Record, TOP_N};

use crate::matcher::tag_matches;

/// One ranked entry: a record's ratio paired with its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Cached like/view ratio of the matching record.
    pub ratio: f64,
    /// Title of the matching record.
    pub title: String,
}

impl Eq for RankedEntry {}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: ratio, descending out of the max-heap. Ties order
        // lexicographically by title so extraction is deterministic.
        self.ratio
            .total_cmp(&other.ratio)
            .then_with(|| other.title.cmp(&self.title))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank matching records by ratio, descending, truncated to the top 10.
///
/// Empty `records` or `queries` yields an empty result. Pure computation;
/// formatting is the caller's concern.
pub fn rank(records: &[Record], queries: &[String]) -> Vec<RankedEntry> {
    rank_top(records, queries, TOP_N)
}

/// Rank with an explicit cutoff instead of the default top 10.
///
/// Ratios are never NaN (`likes / views` with `views > 0`, else a literal
/// `0.0`), so `total_cmp` agrees with the naive ordering.
pub fn rank_top(records: &[Record], queries: &[String], limit: usize) -> Vec<RankedEntry> {
    let mut heap = BinaryHeap::new();

    for record in records {
        for tag in &record.tags {
            for query in queries {
                if tag_matches(tag, query) {
                    heap.push(RankedEntry {
                        ratio: record.ratio,
                        title: record.title.clone(),
                    });
                }
            }
        }
    }

    let mut out = Vec::with_capacity(limit.min(heap.len()));
    for _ in 0..limit {
        match heap.pop() {
            Some(entry) => out.push(entry),
            None => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, tags: &[&str], views: f64, likes: f64) -> Record {
        Record::new(
            title,
            tags.iter().map(|t| t.to_string()).collect(),
            views,
            likes,
        )
    }

    fn queries(qs: &[&str]) -> Vec<String> {
        qs.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn test_empty_inputs_yield_empty_result() {
        assert!(rank(&[], &queries(&["music"])).is_empty());
        assert!(rank(&[record("a", &["music"], 1.0, 1.0)], &[]).is_empty());
    }

    #[test]
    fn test_descending_order() {
        let records = vec![
            record("low", &["music"], 100.0, 10.0),
            record("high", &["music"], 100.0, 90.0),
            record("mid", &["music"], 100.0, 50.0),
        ];
        let ranked = rank(&records, &queries(&["music"]));
        let titles: Vec<&str> = ranked.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_top_ten_bound() {
        let records: Vec<Record> = (0..25)
            .map(|i| record(&format!("v{}", i), &["music"], 100.0, i as f64))
            .collect();
        let ranked = rank(&records, &queries(&["music"]));
        assert_eq!(ranked.len(), 10);
        // Strictly descending for distinct ratios
        for pair in ranked.windows(2) {
            assert!(pair[0].ratio > pair[1].ratio);
        }
        assert_eq!(ranked[0].title, "v24");
    }

    #[test]
    fn test_fewer_than_ten_returns_all() {
        let records = vec![
            record("a", &["music"], 10.0, 1.0),
            record("b", &["music"], 10.0, 2.0),
        ];
        assert_eq!(rank(&records, &queries(&["music"])).len(), 2);
    }

    #[test]
    fn test_duplicate_tag_matches_duplicate_entries() {
        // Both tags contain "gaming": two heap insertions, two outputs.
        let records = vec![record("v", &["gaming", "gamingnews"], 100.0, 25.0)];
        let ranked = rank(&records, &queries(&["gaming"]));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], ranked[1]);
    }

    #[test]
    fn test_one_tag_multiple_queries() {
        // One tag matched by two query strings counts twice.
        let records = vec![record("v", &["gamingnews"], 100.0, 25.0)];
        let ranked = rank(&records, &queries(&["gaming", "news"]));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        let records = vec![
            record("zeta", &["music"], 100.0, 50.0),
            record("alpha", &["music"], 100.0, 50.0),
        ];
        let ranked = rank(&records, &queries(&["music"]));
        assert_eq!(ranked[0].title, "alpha");
        assert_eq!(ranked[1].title, "zeta");
    }

    #[test]
    fn test_custom_limit() {
        let records: Vec<Record> = (0..8)
            .map(|i| record(&format!("v{}", i), &["x"], 10.0, i as f64))
            .collect();
        assert_eq!(rank_top(&records, &queries(&["x"]), 3).len(), 3);
        assert_eq!(rank_top(&records, &queries(&["x"]), 0).len(), 0);
    }

    #[test]
    fn test_no_match_empty_result() {
        let records = vec![record("v", &["cooking"], 10.0, 5.0)];
        assert!(rank(&records, &queries(&["music"])).is_empty());
    }
}
