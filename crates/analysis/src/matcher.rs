//! Tag matching predicate shared by both analysis engines.
//!
//! Both the ranking engine and the aggregation engine call the same
//! predicate, so their match sets are identical by construction.

/// True iff `query` occurs in `tag` as a contiguous substring.
///
/// Case-sensitive, no normalization. The loose semantics are intentional:
/// query `"music"` also matches tag `"musical"`. Total over all inputs —
/// an empty query matches every tag.
///
/// # Example
///
/// ```
/// use taglens_analysis::matcher::tag_matches;
///
/// assert!(tag_matches("musical", "music"));
/// assert!(!tag_matches("pop", "popular"));
/// ```
pub fn tag_matches(tag: &str, query: &str) -> bool {
    tag.contains(query)
}

/// True iff any tag on the record matches any query string.
///
/// Used by callers that only need set membership, not per-match counts.
pub fn record_matches(tags: &[String], queries: &[String]) -> bool {
    tags.iter()
        .any(|tag| queries.iter().any(|q| tag_matches(tag, q)))
}
