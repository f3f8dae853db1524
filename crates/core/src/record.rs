//! The Record type — one ingested video item.
//!
//! Records are built once by the ingestion layer and then only ever
//! borrowed. The like/view ratio is a cached derived field: computed at
//! construction, never recomputed per query.

use serde::{Deserialize, Serialize};

/// One published video item after ingestion.
///
/// # Invariants
///
/// - `views` and `likes` are non-negative (ingestion filters the rest).
/// - `ratio == likes / views` when `views > 0`, else `0.0` — set once in
///   [`Record::new`] and never touched again.
/// - Immutable after construction; the analysis engines take `&[Record]`
///   and never mutate or retain ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Video title as it appeared in the source row.
    pub title: String,
    /// Tags split from the raw `|`-separated source field, input order
    /// preserved. Order is irrelevant to analysis.
    pub tags: Vec<String>,
    /// View count.
    pub views: f64,
    /// Like count.
    pub likes: f64,
    /// Cached like/view ratio; `0.0` when `views` is zero.
    pub ratio: f64,
}

impl Record {
    /// Build a record, computing the ratio exactly once.
    ///
    /// A zero view count yields a ratio of `0.0` regardless of likes —
    /// there is no division in that branch.
    pub fn new(title: impl Into<String>, tags: Vec<String>, views: f64, likes: f64) -> Self {
        let ratio = if views > 0.0 { likes / views } else { 0.0 };
        Record {
            title: title.into(),
            tags,
            views,
            likes,
            ratio,
        }
    }
}
