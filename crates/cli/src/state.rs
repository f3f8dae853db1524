//! Session state for REPL and pipe mode.
//!
//! The tag selection lives here, not in the engines: it is an explicit
//! session value passed into each engine call, so the analysis core
//! stays stateless between invocations.

use std::path::Path;

use taglens_analysis::{aggregate, compare, rank_top, BenchReport, RankedEntry, TagAverage};
use taglens_core::{Error, Record, Result};

/// Loaded records plus the operator's current tag selection.
pub struct SessionState {
    records: Vec<Record>,
    selection: Vec<String>,
}

impl SessionState {
    /// Create a session over an already-loaded record set.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            selection: Vec::new(),
        }
    }

    /// Create a session with no dataset loaded yet.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replace the loaded dataset from a file or folder.
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        self.records = taglens_ingest::load(path)?;
        Ok(self.records.len())
    }

    /// Replace the tag selection.
    pub fn select_tags(&mut self, tags: Vec<String>) {
        self.selection = tags;
    }

    /// Resolve the tags to analyze: inline tags win, otherwise the
    /// session selection; neither present is a usage error.
    fn resolve_tags(&self, inline: Option<Vec<String>>) -> Result<Vec<String>> {
        match inline {
            Some(tags) if !tags.is_empty() => Ok(tags),
            _ if !self.selection.is_empty() => Ok(self.selection.clone()),
            _ => Err(Error::InvalidConfig(
                "no tags selected; run `tags music,gaming` or pass --tags".into(),
            )),
        }
    }

    /// Rank the top entries for the resolved selection.
    pub fn top(&self, limit: usize, inline: Option<Vec<String>>) -> Result<Vec<RankedEntry>> {
        let tags = self.resolve_tags(inline)?;
        Ok(rank_top(&self.records, &tags, limit))
    }

    /// Per-tag averages for the resolved selection.
    pub fn averages(&self, inline: Option<Vec<String>>) -> Result<Vec<TagAverage>> {
        let tags = self.resolve_tags(inline)?;
        Ok(aggregate(&self.records, &tags))
    }

    /// Benchmark both engines for the resolved selection.
    pub fn bench(&self, runs: usize, inline: Option<Vec<String>>) -> Result<BenchReport> {
        let tags = self.resolve_tags(inline)?;
        compare(&self.records, &tags, runs)
    }

    /// REPL prompt, reflecting dataset size and selection.
    pub fn prompt(&self) -> String {
        if self.selection.is_empty() {
            format!("taglens[{}]> ", self.records.len())
        } else {
            format!("taglens[{}|{}]> ", self.records.len(), self.selection.join(","))
        }
    }
}
