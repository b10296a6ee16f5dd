//! Detector run metrics.
//!
//! - `analyze_with` uses the hits and highlighted text only.
//! - `analyze_verbose_with` also surfaces timings and per-token traces.
//!
//! Timings are cheap and always collected. `RunResult::tokens` is left empty
//! unless the run was asked to be verbose.

use crate::{RrHit, TokenSummary};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Tokenizing, locating, syllabifying and collecting hits.
    pub syllabify: Duration,
    /// Compositing the highlighted text.
    pub highlight: Duration,
}

/// Detector output bundled with timing information.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    /// Hits ordered by start offset.
    pub hits: Vec<RrHit>,
    pub highlighted: String,
    /// Per-token traces (verbose runs only).
    pub tokens: Vec<TokenSummary>,
    /// Tokens that could not be found in the text.
    pub unlocated: usize,
    /// Hits dropped by the span check.
    pub dropped: usize,
    pub metrics: RunMetrics,
}
