//! R-sound detector.
//!
//! Turns free text into positioned R-sound hits, a highlighted copy of the
//! text and aggregate statistics. The syllable split itself comes from
//! [`crate::engine`]; this module is about *where* those syllables sit in the
//! caller's text.
//!
//! ```text
//! text ── tokenize                (locate.rs)
//!          │   maximal letter runs
//!          v
//!        Locator::locate          (locate.rs)
//!          │   byte range, advancing cursor
//!          v
//!        syllabify_word           (engine)
//!          │
//!          v
//!        collect_hits             (hits.rs)
//!          │   per-syllable RrHit, offset check
//!          v
//!        sort by start ── highlight  (highlight.rs)
//!                     └── statistics (stats.rs)
//! ```
//!
//! Timings for the syllabify and highlight phases are always measured; token
//! traces are only built for verbose runs.

#[path = "detector/highlight.rs"]
mod highlight;
#[path = "detector/hits.rs"]
mod hits;
#[path = "detector/locate.rs"]
mod locate;
#[path = "detector/metrics.rs"]
mod metrics;
#[path = "detector/stats.rs"]
mod stats;

pub(crate) use locate::{TextToken, text_tokens, tokenize};
pub(crate) use metrics::{RunMetrics, RunResult};
pub(crate) use stats::statistics;

use crate::rules::longest_prefix;
use crate::{Options, TokenSummary, engine};
use std::time::Instant;

/// Detect, sort and highlight every R-sound syllable of `text`.
pub(crate) fn run(text: &str, options: &Options, verbose: bool) -> RunResult {
    let t_total = Instant::now();

    let mut found = Vec::new();
    let mut tokens = Vec::new();
    let mut unlocated = 0;
    let mut dropped = 0;
    let mut locator = locate::Locator::new(text);

    for token in tokenize(text) {
        let Some(range) = locator.locate(token) else {
            tracing::debug!(token, "token not found in text, skipped");
            unlocated += 1;
            continue;
        };

        let word = engine::syllabify_word(token);
        let collected = hits::collect_hits(text, token, range, &word.syllables, &mut found);
        dropped += collected.dropped;

        if verbose {
            tokens.push(TokenSummary {
                token: token.to_string(),
                start: range.start,
                end: range.end,
                syllables: word.syllables,
                route: word.route,
                prefix: longest_prefix(&token.to_lowercase()).map(str::to_string),
                hits: collected.recorded,
            });
        }
    }

    // `sort_by_key` is stable: hits sharing a start keep discovery order.
    found.sort_by_key(|hit| hit.start);
    let syllabify = t_total.elapsed();

    let t_highlight = Instant::now();
    let highlighted = highlight::highlight(text, &found, &options.markers);
    let highlight = t_highlight.elapsed();

    RunResult {
        hits: found,
        highlighted,
        tokens,
        unlocated,
        dropped,
        metrics: RunMetrics { total: t_total.elapsed(), syllabify, highlight },
    }
}
