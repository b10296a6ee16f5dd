//! Rule-based Portuguese syllabification and R-sound detection.
//!
//! Two entry points cover most uses:
//!
//! - [`syllabify`] splits one word into syllables.
//! - [`analyze`] finds every syllable carrying an "r" sound in free text and
//!   returns positioned hits, a highlighted copy of the text and statistics.
//!
//! ```
//! assert_eq!(silaba::syllabify("trabalho"), ["tra", "ba", "lho"]);
//!
//! let analysis = silaba::analyze("O carro vermelho.");
//! assert_eq!(analysis.statistics.total_patterns, 3);
//! ```

#[macro_use]
mod macros;
mod api;
mod detector;
mod engine;
mod rules;

pub use api::{
    Analysis, AnalysisDetails, AnalysisVerbose, Markers, Options, PatternKind, Route, RrHit, Statistics,
    TokenSummary, analyze, analyze_verbose_with, analyze_with, syllabify, syllabify_text,
};

// --- Internal types ---------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

/// Engine output for one word: its syllables and the layer that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Syllabified {
    pub syllables: Vec<String>,
    pub route: Route,
}

impl Syllabified {
    /// A single unit holding `word` unchanged.
    pub fn trivial(word: &str) -> Self {
        Syllabified { syllables: vec![word.to_string()], route: Route::Trivial }
    }
}
