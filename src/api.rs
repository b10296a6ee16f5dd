use crate::detector::TextToken;
use crate::{detector, engine};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Layer of the pipeline that produced a word's syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Empty, single-character or punctuation-only input, returned as is.
    Trivial,
    /// Listed in the exception lexicon.
    Exception,
    /// Ends in `ção`/`cao`; the ending is its own final syllable.
    Suffix,
    /// Split on hyphens/apostrophes and syllabified per segment.
    Segmented,
    /// Boundary-placement rules.
    Rules,
}

/// Kind of R sound carried by a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// The syllable's word contains `rr` somewhere.
    DoubleRr,
    /// Any other syllable containing an `r`.
    SingleR,
}

impl PatternKind {
    pub(crate) fn difficulty(self) -> &'static str {
        match self {
            PatternKind::DoubleRr | PatternKind::SingleR => "hard",
        }
    }

    pub(crate) fn pronunciation(self) -> &'static str {
        match self {
            PatternKind::DoubleRr => "Strong trilled R sound",
            PatternKind::SingleR => "Trilled R sound",
        }
    }

    pub(crate) fn example(self) -> &'static str {
        match self {
            PatternKind::DoubleRr => "carro",
            PatternKind::SingleR => "rato",
        }
    }

    /// Highlight priority where spans overlap (higher wins).
    pub(crate) fn priority(self) -> u8 {
        match self {
            PatternKind::DoubleRr => 2,
            PatternKind::SingleR => 1,
        }
    }
}

/// A syllable containing an R sound, positioned in the analyzed text.
///
/// `start`/`end` are byte offsets into the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RrHit {
    /// Token the syllable belongs to.
    pub word: String,
    pub syllable: String,
    /// Start byte index of the syllable.
    pub start: usize,
    /// End byte index of the syllable (exclusive).
    pub end: usize,
    pub difficulty: String,
    pub kind: PatternKind,
    pub pronunciation: String,
    /// Canonical example word for this kind.
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_patterns: usize,
    pub by_difficulty: BTreeMap<String, usize>,
    /// Always holds both kinds, zero when absent.
    pub by_pattern_kind: BTreeMap<PatternKind, usize>,
    /// Distinct lowercase words among all hits.
    pub unique_words: usize,
}

/// Result from [`analyze`] and [`analyze_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub original_text: String,
    /// The text with every hit wrapped in markers (see [`Markers`]).
    pub highlighted_text: String,
    /// Hits ordered by start offset.
    pub hits: Vec<RrHit>,
    pub statistics: Statistics,
}

/// Markers used when compositing the highlighted text.
///
/// The defaults are Markdown-flavoured: `**car**` is bold, `*ver*` is
/// emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    /// Wraps a double-R syllable.
    pub strong: String,
    /// Wraps each run of `r`s inside a double-R syllable.
    pub focus: String,
    /// Wraps a single-R syllable.
    pub emphasis: String,
    /// Inserted between two highlighted syllables that touch.
    pub separator: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            strong: "**".to_string(),
            focus: "__".to_string(),
            emphasis: "*".to_string(),
            separator: "\u{200B}".to_string(),
        }
    }
}

/// Options that affect analysis output.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub markers: Markers,
}

/// Trace of a single token in a verbose run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSummary {
    pub token: String,
    pub start: usize,
    pub end: usize,
    pub syllables: Vec<String>,
    pub route: Route,
    /// Longest common Portuguese prefix of the token, if any.
    pub prefix: Option<String>,
    /// Hits recorded for this token.
    pub hits: usize,
}

/// Additional details returned by [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent tokenizing, locating and syllabifying.
    pub syllabify: Duration,
    /// Time spent compositing the highlighted text.
    pub highlight: Duration,
    pub tokens: Vec<TokenSummary>,
    /// Tokens that could not be located in the text.
    pub unlocated: usize,
    /// Hits dropped by the offset integrity check.
    pub dropped_hits: usize,
}

/// Result from [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalysisVerbose {
    pub analysis: Analysis,
    pub details: AnalysisDetails,
}

/// Split a Portuguese word into syllables.
///
/// Never fails. Empty, single-character and punctuation-only words come back
/// as a single unit; otherwise the syllables concatenate to the word with its
/// punctuation (other than hyphens and apostrophes) removed.
///
/// # Example
/// ```
/// assert_eq!(silaba::syllabify("Coração"), ["Co", "ra", "ção"]);
/// assert_eq!(silaba::syllabify("x"), ["x"]);
/// ```
pub fn syllabify(word: &str) -> Vec<String> {
    engine::syllabify_word(word).syllables
}

/// Syllabify every word of `text`, in order.
///
/// Hyphenated and apostrophe-joined words stay whole, so their delimiters
/// show up as units. Punctuation and digits come back as `(token, [token])`.
pub fn syllabify_text(text: &str) -> Vec<(String, Vec<String>)> {
    detector::text_tokens(text)
        .into_iter()
        .map(|token| match token {
            TextToken::Word(word) => (word.to_string(), syllabify(word)),
            TextToken::Other(other) => (other.to_string(), vec![other.to_string()]),
        })
        .collect()
}

/// Analyze `text` for R-sound syllables with default [`Options`].
pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, &Options::default())
}

/// Analyze `text` with the provided `options`.
pub fn analyze_with(text: &str, options: &Options) -> Analysis {
    let run = detector::run(text, options, false);
    to_analysis(text, run)
}

/// Analyze `text` and return per-token traces and timings alongside the result.
///
/// The default [`analyze_with`] path does not allocate the token traces.
pub fn analyze_verbose_with(text: &str, options: &Options) -> AnalysisVerbose {
    let mut run = detector::run(text, options, true);

    let details = AnalysisDetails {
        total: run.metrics.total,
        syllabify: run.metrics.syllabify,
        highlight: run.metrics.highlight,
        tokens: std::mem::take(&mut run.tokens),
        unlocated: run.unlocated,
        dropped_hits: run.dropped,
    };

    AnalysisVerbose { analysis: to_analysis(text, run), details }
}

fn to_analysis(text: &str, run: detector::RunResult) -> Analysis {
    let statistics = detector::statistics(&run.hits);

    Analysis { original_text: text.to_string(), highlighted_text: run.highlighted, hits: run.hits, statistics }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syllabify_scenarios() {
        assert_eq!(syllabify("casa"), vec!["ca", "sa"]);
        assert_eq!(syllabify("trabalho"), vec!["tra", "ba", "lho"]);
        assert_eq!(syllabify("coração").last().map(String::as_str), Some("ção"));
        assert_eq!(syllabify("x"), vec!["x"]);
        assert_eq!(syllabify(""), vec![""]);
    }

    #[test]
    fn syllabify_text_keeps_token_order() {
        let out = syllabify_text("A casa, a casa!");
        let tokens: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["A", "casa", ",", "a", "casa", "!"]);
        assert_eq!(out[1].1, vec!["ca", "sa"]);
        assert_eq!(out[2].1, vec![","]);
    }

    #[test]
    fn syllabify_text_segments_joined_words() {
        let out = syllabify_text("O guarda-chuva, d'água.");
        let tokens: Vec<&str> = out.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["O", "guarda-chuva", ",", "d'água", "."]);

        let (_, umbrella) = &out[1];
        assert!(umbrella.iter().any(|s| s == "-"));
        assert_eq!(umbrella.concat(), "guarda-chuva");
        assert_eq!(out[3].1, vec!["d'", "á", "gua"]);
        assert_eq!(out[4].1, vec!["."]);
    }

    #[test]
    fn analyze_flags_double_and_single_r() {
        let res = analyze("O carro vermelho.");

        assert_eq!(res.original_text, "O carro vermelho.");
        let carro: Vec<&RrHit> = res.hits.iter().filter(|h| h.word == "carro").collect();
        assert_eq!(carro.len(), 2);
        assert!(carro.iter().all(|h| h.kind == PatternKind::DoubleRr));

        let vermelho = res.hits.iter().find(|h| h.word == "vermelho").unwrap();
        assert_eq!(vermelho.kind, PatternKind::SingleR);
        assert_eq!(vermelho.syllable, "ver");
        assert_eq!((vermelho.start, vermelho.end), (8, 11));
        assert_eq!(vermelho.example, "rato");
    }

    #[test]
    fn analyze_statistics() {
        let res = analyze("O carro vermelho.");
        let stats = &res.statistics;

        assert_eq!(stats.total_patterns, 3);
        assert_eq!(stats.by_difficulty.get("hard"), Some(&3));
        assert_eq!(stats.by_pattern_kind[&PatternKind::DoubleRr], 2);
        assert_eq!(stats.by_pattern_kind[&PatternKind::SingleR], 1);
        assert_eq!(stats.unique_words, 2);
    }

    #[test]
    fn analyze_highlights_per_syllable() {
        let res = analyze("O carro vermelho.");
        assert_eq!(res.highlighted_text, "O **ca__r__**\u{200B}**__r__o** *ver*melho.");
    }

    #[test]
    fn analyze_with_custom_markers() {
        let options = Options {
            markers: Markers {
                strong: "[".to_string(),
                focus: "|".to_string(),
                emphasis: "~".to_string(),
                separator: "+".to_string(),
            },
        };
        let res = analyze_with("carro rua", &options);
        assert_eq!(res.highlighted_text, "[ca|r|]+[|r|o] ~ru~a");
    }

    #[test]
    fn hit_spans_match_source_text() {
        let text = "A Guerra e a TERRA; o correio trouxe a carta.";
        let res = analyze(text);
        assert!(!res.hits.is_empty());
        for hit in &res.hits {
            assert_eq!(text[hit.start..hit.end].to_lowercase(), hit.syllable.to_lowercase());
            assert_eq!(hit.kind == PatternKind::DoubleRr, hit.word.to_lowercase().contains("rr"));
        }
    }

    #[test]
    fn analyze_empty_and_r_free_text() {
        let res = analyze("");
        assert!(res.hits.is_empty());
        assert_eq!(res.highlighted_text, "");

        let res = analyze("A casa é bonita.");
        assert!(res.hits.is_empty());
        assert_eq!(res.highlighted_text, "A casa é bonita.");
        assert_eq!(res.statistics.by_pattern_kind[&PatternKind::SingleR], 0);
        assert_eq!(res.statistics.unique_words, 0);
    }

    #[test]
    fn verbose_includes_token_traces() {
        let res = analyze_verbose_with("O coração do carro.", &Options::default());

        assert_eq!(res.analysis, analyze("O coração do carro."));
        assert!(res.details.syllabify <= res.details.total);
        assert_eq!(res.details.tokens.len(), 4);
        assert_eq!(res.details.unlocated, 0);
        assert_eq!(res.details.dropped_hits, 0);

        let coracao = &res.details.tokens[1];
        assert_eq!(coracao.route, Route::Suffix);
        assert_eq!(coracao.syllables, vec!["co", "ra", "ção"]);
        assert_eq!(coracao.prefix.as_deref(), Some("co"));
        assert_eq!(coracao.hits, 1);
        assert_eq!((coracao.start, coracao.end), (2, 11));
    }

    #[test]
    fn analysis_serializes_to_json() {
        let value = serde_json::to_value(analyze("carro")).unwrap();
        assert_eq!(value["hits"][0]["kind"], "double_rr");
        assert_eq!(value["statistics"]["by_pattern_kind"]["single_r"], 0);
        assert_eq!(value["statistics"]["total_patterns"], 2);
    }
}
