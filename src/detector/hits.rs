//! Per-syllable R-sound hits.

use crate::engine::WordTraits;
use crate::{PatternKind, Range, RrHit};

/// Counts from one [`collect_hits`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Collected {
    pub recorded: usize,
    pub dropped: usize,
}

/// Append a hit for every syllable of `token` that contains an `r`.
///
/// Offsets accumulate from `range.start`. A hit whose span does not slice
/// back to its syllable (ignoring case) is dropped.
pub(crate) fn collect_hits(
    text: &str,
    token: &str,
    range: Range,
    syllables: &[String],
    hits: &mut Vec<RrHit>,
) -> Collected {
    let traits = WordTraits::scan(token);
    let mut collected = Collected::default();
    if !traits.contains(WordTraits::HAS_R) {
        return collected;
    }

    let kind = if traits.contains(WordTraits::HAS_RR) { PatternKind::DoubleRr } else { PatternKind::SingleR };
    let mut offset = range.start;

    for syllable in syllables {
        let start = offset;
        let end = start + syllable.len();
        offset = end;

        if !syllable.chars().any(|c| matches!(c, 'r' | 'R')) {
            continue;
        }

        let in_text = text.get(start..end).is_some_and(|s| s.to_lowercase() == syllable.to_lowercase());
        if !in_text {
            tracing::debug!(token, syllable = syllable.as_str(), start, end, "hit span does not match text, dropped");
            collected.dropped += 1;
            continue;
        }

        hits.push(RrHit {
            word: token.to_string(),
            syllable: syllable.clone(),
            start,
            end,
            difficulty: kind.difficulty().to_string(),
            kind,
            pronunciation: kind.pronunciation().to_string(),
            example: kind.example().to_string(),
        });
        collected.recorded += 1;
    }

    collected
}
