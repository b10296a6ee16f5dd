//! Whole-word overrides and the syllabification pipeline.
//!
//! ```text
//! word ── strip punctuation ──┬─ ≤1 char?            -> Trivial
//!                             ├─ exception lexicon   -> Exception  (case restored)
//!                             ├─ ends in ção / cao   -> Suffix     (base recursed)
//!                             ├─ hyphen / apostrophe -> Segmented  (segments recursed)
//!                             └─ boundary engine     -> Rules      (case restored)
//! ```
//!
//! The checks run in that order and the first one that applies wins. Suffix
//! and segment handling recurse through [`syllabify_word`], so every segment
//! gets the same treatment as a standalone word.

use super::boundary::place_boundaries;
use super::case::restore_case;
use super::digraph::{protect_digraphs, split_units};
use super::trigger::{WordTraits, is_delimiter};
use crate::rules::{fold_diacritic, lookup_exception};
use crate::{Route, Syllabified};
use unicode_normalization::char::is_combining_mark;

/// Split `word` into syllables.
///
/// Never fails: empty, single-character and punctuation-only words come back
/// as a single unit holding the input.
pub(crate) fn syllabify_word(word: &str) -> Syllabified {
    if word.chars().count() <= 1 {
        return Syllabified::trivial(word);
    }

    let normalized = strip_punctuation(word);
    if normalized.is_empty() {
        return Syllabified::trivial(word);
    }
    if normalized.chars().count() == 1 {
        return Syllabified::trivial(&normalized);
    }

    let result = route(&normalized);
    tracing::debug!(word, route = ?result.route, syllables = ?result.syllables, "syllabified");
    result
}

fn route(word: &str) -> Syllabified {
    let lower = word.to_lowercase();

    if let Some(stored) = lookup_exception(&lower) {
        let syllables = stored.iter().map(|s| s.to_string()).collect();
        return Syllabified { syllables: restore_case(word, syllables), route: Route::Exception };
    }

    if let Some(at) = suffix_start(word) {
        return split_suffix(word, at);
    }

    if WordTraits::scan(word).has_delimiter() {
        return segment(word);
    }

    let units = protect_digraphs(&lower);
    let boundaries = place_boundaries(&lower, &units);
    let syllables = split_units(&lower, &units, &boundaries);

    Syllabified { syllables: restore_case(word, syllables), route: Route::Rules }
}

/// Keep letters, digits, combining marks and segment delimiters.
///
/// Whitespace is dropped along with punctuation: input is a single word, and
/// multi-word text goes through `syllabify_text`.
fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|&c| c.is_alphanumeric() || is_combining_mark(c) || is_delimiter(c)).collect()
}

/// Byte index where a trailing `ção`/`cao` starts, ignoring case and accents.
///
/// Combining marks stay attached to the letter before them, so decomposed
/// input (`c` + U+0327) is matched too.
fn suffix_start(word: &str) -> Option<usize> {
    let mut folded = ['\0'; 3];
    let mut letters = 0;
    let mut start = word.len();

    for (idx, c) in word.char_indices().rev() {
        if letters == folded.len() {
            break;
        }
        start = idx;
        if is_combining_mark(c) {
            continue;
        }
        letters += 1;
        folded[folded.len() - letters] = fold_diacritic(c);
    }

    (folded == ['c', 'a', 'o']).then_some(start)
}

fn split_suffix(word: &str, at: usize) -> Syllabified {
    let (base, ending) = word.split_at(at);

    let mut syllables = match base.chars().count() {
        0 => Vec::new(),
        1 | 2 => vec![base.to_string()],
        _ => syllabify_word(base).syllables,
    };
    syllables.push(ending.to_string());

    Syllabified { syllables, route: Route::Suffix }
}

/// Syllabify each delimiter-separated segment; delimiters become their own units.
fn segment(word: &str) -> Syllabified {
    let mut syllables = Vec::new();
    let mut last = 0;

    for delimiter in regex!(r"['’-]").find_iter(word) {
        push_segment(&mut syllables, &word[last..delimiter.start()]);
        syllables.push(delimiter.as_str().to_string());
        last = delimiter.end();
    }
    push_segment(&mut syllables, &word[last..]);

    Syllabified { syllables, route: Route::Segmented }
}

fn push_segment(syllables: &mut Vec<String>, segment: &str) {
    if !segment.is_empty() {
        syllables.extend(syllabify_word(segment).syllables);
    }
}
