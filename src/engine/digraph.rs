//! Digraph protection.
//!
//! The boundary engine does not look at raw characters; it looks at *units*.
//! A unit is normally a single letter, but `gu`/`qu` followed by `e`/`i` and
//! then a consonant (or the end of the word) is fused into one
//! `ProtectedDigraph` unit. Its `u` is silent, so it must not count as a
//! syllable nucleus, and the pair must open the following syllable
//! (`que-ro`, `gui-tar-ra`).
//!
//! ```text
//! "quero"  ──▶ [qu] [e] [r] [o]      (qu protected: e is followed by r)
//! "aguei"  ──▶ [a] [g] [u] [e] [i]   (not protected: e is followed by a vowel)
//! ```
//!
//! Units keep byte ranges into the lowercase word, so slicing the word at unit
//! boundaries restores the plain spelling. There is no separate unmarking
//! step to forget.
//!
//! Combining marks (decomposed input such as `a` + U+0303) are folded into the
//! unit of the letter they follow.

use crate::rules::is_vowel;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitKind {
    Vowel,
    Consonant,
    /// `gu`/`qu` before `e`/`i`; behaves as a single inseparable consonant.
    ProtectedDigraph,
}

/// One letter (or protected digraph) of a lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub kind: UnitKind,
}

impl Unit {
    pub fn is_vowel(&self) -> bool {
        self.kind == UnitKind::Vowel
    }

    pub fn text<'w>(&self, word: &'w str) -> &'w str {
        &word[self.start..self.end]
    }
}

/// Split a lowercase `word` into units, protecting `gu`/`qu` digraphs.
pub(crate) fn protect_digraphs(word: &str) -> Vec<Unit> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut units: Vec<Unit> = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if is_combining_mark(c) {
            match units.last_mut() {
                Some(last) => last.end = start + c.len_utf8(),
                None => units.push(Unit { start, end: start + c.len_utf8(), kind: UnitKind::Consonant }),
            }
            i += 1;
            continue;
        }

        if starts_protected_digraph(&chars, i) {
            let (u_start, u) = chars[i + 1];
            units.push(Unit { start, end: u_start + u.len_utf8(), kind: UnitKind::ProtectedDigraph });
            i += 2;
            continue;
        }

        let kind = if is_vowel(c) { UnitKind::Vowel } else { UnitKind::Consonant };
        units.push(Unit { start, end: start + c.len_utf8(), kind });
        i += 1;
    }

    units
}

/// `g`/`q` + `u` + `e`/`i`, then a consonant or the end of the word.
fn starts_protected_digraph(chars: &[(usize, char)], i: usize) -> bool {
    let letter = |offset: usize| chars.get(i + offset).map(|&(_, c)| c);

    if !matches!(letter(0), Some('g' | 'q')) || letter(1) != Some('u') || !matches!(letter(2), Some('e' | 'i')) {
        return false;
    }

    match letter(3) {
        None => true,
        Some(next) => next.is_alphabetic() && !is_vowel(next),
    }
}

/// Slice `word` at the given unit-index boundaries.
///
/// Boundaries must be sorted; out-of-range and duplicate boundaries are
/// ignored and empty slices are never produced.
pub(crate) fn split_units(word: &str, units: &[Unit], boundaries: &[usize]) -> Vec<String> {
    let mut syllables = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;

    for &boundary in boundaries {
        if boundary == 0 || boundary >= units.len() {
            continue;
        }
        let offset = units[boundary].start;
        if offset > start {
            syllables.push(word[start..offset].to_string());
            start = offset;
        }
    }

    if start < word.len() {
        syllables.push(word[start..].to_string());
    }

    syllables
}
