//! Boundary placement: the core syllabification algorithm.
//!
//! Input is a lowercase, punctuation-free word already split into units by
//! `digraph::protect_digraphs`. Output is a sorted list of unit indices; a
//! boundary `b` means "a new syllable starts at unit `b`".
//!
//! ```text
//!  t r a b a l h o
//!  0 1 2 3 4 5 6 7      vowels at 2, 4, 7
//!      a│b a            one consonant     -> boundary at 3
//!          a│l h o      digraph `lh`      -> boundary at 5
//!
//!  tra │ ba │ lho
//! ```
//!
//! Every pair of consecutive vowels contributes at most the boundaries
//! computed from the consonant run between them; trailing consonants after the
//! last vowel are resolved separately.

use super::digraph::{Unit, UnitKind};
use crate::rules::{ConsonantCluster, cluster_kind, is_diphthong};

/// Compute syllable boundaries (unit indices) for `word`.
pub(crate) fn place_boundaries(word: &str, units: &[Unit]) -> Vec<usize> {
    if word.chars().count() <= 2 {
        return Vec::new();
    }

    let vowels: Vec<usize> = units.iter().enumerate().filter(|(_, u)| u.is_vowel()).map(|(i, _)| i).collect();
    let Some(&last_vowel) = vowels.last() else {
        return Vec::new();
    };
    if vowels.len() == 1 {
        return Vec::new();
    }

    let mut boundaries = Vec::new();

    for pair in vowels.windows(2) {
        let (current, next) = (pair[0], pair[1]);

        if next == current + 1 {
            let nucleus = run_text(word, &units[current..=next]);
            if !is_diphthong(&nucleus) {
                // Hiatus
                boundaries.push(next);
            }
            continue;
        }

        distribute(word, &units[current + 1..next], current + 1, &mut boundaries);
    }

    resolve_trailing(word, units, last_vowel, &mut boundaries);

    boundaries.sort_unstable();
    boundaries.dedup();

    tracing::trace!(word, ?boundaries, "placed boundaries");

    boundaries
}

/// Boundaries for a consonant run between two vowels; `start` is the unit
/// index of the run's first consonant.
fn distribute(word: &str, run: &[Unit], start: usize, boundaries: &mut Vec<usize>) {
    // A protected gu/qu always opens the next syllable on its own.
    if run.len() > 1 && run.last().is_some_and(|u| u.kind == UnitKind::ProtectedDigraph) {
        boundaries.push(start + run.len() - 1);
        return;
    }

    match run.len() {
        0 => {}
        // Maximal onset: the single consonant joins the next vowel.
        1 => boundaries.push(start),
        2 => match cluster_kind(&run_text(word, run)) {
            ConsonantCluster::InseparableOnset | ConsonantCluster::Digraph => boundaries.push(start),
            ConsonantCluster::SeparableDigraph
            | ConsonantCluster::SeparableCluster
            | ConsonantCluster::ComplexCluster
            | ConsonantCluster::Unclassified => boundaries.push(start + 1),
        },
        // Listed clusters (`str`, `scr`, `spr`, `spl`) and unlisted runs
        // alike keep the first consonant in the previous syllable.
        3 => {
            let kind = cluster_kind(&run_text(word, run));
            tracing::trace!(word, ?kind, "three-consonant run");
            boundaries.push(start + 1);
        }
        // Fallback approximation: cut after every second consonant.
        n => boundaries.extend((1..n).step_by(2).map(|offset| start + offset)),
    }
}

fn resolve_trailing(word: &str, units: &[Unit], last_vowel: usize, boundaries: &mut Vec<usize>) {
    let tail = &units[last_vowel + 1..];

    match tail.len() {
        0 | 1 => {}
        2 => match cluster_kind(&run_text(word, tail)) {
            ConsonantCluster::InseparableOnset | ConsonantCluster::Digraph => {}
            _ => boundaries.push(units.len() - 1),
        },
        _ => boundaries.push(units.len() - 1),
    }
}

fn run_text(word: &str, run: &[Unit]) -> String {
    run.iter().map(|u| u.text(word)).collect()
}
