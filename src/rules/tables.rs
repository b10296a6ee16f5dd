//! Letter and consonant-cluster classification tables.
//!
//! The sets below are the whole phonological knowledge of the boundary engine.
//! They are listed exhaustively rather than derived; adding a pair to one of
//! them changes where boundaries fall for every word containing it.
//!
//! Lookups take lowercase input. Callers lowercase once per word instead of
//! once per lookup.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_normalization::char::decompose_canonical;

/// Vowels, including every accented form that appears in Portuguese spelling.
static VOWELS: Lazy<HashSet<char>> = Lazy::new(|| "aeiouáâãàéêèíîìóôõòúûù".chars().collect());

/// Falling diphthongs: adjacent vowels that share one syllable nucleus.
static DIPHTHONGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ai", "au", "ei", "eu", "oi", "ou", "ui", "iu"]));

/// Obstruent + liquid onsets ("imperfect" clusters); never split.
static INSEPARABLE_ONSETS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "br", "bl", "cr", "cl", "dr", "dl", "fr", "fl", "gr", "gl", "pr", "pl", "tr", "tl", "vr", "vl",
    ])
});

static DIGRAPHS: Lazy<HashSet<&'static str>> = Lazy::new(|| HashSet::from(["nh", "lh", "ch", "gu", "qu"]));

/// Digraphs whose letters belong to different syllables (car-ro, pas-so, nas-cer).
static SEPARABLE_DIGRAPHS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["ss", "rr", "sc", "xc", "xs"]));

/// "Perfect" clusters, split between the two consonants.
///
/// A few pairs (`pl`, `pr`, `cl`, `cr`, `sc`) also appear in an earlier table;
/// classification precedence in [`cluster_kind`] decides for them.
static SEPARABLE_CLUSTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "st", "sp", "sc", "sm", "sn", "sl", "sr", "pt", "pc", "pm", "pn", "pl", "pr", "ct", "cp", "cm", "cn", "cl",
        "cr", "mt", "mp", "mc", "mn", "ml", "mr", "nt", "np", "nc", "nm", "nl", "nr",
    ])
});

static COMPLEX_CLUSTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| HashSet::from(["str", "spr", "scr", "spl"]));

static PREFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "a", "ab", "abs", "ad", "ante", "anti", "auto", "bi", "co", "com", "con", "contra", "de", "des", "dis", "e",
        "em", "en", "entre", "ex", "extra", "hiper", "in", "im", "inter", "intra", "ir", "macro", "micro", "mini",
        "multi", "neo", "para", "per", "peri", "poly", "post", "pre", "pro", "re", "semi", "sub", "super", "tele",
        "trans", "ultra", "uni", "vice",
    ])
});

/// How a run of consonants between two vowels is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ConsonantCluster {
    /// Obstruent + liquid (`tr`, `bl`, ...): both consonants open the next syllable.
    InseparableOnset,
    /// `nh`, `lh`, `ch`, `gu`, `qu`: kept together in the next syllable.
    Digraph,
    /// `rr`, `ss`, `sc`, `xc`, `xs`: split between the letters.
    SeparableDigraph,
    /// "Perfect" cluster (`st`, `pt`, `nt`, ...): split between the letters.
    SeparableCluster,
    /// Listed three-consonant cluster (`str`, `spr`, `scr`, `spl`). Shows up in
    /// boundary traces only; it splits like any other three-consonant run.
    ComplexCluster,
    Unclassified,
}

/// Classify a lowercase consonant run.
///
/// Two-letter runs are checked in a fixed order (first match wins):
/// separable digraph, inseparable onset, digraph, separable cluster.
pub(crate) fn cluster_kind(run: &str) -> ConsonantCluster {
    match run.chars().count() {
        2 if SEPARABLE_DIGRAPHS.contains(run) => ConsonantCluster::SeparableDigraph,
        2 if INSEPARABLE_ONSETS.contains(run) => ConsonantCluster::InseparableOnset,
        2 if DIGRAPHS.contains(run) => ConsonantCluster::Digraph,
        2 if SEPARABLE_CLUSTERS.contains(run) => ConsonantCluster::SeparableCluster,
        3 if COMPLEX_CLUSTERS.contains(run) => ConsonantCluster::ComplexCluster,
        _ => ConsonantCluster::Unclassified,
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c) || c.to_lowercase().next().is_some_and(|lower| VOWELS.contains(&lower))
}

pub(crate) fn is_diphthong(pair: &str) -> bool {
    DIPHTHONGS.contains(pair)
}

/// Longest listed prefix of `word_lower` that leaves at least one letter.
///
/// Informational only: boundary placement does not consult prefixes.
pub(crate) fn longest_prefix(word_lower: &str) -> Option<&'static str> {
    word_lower.char_indices().skip(1).filter_map(|(idx, _)| PREFIXES.get(&word_lower[..idx]).copied()).last()
}

/// Lowercase base letter of `c` with any accent or cedilla removed (`Ç` -> `c`).
pub(crate) fn fold_diacritic(c: char) -> char {
    let mut base = None;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        }
    });
    let base = base.unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_pairs_follow_precedence() {
        assert_eq!(cluster_kind("pr"), ConsonantCluster::InseparableOnset);
        assert_eq!(cluster_kind("cl"), ConsonantCluster::InseparableOnset);
        assert_eq!(cluster_kind("sc"), ConsonantCluster::SeparableDigraph);
        assert_eq!(cluster_kind("rr"), ConsonantCluster::SeparableDigraph);
        assert_eq!(cluster_kind("lh"), ConsonantCluster::Digraph);
        assert_eq!(cluster_kind("nt"), ConsonantCluster::SeparableCluster);
        assert_eq!(cluster_kind("rm"), ConsonantCluster::Unclassified);
    }

    #[test]
    fn three_letter_runs() {
        assert_eq!(cluster_kind("str"), ConsonantCluster::ComplexCluster);
        assert_eq!(cluster_kind("spl"), ConsonantCluster::ComplexCluster);
        assert_eq!(cluster_kind("nst"), ConsonantCluster::Unclassified);
    }

    #[test]
    fn vowels_cover_accents_and_case() {
        for c in "aeiouãõâêôáéíóúàE".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('ç'));
        assert!(!is_vowel('y'));
    }

    #[test]
    fn folding_strips_accents() {
        assert_eq!(fold_diacritic('ç'), 'c');
        assert_eq!(fold_diacritic('Ç'), 'c');
        assert_eq!(fold_diacritic('ã'), 'a');
        assert_eq!(fold_diacritic('Õ'), 'o');
        assert_eq!(fold_diacritic('r'), 'r');
    }

    #[test]
    fn diphthongs_and_prefixes() {
        assert!(is_diphthong("ou"));
        assert!(!is_diphthong("ia"));
        assert_eq!(longest_prefix("contradizer"), Some("contra"));
        assert_eq!(longest_prefix("desfazer"), Some("des"));
        assert_eq!(longest_prefix("casa"), None);
        assert_eq!(longest_prefix("re"), None);
    }
}
