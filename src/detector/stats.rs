//! Aggregate hit statistics.

use crate::{PatternKind, RrHit, Statistics};
use std::collections::{BTreeMap, HashSet};

pub(crate) fn statistics(hits: &[RrHit]) -> Statistics {
    let mut by_difficulty: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_pattern_kind = BTreeMap::from([(PatternKind::DoubleRr, 0), (PatternKind::SingleR, 0)]);
    let mut words = HashSet::new();

    for hit in hits {
        *by_difficulty.entry(hit.difficulty.clone()).or_default() += 1;
        *by_pattern_kind.entry(hit.kind).or_default() += 1;
        words.insert(hit.word.to_lowercase());
    }

    Statistics { total_patterns: hits.len(), by_difficulty, by_pattern_kind, unique_words: words.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(word: &str, kind: PatternKind) -> RrHit {
        RrHit {
            word: word.to_string(),
            syllable: String::new(),
            start: 0,
            end: 0,
            difficulty: kind.difficulty().to_string(),
            kind,
            pronunciation: kind.pronunciation().to_string(),
            example: kind.example().to_string(),
        }
    }

    #[test]
    fn empty_hits() {
        let stats = statistics(&[]);
        assert_eq!(stats.total_patterns, 0);
        assert!(stats.by_difficulty.is_empty());
        assert_eq!(stats.by_pattern_kind.len(), 2);
        assert!(stats.by_pattern_kind.values().all(|&n| n == 0));
        assert_eq!(stats.unique_words, 0);
    }

    #[test]
    fn counts_kinds_and_distinct_words() {
        let hits = [
            hit("Carro", PatternKind::DoubleRr),
            hit("carro", PatternKind::DoubleRr),
            hit("rato", PatternKind::SingleR),
        ];
        let stats = statistics(&hits);

        assert_eq!(stats.total_patterns, 3);
        assert_eq!(stats.by_difficulty["hard"], 3);
        assert_eq!(stats.by_pattern_kind[&PatternKind::DoubleRr], 2);
        assert_eq!(stats.by_pattern_kind[&PatternKind::SingleR], 1);
        assert_eq!(stats.unique_words, 2);
    }
}
