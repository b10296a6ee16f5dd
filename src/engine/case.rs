//! Case restoration.
//!
//! Rules and exceptions operate on lowercase text. Restoration maps the result
//! back onto the caller's spelling by re-slicing the original word at the
//! syllables' character lengths, which preserves every casing pattern
//! (`CASA`, `Casa`, `cAsA`).
//!
//! Re-slicing needs the lowercase and original forms to have the same number
//! of characters. For the rare letters where lowercasing changes the count
//! (e.g. `İ`), the coarse casing shape from `WordTraits` is applied instead.

use super::trigger::{CaseShape, WordTraits};

/// Reapply the casing of `original` to `syllables`.
pub(crate) fn restore_case(original: &str, syllables: Vec<String>) -> Vec<String> {
    let lengths: Vec<usize> = syllables.iter().map(|s| s.chars().count()).collect();

    if lengths.iter().sum::<usize>() == original.chars().count() {
        return reslice(original, &lengths);
    }

    match WordTraits::scan(original).case_shape() {
        CaseShape::Upper => syllables.into_iter().map(|s| s.to_uppercase()).collect(),
        CaseShape::Title => capitalize_first(syllables),
        CaseShape::Other => syllables,
    }
}

fn reslice(original: &str, lengths: &[usize]) -> Vec<String> {
    let mut chars = original.chars();
    lengths.iter().map(|&n| chars.by_ref().take(n).collect()).collect()
}

fn capitalize_first(mut syllables: Vec<String>) -> Vec<String> {
    if let Some(first) = syllables.first_mut() {
        let mut chars = first.chars();
        if let Some(head) = chars.next() {
            *first = head.to_uppercase().chain(chars).collect();
        }
    }
    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reslices_every_casing_pattern() {
        assert_eq!(restore_case("CASA", owned(&["ca", "sa"])), vec!["CA", "SA"]);
        assert_eq!(restore_case("Casa", owned(&["ca", "sa"])), vec!["Ca", "sa"]);
        assert_eq!(restore_case("cAsA", owned(&["ca", "sa"])), vec!["cA", "sA"]);
        assert_eq!(restore_case("ÁGUA", owned(&["á", "gua"])), vec!["Á", "GUA"]);
    }

    #[test]
    fn falls_back_to_shape_when_lengths_differ() {
        // `İ` lowercases to two characters.
        let lower = "İstambul".to_lowercase();
        assert_eq!(lower.chars().count(), 9);
        let restored = restore_case("İstambul", vec![lower[..4].to_string(), lower[4..].to_string()]);
        assert!(restored[0].starts_with('I'));
        assert_eq!(restored[1], "tambul");
    }
}
