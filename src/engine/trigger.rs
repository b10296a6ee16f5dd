//! Word trait scanning (input pre-classification).
//!
//! Before any rule runs, a word is scanned once for a handful of cheap boolean
//! traits. The override layer uses them to decide whether segmentation is
//! needed, case restoration uses them to pick a casing shape, and the detector
//! uses them to classify R-sound hits without rescanning the token.
//!
//! ## Design notes
//!
//! - The scan is a single pass over `chars()` and allocates nothing.
//! - Case checks use Unicode case properties, so `Ç` and `Ã` count as
//!   uppercase letters.

bitflags::bitflags! {
    /// Coarse traits of a single word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct WordTraits: u8 {
        const HAS_HYPHEN     = 1 << 0;
        const HAS_APOSTROPHE = 1 << 1;
        const HAS_UPPER      = 1 << 2;
        const HAS_LOWER      = 1 << 3;
        /// The first cased letter is uppercase.
        const LEADING_UPPER  = 1 << 4;
        /// An uppercase letter appears after the first cased letter.
        const TRAILING_UPPER = 1 << 5;
        const HAS_R          = 1 << 6;
        /// Two consecutive `r`s, in any case.
        const HAS_RR         = 1 << 7;
    }
}

/// Casing shape of a word, as used by case restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaseShape {
    Upper,
    Title,
    Other,
}

pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(c, '-' | '\'' | '’')
}

impl WordTraits {
    /// Scan `word` for traits.
    pub fn scan(word: &str) -> Self {
        let mut traits = WordTraits::empty();
        let mut seen_cased = false;
        let mut prev_r = false;

        for c in word.chars() {
            match c {
                '-' => traits |= WordTraits::HAS_HYPHEN,
                '\'' | '’' => traits |= WordTraits::HAS_APOSTROPHE,
                _ => {}
            }

            if c.is_uppercase() {
                traits |= WordTraits::HAS_UPPER;
                if seen_cased {
                    traits |= WordTraits::TRAILING_UPPER;
                } else {
                    traits |= WordTraits::LEADING_UPPER;
                }
                seen_cased = true;
            } else if c.is_lowercase() {
                traits |= WordTraits::HAS_LOWER;
                seen_cased = true;
            }

            let is_r = matches!(c, 'r' | 'R');
            if is_r {
                traits |= WordTraits::HAS_R;
                if prev_r {
                    traits |= WordTraits::HAS_RR;
                }
            }
            prev_r = is_r;
        }

        traits
    }

    pub fn has_delimiter(self) -> bool {
        self.intersects(WordTraits::HAS_HYPHEN | WordTraits::HAS_APOSTROPHE)
    }

    pub(crate) fn case_shape(self) -> CaseShape {
        if self.contains(WordTraits::HAS_UPPER) && !self.contains(WordTraits::HAS_LOWER) {
            CaseShape::Upper
        } else if self.contains(WordTraits::LEADING_UPPER) && !self.contains(WordTraits::TRAILING_UPPER) {
            CaseShape::Title
        } else {
            CaseShape::Other
        }
    }
}
