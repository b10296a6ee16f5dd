//! Static phonological rules for European Portuguese.
//!
//! Everything here is read-only data built once on first use:
//!
//! - `tables.rs`: letter classes and consonant-cluster classification.
//! - `lexicon.rs`: whole-word exceptions that bypass the boundary engine.
//!
//! The boundary engine (`crate::engine`) only ever *reads* these tables, so the
//! lookups are safe to share between threads without locking.

#[path = "rules/lexicon.rs"]
mod lexicon;
#[path = "rules/tables.rs"]
mod tables;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

#[cfg(test)]
pub(crate) use lexicon::exception_words;
pub(crate) use lexicon::lookup_exception;
pub(crate) use tables::{ConsonantCluster, cluster_kind, fold_diacritic, is_diphthong, is_vowel, longest_prefix};
