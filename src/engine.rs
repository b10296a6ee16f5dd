//! Syllabification engine.
//!
//! This module is the entry point for turning one word into syllables. It is
//! split into focused submodules under `src/engine/`, wired together by
//! `overrides.rs`.
//!
//! ## How the parts work together
//!
//! ```text
//! word ── WordTraits::scan            (trigger.rs)
//!          │    delimiters, casing, r / rr
//!          v
//!        syllabify_word               (overrides.rs)
//!          ├─ exception lexicon       (rules/lexicon.rs)
//!          ├─ ção / cao suffix
//!          ├─ hyphen / apostrophe segments ──▶ syllabify_word (recursive)
//!          └─ lowercase word
//!               │
//!               v
//!             protect_digraphs        (digraph.rs)
//!               │  Vec<Unit>, gu/qu fused
//!               v
//!             place_boundaries        (boundary.rs)
//!               │  consonant runs classified via rules/tables.rs
//!               v
//!             split_units + restore_case  (digraph.rs, case.rs)
//!               │
//!               v
//!          Syllabified { syllables, route }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: one-pass word scan into `WordTraits` bit flags.
//! - `digraph.rs`: unit segmentation with `gu`/`qu` protection, and slicing a
//!   word back into syllables.
//! - `boundary.rs`: the boundary-placement algorithm over units.
//! - `case.rs`: maps lowercase syllables back onto the caller's casing.
//! - `overrides.rs`: the whole-word layer and the public-facing pipeline.
//!
//! ## Debugging
//!
//! Routing decisions are logged with `tracing` at `debug` level and boundary
//! placement at `trace` level. The CLI enables them when `SILABA_DEBUG` is set.

#[path = "engine/boundary.rs"]
mod boundary;
#[path = "engine/case.rs"]
mod case;
#[path = "engine/digraph.rs"]
mod digraph;
#[path = "engine/overrides.rs"]
mod overrides;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use overrides::syllabify_word;
pub(crate) use trigger::WordTraits;
