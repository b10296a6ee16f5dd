//! Highlighted-text compositing.
//!
//! Compositing runs in two steps:
//!
//! 1. Ownership: every character covered by at least one hit is assigned to
//!    a single owner. The higher [`PatternKind::priority`] wins; on a tie the
//!    earlier hit keeps the character.
//! 2. Emission: the text is walked once. Unowned characters are copied as is
//!    and each run of characters with the same owner is wrapped in that
//!    owner's markers. Two wrapped runs that touch get the separator between
//!    them so their markers never merge.

use crate::{Markers, PatternKind, RrHit};

/// Wrap every hit of `text` in `markers`.
///
/// `hits` must carry byte offsets into `text`.
pub(crate) fn highlight(text: &str, hits: &[RrHit], markers: &Markers) -> String {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let owners = resolve_owners(&chars, hits);

    let mut out = String::with_capacity(text.len() + hits.len() * 8);
    let mut prev_marked = false;
    let mut i = 0;

    while i < chars.len() {
        let Some(owner) = owners[i] else {
            out.push(chars[i].1);
            prev_marked = false;
            i += 1;
            continue;
        };

        let run_start = i;
        while i < chars.len() && owners[i] == Some(owner) {
            i += 1;
        }
        let run_end = chars.get(i).map_or(text.len(), |&(idx, _)| idx);
        let run = &text[chars[run_start].0..run_end];

        if prev_marked {
            out.push_str(&markers.separator);
        }
        wrap(&mut out, run, hits[owner].kind, markers);
        prev_marked = true;
    }

    out
}

/// Owning hit index for every character of `chars`.
fn resolve_owners(chars: &[(usize, char)], hits: &[RrHit]) -> Vec<Option<usize>> {
    let mut owners: Vec<Option<usize>> = vec![None; chars.len()];

    for (h, hit) in hits.iter().enumerate() {
        let first = chars.partition_point(|&(idx, _)| idx < hit.start);
        for (slot, _) in owners[first..].iter_mut().zip(chars[first..].iter().take_while(|&&(idx, _)| idx < hit.end)) {
            let wins = match *slot {
                None => true,
                Some(current) => hit.kind.priority() > hits[current].kind.priority(),
            };
            if wins {
                *slot = Some(h);
            }
        }
    }

    owners
}

fn wrap(out: &mut String, run: &str, kind: PatternKind, markers: &Markers) {
    match kind {
        PatternKind::DoubleRr => {
            out.push_str(&markers.strong);
            push_focused(out, run, &markers.focus);
            out.push_str(&markers.strong);
        }
        PatternKind::SingleR => {
            out.push_str(&markers.emphasis);
            out.push_str(run);
            out.push_str(&markers.emphasis);
        }
    }
}

/// Copy `run`, wrapping each maximal run of `r`/`R` in `focus`.
fn push_focused(out: &mut String, run: &str, focus: &str) {
    let mut in_r = false;

    for c in run.chars() {
        let is_r = matches!(c, 'r' | 'R');
        if is_r != in_r {
            out.push_str(focus);
            in_r = is_r;
        }
        out.push(c);
    }
    if in_r {
        out.push_str(focus);
    }
}
