//! Whole-word exceptions.
//!
//! Words listed here are returned with their stored syllables and never reach
//! the boundary engine. Keys are lowercase; every entry's syllables
//! concatenate back to its key (checked in `rules/tests.rs`).

use std::collections::HashMap;

use once_cell::sync::Lazy;

type Entry = (&'static str, &'static [&'static str]);

const ENTRIES: &[Entry] = &[
    // Medical and technical terms
    ("otorrinolaringologista", &["o", "tor", "ri", "no", "la", "rin", "go", "lo", "gis", "ta"]),
    (
        "pneumoultramicroscopicossilicovulcanoconiótico",
        &[
            "pneu", "moul", "tra", "mi", "cros", "co", "pi", "co", "ssi", "li", "co", "vul", "ca", "no", "co", "ni",
            "ó", "ti", "co",
        ],
    ),
    ("gastroenterologista", &["gas", "tro", "en", "te", "ro", "lo", "gis", "ta"]),
    ("cardiologista", &["car", "di", "o", "lo", "gis", "ta"]),
    ("neurologista", &["neu", "ro", "lo", "gis", "ta"]),
    ("dermatologista", &["der", "ma", "to", "lo", "gis", "ta"]),
    ("oftalmologista", &["of", "tal", "mo", "lo", "gis", "ta"]),
    ("ortopedista", &["or", "to", "pe", "dis", "ta"]),
    ("urologista", &["u", "ro", "lo", "gis", "ta"]),
    // Irregular spellings and elisions
    ("idéia", &["i", "déi", "a"]),
    ("d'água", &["d'", "á", "gua"]),
    ("n'água", &["n'", "á", "gua"]),
    // Foreign words
    ("springy", &["sprin", "gy"]),
    ("scrawls", &["scrawls"]),
    (
        "anticonstitucionalissimamente",
        &["an", "ti", "cons", "ti", "tu", "ci", "o", "na", "lis", "si", "ma", "men", "te"],
    ),
    ("psiquiatra", &["psi", "qui", "a", "tra"]),
    ("estrela", &["es", "tre", "la"]),
    ("transporte", &["trans", "por", "te"]),
    ("reconstruir", &["re", "cons", "tru", "ir"]),
    // co- + vowel keeps the hiatus
    ("cooperar", &["co", "o", "pe", "rar"]),
    ("coordenar", &["co", "or", "de", "nar"]),
    ("coordenacao", &["co", "or", "de", "na", "cao"]),
    ("coordenador", &["co", "or", "de", "na", "dor"]),
    ("coordenadora", &["co", "or", "de", "na", "do", "ra"]),
    ("coordenadamente", &["co", "or", "de", "na", "da", "men", "te"]),
    // aqu- family
    ("aquarela", &["a", "qua", "re", "la"]),
    ("aquarelista", &["a", "qua", "re", "lis", "ta"]),
    ("aquario", &["a", "qua", "ri", "o"]),
    ("aquatico", &["a", "qua", "ti", "co"]),
    ("aquecer", &["a", "que", "cer"]),
    ("aquecimento", &["a", "que", "ci", "men", "to"]),
    ("aqueduto", &["a", "que", "du", "to"]),
    ("aquela", &["a", "que", "la"]),
    ("aquele", &["a", "que", "le"]),
    ("aquem", &["a", "quem"]),
    ("aqui", &["a", "qui"]),
    ("aquiescencia", &["a", "qui", "es", "cen", "ci", "a"]),
    ("aquiescer", &["a", "qui", "es", "cer"]),
    ("aquietar", &["a", "qui", "e", "tar"]),
    ("aquilatacao", &["a", "qui", "la", "ta", "cao"]),
    ("aquilatar", &["a", "qui", "la", "tar"]),
    ("aquilino", &["a", "qui", "li", "no"]),
    ("aquilo", &["a", "qui", "lo"]),
    ("aquinhoar", &["a", "qui", "nho", "ar"]),
    ("aquisicao", &["a", "qui", "si", "cao"]),
    ("aquisitivo", &["a", "qui", "si", "ti", "vo"]),
    ("aquoso", &["a", "quo", "so"]),
    // guerril- family
    ("guerrilha", &["guer", "ri", "lha"]),
    ("guerrilheiro", &["guer", "ri", "lhei", "ro"]),
    ("guerrilheira", &["guer", "ri", "lhei", "ra"]),
    ("guerrilheirismo", &["guer", "ri", "lhei", "ris", "mo"]),
];

static EXCEPTIONS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Stored syllables for `word_lower`, if it is a listed exception.
pub(crate) fn lookup_exception(word_lower: &str) -> Option<&'static [&'static str]> {
    EXCEPTIONS.get(word_lower).copied()
}

/// All exception entries, in declaration order.
#[cfg(test)]
pub(crate) fn exception_words() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    ENTRIES.iter().copied()
}
