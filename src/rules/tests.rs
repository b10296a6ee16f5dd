use crate::rules::{exception_words, is_diphthong};
use crate::{PatternKind, analyze, syllabify};

#[test]
fn syllabification_examples() {
    // Array of (expected syllables joined by '-', input word)
    let cases: Vec<(&str, &str)> = vec![
        ("ca-sa", "casa"),
        ("tra-ba-lho", "trabalho"),
        ("car-ro", "carro"),
        ("pes-so-a", "pessoa"),
        ("cha-ve", "chave"),
        ("ni-nho", "ninho"),
        ("pa-la-vra", "palavra"),
        ("es-co-la", "escola"),
        ("nas-cer", "nascer"),
        ("ob-ter", "obter"),
        ("pac-to", "pacto"),
        ("rit-mo", "ritmo"),
        ("a-mi-go", "amigo"),
        ("mar", "mar"),
        ("Bra-sil", "Brasil"),
        ("POR-TU-GAL", "PORTUGAL"),
        ("pi-a-no", "piano"),
        ("fei-to", "feito"),
        ("coi-sa", "coisa"),
        ("eu-ro-pa", "europa"),
        ("cui-da-do", "cuidado"),
        ("ou-to-no", "outono"),
        ("que-ro", "quero"),
        ("guer-ra", "guerra"),
        ("ia", "ia"),
        ("x", "x"),
        ("co-ra-ção", "coração"),
        ("na-ção", "nação"),
        ("bem---vin-do", "bem-vindo"),
        ("trans-por-te", "transporte"),
        ("guer-ri-lhei-ro", "guerrilheiro"),
    ];

    for (expected, input) in cases {
        assert_eq!(syllabify(input).join("-"), expected, "input: {input}");
    }
}

#[test]
fn exceptions_are_returned_exactly() {
    for (word, stored) in exception_words() {
        assert_eq!(stored.concat(), word, "lexicon entry does not spell its key");
        assert_eq!(syllabify(word), stored.to_vec(), "word: {word}");
    }
}

#[test]
fn syllables_concatenate_to_normalized_word() {
    let cases: Vec<(&str, &str)> = vec![
        ("casa", "casa,"),
        ("Trabalho", "Trabalho!"),
        ("CORAÇÃO", "CORAÇÃO"),
        ("olá", "«olá»"),
        ("guarda-chuva", "guarda-chuva"),
        ("d'água", "d'água"),
        ("Extraordinário", "Extraordinário"),
        ("Pneumonia", "Pneumonia"),
        ("pé-de-moleque", "pé-de-moleque."),
        ("AdMiNiStRaR", "AdMiNiStRaR"),
    ];

    for (normalized, input) in cases {
        assert_eq!(syllabify(input).concat(), normalized, "input: {input}");
    }
}

#[test]
fn diphthongs_are_never_split() {
    let words = ["pais", "feito", "coisa", "europa", "cuidado", "outono", "abacateiro", "pauta", "viu", "leilão"];

    for word in words {
        let syllables = syllabify(word);
        for pair in syllables.windows(2) {
            let (Some(last), Some(first)) = (pair[0].chars().last(), pair[1].chars().next()) else {
                continue;
            };
            let joint: String = [last, first].iter().collect();
            assert!(!is_diphthong(&joint), "{word} split inside '{joint}': {syllables:?}");
        }
    }
}

#[test]
fn cao_suffix_is_final_syllable() {
    let words = ["coração", "CORAÇÃO", "nação", "Educacao", "informação", "solução", "cão", "Aquisicao"];

    for word in words {
        let syllables = syllabify(word);
        let ending: String = word.chars().skip(word.chars().count() - 3).collect();
        assert_eq!(syllables.last(), Some(&ending), "word: {word}");
        assert_eq!(syllables.concat(), word);
    }
}

#[test]
fn double_rr_iff_word_has_rr() {
    let text = "O carro da Terra correu para o rio; a arara comeu a pera e o GUERREIRO riu.";
    let res = analyze(text);

    assert!(res.hits.iter().any(|h| h.kind == PatternKind::DoubleRr));
    assert!(res.hits.iter().any(|h| h.kind == PatternKind::SingleR));
    for hit in &res.hits {
        assert_eq!(hit.kind == PatternKind::DoubleRr, hit.word.to_lowercase().contains("rr"), "hit: {hit:?}");
        assert_eq!(text[hit.start..hit.end].to_lowercase(), hit.syllable.to_lowercase());
    }
}
