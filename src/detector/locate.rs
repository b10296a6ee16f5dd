//! Tokenization and token location.

use crate::Range;

/// Maximal runs of Portuguese letters (with combining marks) in `text`.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    regex!(r"[a-zA-ZáâãàéêèíîìóôõòúûùçÁÂÃÀÉÊÈÍÎÌÓÔÕÒÚÛÙÇ\p{Mn}]+").find_iter(text).map(|m| m.as_str()).collect()
}

/// A token of running text, as seen by `syllabify_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextToken<'a> {
    /// Letters, possibly joined by hyphens or apostrophes (`guarda-chuva`, `d'água`).
    Word(&'a str),
    /// Any other run of non-space characters (punctuation, digits).
    Other(&'a str),
}

/// Split `text` into words and the punctuation between them, dropping whitespace.
///
/// Unlike [`tokenize`], hyphens and apostrophes between letters stay inside
/// the word.
pub(crate) fn text_tokens(text: &str) -> Vec<TextToken<'_>> {
    regex!(
        r"(?P<word>[a-zA-ZáâãàéêèíîìóôõòúûùçÁÂÃÀÉÊÈÍÎÌÓÔÕÒÚÛÙÇ\p{Mn}]+(?:['’-][a-zA-ZáâãàéêèíîìóôõòúûùçÁÂÃÀÉÊÈÍÎÌÓÔÕÒÚÛÙÇ\p{Mn}]+)*)|[^\sa-zA-ZáâãàéêèíîìóôõòúûùçÁÂÃÀÉÊÈÍÎÌÓÔÕÒÚÛÙÇ\p{Mn}]+"
    )
    .captures_iter(text)
    .filter_map(|caps| match caps.name("word") {
        Some(word) => Some(TextToken::Word(word.as_str())),
        None => caps.get(0).map(|other| TextToken::Other(other.as_str())),
    })
    .collect()
}

/// Finds successive tokens in a text, left to right.
pub(crate) struct Locator<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Locator<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Byte range of the first case-insensitive occurrence of `token` at or
    /// after the cursor, else anywhere in the text.
    ///
    /// The cursor never moves backwards.
    pub fn locate(&mut self, token: &str) -> Option<Range> {
        let range = find_ignore_case(self.text, self.cursor, token).or_else(|| find_ignore_case(self.text, 0, token))?;
        self.cursor = self.cursor.max(range.end);
        Some(range)
    }
}

fn find_ignore_case(haystack: &str, from: usize, needle: &str) -> Option<Range> {
    if needle.is_empty() {
        return None;
    }

    let tail = haystack.get(from..)?;
    tail.char_indices().find_map(|(idx, _)| {
        let start = from + idx;
        match_len(&haystack[start..], needle).map(|len| Range { start, end: start + len })
    })
}

/// Byte length of the prefix of `hay` that equals `needle` ignoring case.
fn match_len(hay: &str, needle: &str) -> Option<usize> {
    let mut hay_chars = hay.char_indices();
    let mut end = 0;

    for n in needle.chars() {
        let (idx, h) = hay_chars.next()?;
        if !h.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
        end = idx + h.len_utf8();
    }

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_letters_only() {
        assert_eq!(tokenize("O carro, vermelho!"), vec!["O", "carro", "vermelho"]);
        assert_eq!(tokenize("Ação: 42 cães."), vec!["Ação", "cães"]);
        assert_eq!(tokenize("d'água guarda-chuva"), vec!["d", "água", "guarda", "chuva"]);
        assert_eq!(tokenize("corac\u{327}a\u{303}o"), vec!["corac\u{327}a\u{303}o"]);
        assert!(tokenize("123 ... !!").is_empty());
    }

    #[test]
    fn text_tokens_keep_joined_words_whole() {
        assert_eq!(text_tokens("O guarda-chuva, d'água."), vec![
            TextToken::Word("O"),
            TextToken::Word("guarda-chuva"),
            TextToken::Other(","),
            TextToken::Word("d'água"),
            TextToken::Other("."),
        ]);
        assert_eq!(text_tokens("n’ele - 42!"), vec![
            TextToken::Word("n’ele"),
            TextToken::Other("-"),
            TextToken::Other("42!"),
        ]);
        assert!(text_tokens("  \n ").is_empty());
    }

    #[test]
    fn locate_advances_cursor() {
        let mut locator = Locator::new("casa e casa");
        assert_eq!(locator.locate("casa"), Some(Range { start: 0, end: 4 }));
        assert_eq!(locator.locate("casa"), Some(Range { start: 7, end: 11 }));
    }

    #[test]
    fn locate_ignores_case() {
        let mut locator = Locator::new("O CORAÇÃO");
        assert_eq!(locator.locate("coração"), Some(Range { start: 2, end: 2 + "CORAÇÃO".len() }));
    }

    #[test]
    fn locate_falls_back_to_start() {
        let mut locator = Locator::new("casa");
        assert_eq!(locator.locate("casa"), Some(Range { start: 0, end: 4 }));
        assert_eq!(locator.locate("casa"), Some(Range { start: 0, end: 4 }));
        assert_eq!(locator.cursor, 4);
    }

    #[test]
    fn locate_missing_token() {
        let mut locator = Locator::new("casa");
        assert_eq!(locator.locate("carro"), None);
        assert_eq!(locator.locate(""), None);
        assert_eq!(locator.cursor, 0);
    }
}
