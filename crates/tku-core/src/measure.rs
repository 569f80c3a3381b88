use std::borrow::Cow;

use crate::config::MeasureKind;
use crate::tokenizer::Encoder;

/// Counts for one source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Measurement {
    pub lines: usize,
    pub words: usize,
    pub tokens: usize,
    pub chars: usize,
}

impl Measurement {
    pub fn get(&self, kind: MeasureKind) -> usize {
        match kind {
            MeasureKind::Lines => self.lines,
            MeasureKind::Words => self.words,
            MeasureKind::Tokens => self.tokens,
            MeasureKind::Chars => self.chars,
        }
    }
}

/// Decode raw input as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Number of `'\n'` terminators. A final row without one is not a line.
pub fn count_lines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Number of maximal runs of non-whitespace characters.
///
/// Only ASCII space, tab, newline, carriage return and form feed separate
/// words. Non-ASCII spaces such as U+00A0 or U+3000 are part of a word.
pub fn count_words(text: &str) -> usize {
    text.split_ascii_whitespace().count()
}

/// Number of Unicode scalar values, not bytes.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

/// Measure `text`. Without an encoder the token count is 0 and the other
/// counts are unaffected.
pub fn measure(text: &str, encoder: Option<&dyn Encoder>) -> Measurement {
    Measurement {
        lines: count_lines(text),
        words: count_words(text),
        tokens: encoder.map_or(0, |e| e.encode(text).len()),
        chars: count_chars(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::TokenSequence;

    /// One token per word, so token counts are predictable.
    struct WordEncoder;

    impl Encoder for WordEncoder {
        fn encode(&self, text: &str) -> TokenSequence {
            text.split_whitespace()
                .map(|w| u32::try_from(w.len()).unwrap())
                .collect::<Vec<_>>()
                .into()
        }
    }

    #[test]
    fn lines_count_terminators_not_rows() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("no newline"), 0);
        assert_eq!(count_lines("one\n"), 1);
        assert_eq!(count_lines("one\ntwo"), 1);
        assert_eq!(count_lines("one\ntwo\n"), 2);
        assert_eq!(count_lines("\n\n\n"), 3);
    }

    #[test]
    fn crlf_counts_once() {
        assert_eq!(count_lines("a\r\nb\r\n"), 2);
    }

    #[test]
    fn words_are_maximal_non_whitespace_runs() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \t\n "), 0);
        assert_eq!(count_words("hello world\n"), 2);
        assert_eq!(count_words("  leading and   trailing  "), 3);
        assert_eq!(count_words("tab\tseparated\nlines"), 3);
    }

    #[test]
    fn non_ascii_spaces_do_not_split_words() {
        assert_eq!(count_words("10\u{00A0}km"), 1);
        assert_eq!(count_words("x\u{3000}y"), 1);
        assert_eq!(count_words("x\u{2003}y z"), 2);
        assert_eq!(count_words("form\x0cfeed\rreturn"), 3);
    }

    #[test]
    fn chars_count_scalars_not_bytes() {
        assert_eq!(count_chars("héllo"), 5);
        assert_eq!("héllo".len(), 6);
        assert_eq!(count_chars("日本語\n"), 4);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = decode_text(b"ab\xFFcd");
        assert_eq!(text, "ab\u{FFFD}cd");
        assert_eq!(count_chars(&text), 5);
    }

    #[test]
    fn measure_uses_encoder_for_tokens() {
        let encoder: &dyn Encoder = &WordEncoder;
        let m = measure("one two\nthree\n", Some(encoder));
        assert_eq!(
            m,
            Measurement {
                lines: 2,
                words: 3,
                tokens: 3,
                chars: 14,
            }
        );
    }

    #[test]
    fn missing_encoder_zeroes_tokens_only() {
        let m = measure("one two\nthree\n", None);
        assert_eq!(m.tokens, 0);
        assert_eq!((m.lines, m.words, m.chars), (2, 3, 14));
    }

    #[test]
    fn get_follows_kind() {
        let m = Measurement {
            lines: 1,
            words: 2,
            tokens: 3,
            chars: 4,
        };
        let values: Vec<_> = MeasureKind::ALL.iter().map(|&k| m.get(k)).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    proptest::proptest! {
        #[test]
        fn words_match_an_ascii_whitespace_split(text in "[\\PC\\t\\n\\r\\x0C]{0,200}") {
            let pieces = text
                .split(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c'))
                .filter(|piece| !piece.is_empty())
                .count();
            proptest::prop_assert_eq!(count_words(&text), pieces);
        }

        #[test]
        fn lines_match_newline_count(text in "[\\PC\\n]{0,200}") {
            proptest::prop_assert_eq!(count_lines(&text), text.matches('\n').count());
        }

        #[test]
        fn trailing_newline_adds_one_line(text in "[\\PC\\n]{0,200}") {
            let terminated = format!("{text}\n");
            proptest::prop_assert_eq!(count_lines(&terminated), count_lines(&text) + 1);
        }

        #[test]
        fn chars_never_exceed_bytes(bytes in proptest::collection::vec(proptest::num::u8::ANY, 0..200)) {
            let text = decode_text(&bytes);
            proptest::prop_assert!(count_chars(&text) <= text.len());
        }
    }
}
