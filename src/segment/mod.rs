//! Word segmentation for KWIC rows.
//!
//! A [`WordSegmenter`] cuts a normalized line into contiguous spans; every
//! span holding at least one alphabetic character becomes a keyword, and the
//! spans on either side of it become its left and right context.

use unicode_segmentation::UnicodeSegmentation;
use crate::types::ContextTriple;

pub trait WordSegmenter: Sync + Send {
    /// Split `text` into contiguous spans. Concatenating the spans in order
    /// must give back `text` exactly.
    fn segments<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Every keyword of `text` with the text before and after it.
    fn contexts<'a>(&self, text: &'a str) -> Vec<ContextTriple<'a>> {
        let mut triples = Vec::new();
        let mut start = 0;

        for span in self.segments(text) {
            let end = start + span.len();
            if is_keyword(span) {
                triples.push(ContextTriple {
                    left: &text[..start],
                    word: span,
                    right: &text[end..],
                });
            }
            start = end;
        }

        debug_assert_eq!(start, text.len(), "segments must cover the whole text");
        triples
    }
}

/// A span is a keyword when it contains any alphabetic character, so pure
/// numbers, punctuation and whitespace never are.
pub fn is_keyword(span: &str) -> bool {
    span.chars().any(char::is_alphabetic)
}

/// Segmenter following the Unicode word boundary rules (UAX #29).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl WordSegmenter for UnicodeWordSegmenter {
    fn segments<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "Of that precios perle wythouten spotte.",
        "In Augoste in a hygh seysoun",
        "\"Sir, ye haf your tale mysetente, To say your perle is al awaye\"",
        "I don't knaw hit; 1390 wynter",
        "Þat wyste I wel, þat þou watz Þou",
        "",
    ];

    fn words<'a>(triples: &[ContextTriple<'a>]) -> Vec<&'a str> {
        triples.iter().map(|t| t.word).collect()
    }

    #[test]
    fn test_segments_round_trip() {
        let segmenter = UnicodeWordSegmenter::new();
        for text in SAMPLES {
            assert_eq!(segmenter.segments(text).concat(), *text);
        }
    }

    #[test]
    fn test_context_rebuilds_line() {
        let segmenter = UnicodeWordSegmenter::new();
        for text in SAMPLES {
            for triple in segmenter.contexts(text) {
                assert_eq!(format!("{}{}{}", triple.left, triple.word, triple.right), *text);
            }
        }
    }

    #[test]
    fn test_simple_line_contexts() {
        let segmenter = UnicodeWordSegmenter::new();
        let triples = segmenter.contexts("Of that precios perle wythouten spotte.");

        assert_eq!(
            words(&triples),
            vec!["Of", "that", "precios", "perle", "wythouten", "spotte"]
        );
        assert_eq!(triples[0].left, "");
        assert_eq!(triples[0].right, " that precios perle wythouten spotte.");
        assert_eq!(triples[3].left, "Of that precios ");
        assert_eq!(triples[3].right, " wythouten spotte.");
        assert_eq!(triples[5].left, "Of that precios perle wythouten ");
        assert_eq!(triples[5].right, ".");
    }

    #[test]
    fn test_numbers_and_punctuation_are_not_words() {
        let segmenter = UnicodeWordSegmenter::new();
        let triples = segmenter.contexts("I don't knaw hit; 1390 wynter");

        assert_eq!(words(&triples), vec!["I", "don't", "knaw", "hit", "wynter"]);
        assert!(triples.iter().all(|t| is_keyword(t.word)));
        assert!(triples[4].left.ends_with("1390 "));
    }

    #[test]
    fn test_thorn_counts_as_alphabetic() {
        let segmenter = UnicodeWordSegmenter::new();
        let triples = segmenter.contexts("Þat wyste I wel");
        assert_eq!(words(&triples), vec!["Þat", "wyste", "I", "wel"]);
    }

    #[test]
    fn test_empty_text_has_no_words() {
        let segmenter = UnicodeWordSegmenter::new();
        assert!(segmenter.contexts("").is_empty());
        assert!(segmenter.contexts(" .;, 42").is_empty());
    }

    #[test]
    fn test_context_slices_advance_with_segment_order() {
        let segmenter = UnicodeWordSegmenter::new();
        let triples = segmenter.contexts("To say your perle is al awaye");
        for pair in triples.windows(2) {
            assert!(pair[0].left.len() < pair[1].left.len());
            assert!(pair[0].right.len() > pair[1].right.len());
        }
    }
}
