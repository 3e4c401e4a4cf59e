use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into words and sentences for one natural language.
///
/// The tokenizer and the sentence extractor never split text themselves, so
/// the language rules live behind this trait and can be swapped out.
pub trait Segmenter: fmt::Debug + Send + Sync {
    /// Word-level tokens in text order. Punctuation marks come back as
    /// separate tokens; whitespace does not.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Sentences in text order, trimmed of surrounding whitespace.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Segmenter backed by the Unicode (UAX #29) word and sentence boundary
/// rules, with English clitics split off the word they attach to
/// (`Python's` → `Python` `'s`, `don't` → `do` `n't`).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        for word in text.split_word_bounds() {
            if word.trim().is_empty() {
                continue;
            }
            match clitic_start(word) {
                Some(at) => {
                    let (stem, clitic) = word.split_at(at);
                    words.push(stem);
                    words.push(clitic);
                }
                None => words.push(word),
            }
        }
        words
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Straight and typographic apostrophes.
const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Clitics that follow an apostrophe, matched case-insensitively.
const CLITICS: [&str; 6] = ["s", "re", "ve", "ll", "d", "m"];

/// Byte offset of a trailing English clitic in `word`, if it has one and
/// something precedes it.
fn clitic_start(word: &str) -> Option<usize> {
    let (at, apostrophe) =
        word.char_indices().rev().find(|(_, c)| APOSTROPHES.contains(c))?;
    let rest = &word[at + apostrophe.len_utf8()..];

    let start = if rest.eq_ignore_ascii_case("t") {
        // The `n` belongs to the clitic: `can't` → `ca` `n't`.
        word[..at].strip_suffix(['n', 'N'])?.len()
    } else if CLITICS.iter().any(|c| rest.eq_ignore_ascii_case(c)) {
        at
    } else {
        return None;
    };

    (start > 0).then_some(start)
}
