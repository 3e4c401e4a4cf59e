//! Text normalization shared by documents, sentences and queries.
//!
//! Tokenizing lower-cases every word the [`Segmenter`] produces, folds
//! typographic apostrophes to `'`, drops bare punctuation marks and
//! stopwords, and sorts what is left. The sorted form
//! is canonical: two texts with the same multiset of content words produce
//! equal [`TokenizedDocument`]s.

use std::{collections::BTreeSet, sync::Arc};

use serde::Serialize;

use crate::{
    segment::{Segmenter, UnicodeSegmenter},
    stopwords::StopWords,
};

/// The normalized words of one document or sentence, sorted
/// lexicographically. Repeats are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenizedDocument {
    tokens: Vec<String>,
}

impl TokenizedDocument {
    /// Build from already-normalized tokens, in any order.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> =
            tokens.into_iter().map(Into::into).collect();
        tokens.sort_unstable();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Total token count, repeats included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of occurrences of `word`.
    pub fn count(&self, word: &str) -> usize {
        let start = self.tokens.partition_point(|t| t.as_str() < word);
        let end = self.tokens.partition_point(|t| t.as_str() <= word);
        end - start
    }

    pub fn contains(&self, word: &str) -> bool {
        self.tokens
            .binary_search_by(|t| t.as_str().cmp(word))
            .is_ok()
    }

    /// Each distinct word once, in sorted order.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        self.tokens.chunk_by(|a, b| a == b).map(|run| run[0].as_str())
    }
}

/// The distinct normalized words of a user question.
///
/// Backed by an ordered set so scores are always summed in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Turns raw text into [`TokenizedDocument`]s and [`Query`]s.
///
/// Holds the language configuration (segmenter and stopwords) so callers
/// resolve it once and pass the tokenizer around explicitly.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    segmenter: Arc<dyn Segmenter>,
    stopwords: StopWords,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl Tokenizer {
    /// Unicode segmentation with the given stopwords.
    pub fn new(stopwords: StopWords) -> Self {
        Self::with_segmenter(Arc::new(UnicodeSegmenter), stopwords)
    }

    pub fn with_segmenter(
        segmenter: Arc<dyn Segmenter>,
        stopwords: StopWords,
    ) -> Self {
        Self {
            segmenter,
            stopwords,
        }
    }

    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Normalize `text` into its sorted content words.
    ///
    /// Empty or all-stopword input yields an empty document.
    pub fn tokenize(&self, text: &str) -> TokenizedDocument {
        let tokens: Vec<String> = self
            .segmenter
            .words(text)
            .into_iter()
            .map(normalize)
            .filter(|word| {
                !is_punctuation_mark(word) && !self.stopwords.contains(word)
            })
            .collect();
        TokenizedDocument::from_tokens(tokens)
    }

    /// Tokenize a question and keep each word once.
    pub fn query(&self, text: &str) -> Query {
        self.tokenize(text).distinct().collect()
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

/// A token made of exactly one non-alphanumeric character. Mixed tokens such
/// as `"u.s"` or `"--"` are kept as they are.
fn is_punctuation_mark(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if !c.is_alphanumeric()
    )
}
