//! Sentence extraction from the best-matching documents.
//!
//! Text is split into lines first and each line into sentences. The sentence
//! segmenter alone does not reliably stop at paragraph breaks, so the line
//! split is required for correct boundaries.

use std::collections::HashMap;

use crate::{
    error::Result,
    idf::SentenceIdfs,
    tokenizer::{TokenizedDocument, Tokenizer},
};

/// A sentence's original text and its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub text: String,
    pub tokens: TokenizedDocument,
}

/// Sentence text → tokens, in first-seen order.
///
/// Keyed by exact text: the same sentence appearing twice, in one document
/// or across documents, is stored once.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    records: Vec<SentenceRecord>,
    positions: HashMap<String, usize>,
}

impl SentenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the sentences of every text in `texts`, skipping sentences
    /// that tokenize to nothing.
    pub fn extract<'a, I>(tokenizer: &Tokenizer, texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new();
        for text in texts {
            set.extend_from_text(tokenizer, text);
        }
        set
    }

    /// Add the sentences of one document.
    pub fn extend_from_text(&mut self, tokenizer: &Tokenizer, text: &str) {
        for passage in text.lines() {
            for sentence in tokenizer.segmenter().sentences(passage) {
                let tokens = tokenizer.tokenize(sentence);
                if !tokens.is_empty() {
                    self.insert(sentence, tokens);
                }
            }
        }
    }

    /// Insert or replace a sentence. A replaced sentence keeps its original
    /// position and takes the new tokens.
    pub fn insert(
        &mut self,
        text: impl Into<String>,
        tokens: TokenizedDocument,
    ) {
        let text = text.into();
        match self.positions.get(&text).copied() {
            Some(i) => self.records[i].tokens = tokens,
            None => {
                self.positions.insert(text.clone(), self.records.len());
                self.records.push(SentenceRecord { text, tokens });
            }
        }
    }

    pub fn get(&self, text: &str) -> Option<&TokenizedDocument> {
        self.positions.get(text).map(|&i| &self.records[i].tokens)
    }

    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sentence-level IDF values. Fails when the set is empty.
    pub fn idfs(&self) -> Result<SentenceIdfs> {
        SentenceIdfs::compute(self.records.iter().map(|r| &r.tokens))
    }
}
