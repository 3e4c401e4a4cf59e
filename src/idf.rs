//! Inverse document frequency tables.
//!
//! A run builds two tables: one over the corpus files and one over the
//! sentences of the best files. A word's IDF differs between the two, so
//! each table is tagged with the [`Scope`] it was computed over and the
//! rankers only accept the matching one.

use std::{collections::HashMap, fmt, marker::PhantomData};

use crate::{
    error::{Error, Result},
    tokenizer::TokenizedDocument,
};

/// The kind of collection an [`IdfTable`] was computed from.
pub trait Scope {
    const NAME: &'static str;
}

/// Whole corpus files.
#[derive(Debug, Clone, Copy)]
pub enum Files {}

/// Sentences extracted from the top-ranked files.
#[derive(Debug, Clone, Copy)]
pub enum Sentences {}

impl Scope for Files {
    const NAME: &'static str = "file";
}

impl Scope for Sentences {
    const NAME: &'static str = "sentence";
}

/// Word → `ln(N / df)` over one collection of `N` documents.
///
/// Contains exactly the words that occur in at least one document.
pub struct IdfTable<S> {
    values: HashMap<String, f64>,
    num_documents: usize,
    _scope: PhantomData<S>,
}

pub type FileIdfs = IdfTable<Files>;
pub type SentenceIdfs = IdfTable<Sentences>;

impl<S: Scope> IdfTable<S> {
    /// Compute IDF values over `documents`.
    ///
    /// Every document counts toward `N`, empty ones included. A word counts
    /// once per document no matter how often it repeats there. Fails on an
    /// empty collection.
    pub fn compute<'a, I>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TokenizedDocument>,
    {
        let mut document_frequency: HashMap<&'a str, usize> = HashMap::new();
        let mut num_documents = 0usize;

        for document in documents {
            num_documents += 1;
            for word in document.distinct() {
                *document_frequency.entry(word).or_default() += 1;
            }
        }

        if num_documents == 0 {
            return Err(Error::EmptyCollection { scope: S::NAME });
        }

        let n = num_documents as f64;
        let values = document_frequency
            .into_iter()
            .map(|(word, df)| (word.to_owned(), (n / df as f64).ln()))
            .collect();

        Ok(Self {
            values,
            num_documents,
            _scope: PhantomData,
        })
    }

    /// IDF of `word`. Words that occur in no document of this collection
    /// are an error; rankers use [`IdfTable::weight`] instead.
    pub fn get(&self, word: &str) -> Result<f64> {
        self.weight(word).ok_or_else(|| Error::UnknownWord {
            scope: S::NAME,
            word: word.to_owned(),
        })
    }

    /// IDF of `word`, or `None` when it occurs in no document.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    /// `N`, the size of the collection the table was computed over.
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Scope> fmt::Debug for IdfTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdfTable")
            .field("scope", &S::NAME)
            .field("num_documents", &self.num_documents)
            .field("words", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn doc(words: &[&str]) -> TokenizedDocument {
        TokenizedDocument::from_tokens(words.iter().copied())
    }

    #[test]
    fn idf_is_log_of_inverse_document_frequency() {
        let docs =
            [doc(&["cat", "mat"]), doc(&["cat", "dog"]), doc(&["bird"])];
        let idfs = FileIdfs::compute(&docs).unwrap();

        assert_eq!(idfs.num_documents(), 3);
        assert_eq!(idfs.len(), 4);
        let cat = idfs.get("cat").unwrap();
        assert!((cat - (3.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((idfs.get("bird").unwrap() - 3.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn repeats_count_once_per_document() {
        let docs = [doc(&["cat", "cat", "cat"]), doc(&["dog"])];
        let idfs = FileIdfs::compute(&docs).unwrap();
        assert!((idfs.get("cat").unwrap() - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn word_in_every_document_has_zero_idf() {
        let docs = [doc(&["cat", "mat"]), doc(&["cat"])];
        let idfs = FileIdfs::compute(&docs).unwrap();
        assert_eq!(idfs.get("cat").unwrap(), 0.0);
    }

    #[test]
    fn empty_documents_count_toward_n() {
        let docs = [doc(&["cat"]), doc(&[]), doc(&[]), doc(&[])];
        let idfs = SentenceIdfs::compute(&docs).unwrap();
        assert_eq!(idfs.num_documents(), 4);
        assert!((idfs.get("cat").unwrap() - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn unknown_word_is_an_error() {
        let docs = [doc(&["cat"])];
        let idfs = SentenceIdfs::compute(&docs).unwrap();

        let err = idfs.get("dog").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownWord { scope: "sentence", ref word } if word == "dog"
        ));
        assert_eq!(idfs.weight("dog"), None);
    }

    #[test]
    fn empty_collection_is_an_error() {
        let err = FileIdfs::compute(std::iter::empty::<&TokenizedDocument>())
            .unwrap_err();
        assert!(matches!(err, Error::EmptyCollection { scope: "file" }));
    }

    proptest! {
        #[test]
        fn idf_matches_formula(
            docs in prop::collection::vec(
                prop::collection::vec("[a-e]", 0..6),
                1..8,
            ),
        ) {
            let docs: Vec<TokenizedDocument> = docs
                .into_iter()
                .map(TokenizedDocument::from_tokens)
                .collect();
            let idfs = FileIdfs::compute(&docs).unwrap();
            let n = docs.len() as f64;

            for word in ["a", "b", "c", "d", "e"] {
                let df = docs.iter().filter(|d| d.contains(word)).count();
                match idfs.weight(word) {
                    Some(idf) => {
                        prop_assert!(df > 0);
                        prop_assert!(idf >= 0.0);
                        prop_assert!(idf <= n.ln() + 1e-12);
                        let expected = (n / df as f64).ln();
                        prop_assert!((idf - expected).abs() < 1e-12);
                    }
                    None => prop_assert_eq!(df, 0),
                }
            }
        }
    }
}
