use std::{collections::BTreeMap, path::Path};

use tracing::debug;

use crate::{
    error::{Error, Result},
    idf::FileIdfs,
    tokenizer::{TokenizedDocument, Tokenizer},
    walker,
};

/// Document identifier → raw text.
///
/// Ordered by identifier; ranking ties between documents resolve in this
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every `.txt` file directly inside `dir`, keyed by file name.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            return Err(Error::NotFound {
                kind: "corpus directory",
                name: dir.display().to_string(),
            });
        }
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "corpus path is not a directory: {}",
                dir.display()
            )));
        }

        let mut corpus = Self::new();
        for file in walker::discover_files(dir)? {
            let text = std::fs::read_to_string(&file.absolute_path).map_err(
                |source| Error::Read {
                    path: file.absolute_path.clone(),
                    source,
                },
            )?;
            corpus.insert(file.name, text);
        }

        debug!(dir = %dir.display(), documents = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Tokenize every document.
    pub fn tokenize(&self, tokenizer: &Tokenizer) -> TokenizedFiles {
        self.iter()
            .map(|(id, text)| (id.to_owned(), tokenizer.tokenize(text)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

/// Document identifier → tokenized document, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedFiles {
    documents: BTreeMap<String, TokenizedDocument>,
}

impl TokenizedFiles {
    pub fn get(&self, id: &str) -> Option<&TokenizedDocument> {
        self.documents.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenizedDocument)> {
        self.documents.iter().map(|(id, doc)| (id.as_str(), doc))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// File-level IDF values. Fails when there are no files.
    pub fn idfs(&self) -> Result<FileIdfs> {
        FileIdfs::compute(self.documents.values())
    }
}

impl<K: Into<String>> FromIterator<(K, TokenizedDocument)> for TokenizedFiles {
    fn from_iter<I: IntoIterator<Item = (K, TokenizedDocument)>>(
        iter: I,
    ) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(id, doc)| (id.into(), doc))
                .collect(),
        }
    }
}
