//! questions - answer a natural-language question from a folder of text files.
//!
//! The pipeline ranks whole files by TF-IDF, splits the best files into
//! sentences, and ranks those sentences by matching word measure (the summed
//! IDF of the query words they contain), breaking ties by query term
//! density. No index is kept; every question recomputes its statistics from
//! the corpus in memory.
//!
//! # Quick start
//!
//! ```
//! use questions::{Corpus, Tokenizer};
//! use questions::search::{self, SearchParams};
//!
//! let corpus: Corpus = [
//!     ("cats.txt", "Cats purr when they are happy. Cats sleep a lot."),
//!     ("dogs.txt", "Dogs bark at strangers."),
//! ]
//! .into_iter()
//! .collect();
//!
//! let tokenizer = Tokenizer::default();
//! let answer = search::answer(
//!     &corpus,
//!     "Why do cats purr?",
//!     &tokenizer,
//!     &SearchParams::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(answer.files[0].name, "cats.txt");
//! assert_eq!(answer.sentences[0].text, "Cats purr when they are happy.");
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod file_rank;
pub mod idf;
pub mod search;
pub mod segment;
pub mod sentence;
pub mod sentence_rank;
pub mod stopwords;
pub mod tokenizer;
pub mod walker;

pub use config::Settings;
pub use corpus::{Corpus, TokenizedFiles};
pub use error::{Error, Result};
pub use file_rank::{RankedFile, top_files};
pub use idf::{FileIdfs, IdfTable, SentenceIdfs};
pub use sentence::{SentenceRecord, SentenceSet};
pub use sentence_rank::{RankedSentence, top_sentences};
pub use stopwords::StopWords;
pub use tokenizer::{Query, TokenizedDocument, Tokenizer};
