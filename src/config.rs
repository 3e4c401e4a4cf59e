use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    search::SearchParams,
    stopwords::StopWords,
    tokenizer::Tokenizer,
};

/// Number of top files whose sentences are ranked, unless overridden.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Number of sentences printed, unless overridden.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

pub const FILE_MATCHES_ENV: &str = "QUESTIONS_FILE_MATCHES";
pub const SENTENCE_MATCHES_ENV: &str = "QUESTIONS_SENTENCE_MATCHES";
pub const STOPWORDS_ENV: &str = "QUESTIONS_STOPWORDS";

/// Settings for one run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub file_matches: usize,
    pub sentence_matches: usize,
    pub stopwords: StopWords,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
            stopwords: StopWords::english(),
        }
    }
}

impl Settings {
    /// Resolve each setting from, in order of priority:
    /// 1. An explicit value (from the command line)
    /// 2. Its `QUESTIONS_*` environment variable
    /// 3. The built-in default
    pub fn resolve(
        file_matches: Option<usize>,
        sentence_matches: Option<usize>,
        stopwords: Option<&Path>,
    ) -> Result<Self> {
        Self::resolve_with(file_matches, sentence_matches, stopwords, |key| {
            std::env::var(key).ok()
        })
    }

    fn resolve_with(
        file_matches: Option<usize>,
        sentence_matches: Option<usize>,
        stopwords: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let count = |explicit: Option<usize>, key: &str, default: usize| {
            match explicit {
                Some(n) => Ok(n),
                None => match env(key) {
                    Some(val) => parse_count(&val).map_err(|e| {
                        Error::Config(format!("{key}: {e}"))
                    }),
                    None => Ok(default),
                },
            }
        };

        let file_matches =
            count(file_matches, FILE_MATCHES_ENV, DEFAULT_FILE_MATCHES)?;
        let sentence_matches = count(
            sentence_matches,
            SENTENCE_MATCHES_ENV,
            DEFAULT_SENTENCE_MATCHES,
        )?;

        let stopwords_path = stopwords
            .map(Path::to_path_buf)
            .or_else(|| env(STOPWORDS_ENV).map(PathBuf::from));
        let stopwords = match stopwords_path {
            Some(path) => StopWords::load(&path)?,
            None => StopWords::english(),
        };

        Ok(Self {
            file_matches,
            sentence_matches,
            stopwords,
        })
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            file_matches: self.file_matches,
            sentence_matches: self.sentence_matches,
        }
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.stopwords.clone())
    }
}

/// Parse a result count; must be a positive integer.
pub fn parse_count(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid count '{}': {e}", s.trim())),
    }
}
