use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    corpus::Corpus,
    error::Result,
    file_rank::{self, RankedFile},
    sentence::SentenceSet,
    sentence_rank::{self, RankedSentence},
    tokenizer::{Query, Tokenizer},
};

/// How many results each stage keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Top files whose sentences are ranked.
    pub file_matches: usize,
    /// Sentences returned.
    pub sentence_matches: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            file_matches: crate::config::DEFAULT_FILE_MATCHES,
            sentence_matches: crate::config::DEFAULT_SENTENCE_MATCHES,
        }
    }
}

/// The outcome of answering one question.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// Normalized query words.
    pub query: Query,
    /// Best files, best first.
    pub files: Vec<RankedFile>,
    /// Best sentences from those files, best first.
    pub sentences: Vec<RankedSentence>,
}

/// Answer `question` from `corpus`.
///
/// 1. Tokenize every file and compute file-level IDF
/// 2. Keep the `file_matches` best files by TF-IDF
/// 3. Split those files into sentences and compute sentence-level IDF
/// 4. Keep the `sentence_matches` best sentences by MWM, then QTD
///
/// Fails on an empty corpus. When the best files contain no usable
/// sentences the answer has no sentences.
pub fn answer(
    corpus: &Corpus,
    question: &str,
    tokenizer: &Tokenizer,
    params: &SearchParams,
) -> Result<Answer> {
    // Stage 1: file-level statistics
    let files = corpus.tokenize(tokenizer);
    let file_idfs = files.idfs()?;
    debug!(
        files = files.len(),
        vocabulary = file_idfs.len(),
        "computed file IDF"
    );

    let query = tokenizer.query(question);
    if query.is_empty() {
        warn!("query has no content words; results fall back to corpus order");
    }

    // Stage 2: file ranking
    let mut ranked_files = file_rank::rank_files(&query, &files, &file_idfs);
    ranked_files.truncate(params.file_matches);
    debug!(top = ?ranked_files, "ranked files");

    // Stage 3: sentences of the best files
    let sentences = SentenceSet::extract(
        tokenizer,
        ranked_files.iter().filter_map(|r| corpus.get(&r.name)),
    );
    if sentences.is_empty() {
        warn!("top files contain no sentences with content words");
        return Ok(Answer {
            query,
            files: ranked_files,
            sentences: Vec::new(),
        });
    }
    let sentence_idfs = sentences.idfs()?;
    debug!(
        sentences = sentences.len(),
        vocabulary = sentence_idfs.len(),
        "computed sentence IDF"
    );

    // Stage 4: sentence ranking
    let mut ranked_sentences =
        sentence_rank::rank_sentences(&query, &sentences, &sentence_idfs);
    ranked_sentences.truncate(params.sentence_matches);

    Ok(Answer {
        query,
        files: ranked_files,
        sentences: ranked_sentences,
    })
}

/// Write the answer sentences, one per line.
pub fn format_plain(answer: &Answer, out: &mut impl Write) -> io::Result<()> {
    for sentence in &answer.sentences {
        writeln!(out, "{}", sentence.text)?;
    }
    Ok(())
}

/// Write files and sentences with their scores.
pub fn format_human(answer: &Answer, out: &mut impl Write) -> io::Result<()> {
    if answer.files.is_empty() {
        writeln!(out, "No files found.")?;
        return Ok(());
    }

    writeln!(out, "Files:")?;
    for (i, f) in answer.files.iter().enumerate() {
        writeln!(out, "{:>3}. [{:.3}] {}", i + 1, f.score, f.name)?;
    }

    writeln!(out, "\nSentences:")?;
    if answer.sentences.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (i, s) in answer.sentences.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. [mwm {:.3}, qtd {:.3}] {}",
            i + 1,
            s.mwm,
            s.qtd,
            s.text
        )?;
    }
    Ok(())
}

/// Write the answer as a single JSON object.
pub fn format_json(answer: &Answer, out: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer(&mut *out, answer)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_corpus() -> Corpus {
        [
            (
                "python.txt",
                "Python is a programming language.\n\
                 Guido van Rossum created Python in 1991.\n\
                 Python emphasizes readability.",
            ),
            (
                "rust.txt",
                "Rust is a systems programming language. \
                 Rust guarantees memory safety without garbage collection.",
            ),
            (
                "cooking.txt",
                "Boil water in a large pot. Cook the pasta until tender.",
            ),
        ]
        .into_iter()
        .collect()
    }

    fn params(file_matches: usize, sentence_matches: usize) -> SearchParams {
        SearchParams {
            file_matches,
            sentence_matches,
        }
    }

    #[test]
    fn answers_from_best_file() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "Who created Python?",
            &Tokenizer::default(),
            &params(1, 1),
        )
        .unwrap();

        let query: Vec<&str> = answer.query.words().collect();
        assert_eq!(query, vec!["created", "python"]);
        assert_eq!(answer.files.len(), 1);
        assert_eq!(answer.files[0].name, "python.txt");
        assert_eq!(answer.sentences.len(), 1);
        assert_eq!(
            answer.sentences[0].text,
            "Guido van Rossum created Python in 1991."
        );
    }

    #[test]
    fn possessive_question_finds_the_bare_word() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "Who is Python's creator?",
            &Tokenizer::default(),
            &params(1, 1),
        )
        .unwrap();

        let query: Vec<&str> = answer.query.words().collect();
        assert_eq!(query, vec!["creator", "python"]);
        assert_eq!(answer.files[0].name, "python.txt");
        assert!(answer.files[0].score > 0.0);
    }

    #[test]
    fn sentences_only_come_from_top_files() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "memory safety",
            &Tokenizer::default(),
            &params(1, 10),
        )
        .unwrap();

        assert_eq!(answer.files[0].name, "rust.txt");
        assert_eq!(answer.sentences.len(), 2);
        assert_eq!(
            answer.sentences[0].text,
            "Rust guarantees memory safety without garbage collection."
        );
        assert!(answer.sentences.iter().all(|s| !s.text.contains("Python")));
    }

    #[test]
    fn counts_larger_than_available_return_everything() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "programming",
            &Tokenizer::default(),
            &params(10, 100),
        )
        .unwrap();

        assert_eq!(answer.files.len(), 3);
        assert_eq!(answer.sentences.len(), 7);
    }

    #[test]
    fn empty_query_still_answers() {
        let corpus = sample_corpus();
        let answer =
            answer(&corpus, "the of", &Tokenizer::default(), &params(1, 1))
                .unwrap();

        assert!(answer.query.is_empty());
        // All scores tie, so identifier order decides.
        assert_eq!(answer.files[0].name, "cooking.txt");
        assert_eq!(answer.sentences[0].text, "Boil water in a large pot.");
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let err = answer(
            &Corpus::new(),
            "anything",
            &Tokenizer::default(),
            &SearchParams::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyCollection { scope: "file" }));
    }

    #[test]
    fn top_file_without_sentences_gives_no_answer() {
        let corpus: Corpus = [("a.txt", "*** --- ***"), ("b.txt", "the and")]
            .into_iter()
            .collect();
        let answer = answer(
            &corpus,
            "anything",
            &Tokenizer::default(),
            &SearchParams::default(),
        )
        .unwrap();

        assert_eq!(answer.files.len(), 1);
        assert!(answer.sentences.is_empty());
    }

    #[test]
    fn plain_output_is_one_sentence_per_line() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "python",
            &Tokenizer::default(),
            &params(1, 2),
        )
        .unwrap();

        let mut out = Vec::new();
        format_plain(&answer, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn json_output_has_query_files_and_sentences() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "pasta",
            &Tokenizer::default(),
            &params(1, 1),
        )
        .unwrap();

        let mut out = Vec::new();
        format_json(&answer, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["query"], serde_json::json!(["pasta"]));
        assert_eq!(value["files"][0]["name"], "cooking.txt");
        assert!(value["files"][0]["score"].as_f64().unwrap() > 0.0);
        assert_eq!(
            value["sentences"][0]["text"],
            "Cook the pasta until tender."
        );
        assert!(value["sentences"][0]["mwm"].is_number());
        assert!(value["sentences"][0]["qtd"].is_number());
    }

    #[test]
    fn human_output_lists_scores() {
        let corpus = sample_corpus();
        let answer = answer(
            &corpus,
            "rust",
            &Tokenizer::default(),
            &params(2, 1),
        )
        .unwrap();

        let mut out = Vec::new();
        format_human(&answer, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Files:"));
        assert!(text.contains("rust.txt"));
        assert!(text.contains("Sentences:"));
        assert!(text.contains("mwm"));
    }
}
