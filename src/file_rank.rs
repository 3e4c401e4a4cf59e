use rayon::prelude::*;
use serde::Serialize;

use crate::{
    corpus::TokenizedFiles,
    idf::FileIdfs,
    tokenizer::{Query, TokenizedDocument},
};

/// A document and its TF-IDF score for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFile {
    pub name: String,
    pub score: f64,
}

/// Sum of `tf(w) × idf(w)` over the query words, where `tf` is the raw
/// occurrence count. Words missing from `idfs` contribute nothing.
pub fn tf_idf(
    query: &Query,
    document: &TokenizedDocument,
    idfs: &FileIdfs,
) -> f64 {
    query
        .words()
        .filter_map(|word| {
            let idf = idfs.weight(word)?;
            Some(document.count(word) as f64 * idf)
        })
        .sum()
}

/// Score every document and sort by descending score. Equal scores keep
/// identifier order.
pub fn rank_files(
    query: &Query,
    files: &TokenizedFiles,
    idfs: &FileIdfs,
) -> Vec<RankedFile> {
    let documents: Vec<(&str, &TokenizedDocument)> = files.iter().collect();

    let mut ranked: Vec<RankedFile> = documents
        .par_iter()
        .map(|&(name, document)| RankedFile {
            name: name.to_owned(),
            score: tf_idf(query, document, idfs),
        })
        .collect();

    // Stable, so ties stay in identifier order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}

/// Names of the `n` best-scoring documents, best first. Returns every
/// document when `n` exceeds the collection size.
pub fn top_files(
    query: &Query,
    files: &TokenizedFiles,
    idfs: &FileIdfs,
    n: usize,
) -> Vec<String> {
    rank_files(query, files, idfs)
        .into_iter()
        .take(n)
        .map(|r| r.name)
        .collect()
}
