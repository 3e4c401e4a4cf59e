//! Sentence ranking by matching word measure with a query term density
//! tiebreak.
//!
//! The matching word measure (MWM) of a sentence is the sum of the IDF of
//! each query word it contains, counting presence only. Sentences with equal
//! MWM are ordered by query term density (QTD): the share of the sentence's
//! tokens that are query words. The result is a total order: MWM descending,
//! then QTD descending, then extraction order.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    idf::SentenceIdfs,
    sentence::SentenceSet,
    tokenizer::{Query, TokenizedDocument},
};

/// A sentence with its ranking keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSentence {
    pub text: String,
    /// Matching word measure.
    pub mwm: f64,
    /// Query term density.
    pub qtd: f64,
}

impl RankedSentence {
    /// Best first. Callers sort stably so full ties keep input order.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .mwm
            .total_cmp(&self.mwm)
            .then_with(|| other.qtd.total_cmp(&self.qtd))
    }
}

/// Compute `(mwm, qtd)` for one sentence.
///
/// Only query words present in `idfs` count, for both the IDF sum and the
/// density numerator. The density denominator is the full token count.
pub fn score_sentence(
    query: &Query,
    tokens: &TokenizedDocument,
    idfs: &SentenceIdfs,
) -> (f64, f64) {
    let mut mwm = 0.0;
    let mut matched = 0usize;

    for word in query.words() {
        let Some(idf) = idfs.weight(word) else {
            continue;
        };
        if tokens.contains(word) {
            mwm += idf;
            matched += 1;
        }
    }

    let qtd = if tokens.is_empty() {
        0.0
    } else {
        matched as f64 / tokens.len() as f64
    };
    (mwm, qtd)
}

/// Score and order every sentence in `sentences`.
pub fn rank_sentences(
    query: &Query,
    sentences: &SentenceSet,
    idfs: &SentenceIdfs,
) -> Vec<RankedSentence> {
    let mut ranked: Vec<RankedSentence> = sentences
        .records()
        .par_iter()
        .map(|record| {
            let (mwm, qtd) = score_sentence(query, &record.tokens, idfs);
            RankedSentence {
                text: record.text.clone(),
                mwm,
                qtd,
            }
        })
        .collect();

    ranked.sort_by(RankedSentence::rank_cmp);
    ranked
}

/// The `n` best sentences, best first. Returns all of them when fewer than
/// `n` exist.
pub fn top_sentences(
    query: &Query,
    sentences: &SentenceSet,
    idfs: &SentenceIdfs,
    n: usize,
) -> Vec<String> {
    rank_sentences(query, sentences, idfs)
        .into_iter()
        .take(n)
        .map(|r| r.text)
        .collect()
}
