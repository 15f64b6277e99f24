//! Query ranking over a precomputed score index.

use crate::domain::{Ranking, ScoreMap};
use crate::error::{Result, RetrievalError};
use crate::utils::{remove_stopwords, tokenize};
use std::cmp::Ordering;

/// Rank every document of `index` against `query`.
///
/// The query is tokenized and stopword-filtered; a document scores the sum of
/// its entries for the query terms (missing terms add nothing). The result is
/// sorted by score, best first, and equal scores keep index order.
pub fn rank_documents<S: AsRef<str>>(
    index: &[ScoreMap],
    query: &str,
    stopwords: &[S],
) -> Result<Ranking> {
    if index.is_empty() {
        return Err(RetrievalError::EmptyInput("index"));
    }
    if query.is_empty() {
        return Err(RetrievalError::EmptyInput("query"));
    }
    if stopwords.is_empty() {
        return Err(RetrievalError::EmptyInput("stopwords"));
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Err(RetrievalError::NoQueryTerms);
    }
    let query_terms = remove_stopwords(&query_tokens, stopwords)?;
    if query_terms.is_empty() {
        return Err(RetrievalError::NoQueryTerms);
    }

    let mut ranking: Ranking = index
        .iter()
        .enumerate()
        .map(|(doc_id, scores)| {
            let total = query_terms
                .iter()
                .fold(0.0, |acc, term| acc + scores.get(term).copied().unwrap_or(0.0));
            (doc_id, total)
        })
        .collect();

    ranking.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    Ok(ranking)
}

/// Document ids of a ranking in ranked order.
pub fn ranking_ids(ranking: &[(usize, f64)]) -> Vec<usize> {
    ranking.iter().map(|(doc_id, _)| *doc_id).collect()
}

/// Keep the best `top_k` entries; `None` keeps everything.
pub fn truncate_ranking(mut ranking: Ranking, top_k: Option<usize>) -> Ranking {
    if let Some(k) = top_k {
        ranking.truncate(k);
    }
    ranking
}
