//! TF-IDF, BM25 and cutoff BM25 scoring of a single document.

use super::frequency::term_counts;
use crate::domain::{Bm25Params, ScoreMap};
use crate::error::{Result, RetrievalError};

/// Multiply each TF entry by the IDF of the same term.
///
/// Every TF key must have an IDF entry; a missing one is `TermNotFound`.
pub fn calculate_tf_idf(tf: &ScoreMap, idf: &ScoreMap) -> Result<ScoreMap> {
    if tf.is_empty() {
        return Err(RetrievalError::EmptyInput("tf"));
    }
    if idf.is_empty() {
        return Err(RetrievalError::EmptyInput("idf"));
    }

    tf.iter()
        .map(|(term, freq)| match idf.get(term) {
            Some(weight) => Ok((term.clone(), freq * weight)),
            None => Err(RetrievalError::TermNotFound(term.clone())),
        })
        .collect()
}

/// BM25 score of every term in `vocab` and in `document`.
///
/// Terms without a nonzero IDF, and vocabulary terms absent from the
/// document, score 0.0 but stay in the map.
pub fn calculate_bm25(
    vocab: &[String],
    document: &[String],
    idf: &ScoreMap,
    params: Bm25Params,
    avg_doc_len: f64,
    doc_len: usize,
) -> Result<ScoreMap> {
    check_inputs(vocab, document, idf, avg_doc_len, doc_len)?;
    params.validate()?;

    let counts = term_counts(document);
    let norm = length_norm(params, avg_doc_len, doc_len);

    Ok(vocab
        .iter()
        .chain(document.iter())
        .map(|term| {
            let n = counts.get(term.as_str()).copied().unwrap_or(0);
            let score = match idf.get(term) {
                Some(&weight) if weight != 0.0 => term_score(weight, n, params.k1, norm),
                _ => 0.0,
            };
            (term.clone(), score)
        })
        .collect())
}

/// BM25 over vocabulary terms only, keeping a term only when its IDF exceeds `alpha`.
///
/// Terms at or below the cutoff are left out of the map rather than zeroed.
/// `alpha = f64::NEG_INFINITY` keeps the whole vocabulary.
pub fn calculate_bm25_with_cutoff(
    vocab: &[String],
    document: &[String],
    idf: &ScoreMap,
    alpha: f64,
    params: Bm25Params,
    avg_doc_len: f64,
    doc_len: usize,
) -> Result<ScoreMap> {
    check_inputs(vocab, document, idf, avg_doc_len, doc_len)?;
    params.validate_for_cutoff()?;
    if alpha.is_nan() {
        return Err(RetrievalError::InvalidParameter { name: "alpha", value: alpha });
    }

    let counts = term_counts(document);
    let norm = length_norm(params, avg_doc_len, doc_len);

    let mut scores = ScoreMap::new();
    for term in vocab {
        let weight = *idf.get(term).ok_or_else(|| RetrievalError::TermNotFound(term.clone()))?;
        if weight > alpha {
            let n = counts.get(term.as_str()).copied().unwrap_or(0);
            scores.insert(term.clone(), term_score(weight, n, params.k1, norm));
        }
    }
    Ok(scores)
}

fn check_inputs(
    vocab: &[String],
    document: &[String],
    idf: &ScoreMap,
    avg_doc_len: f64,
    doc_len: usize,
) -> Result<()> {
    if vocab.is_empty() {
        return Err(RetrievalError::EmptyInput("vocab"));
    }
    if document.is_empty() {
        return Err(RetrievalError::EmptyInput("document"));
    }
    if idf.is_empty() {
        return Err(RetrievalError::EmptyInput("idf"));
    }
    if !avg_doc_len.is_finite() || avg_doc_len <= 0.0 {
        return Err(RetrievalError::InvalidParameter { name: "avg_doc_len", value: avg_doc_len });
    }
    if doc_len == 0 {
        return Err(RetrievalError::InvalidParameter { name: "doc_len", value: 0.0 });
    }
    Ok(())
}

/// `1 - b + b * doc_len / avg_doc_len`
fn length_norm(params: Bm25Params, avg_doc_len: f64, doc_len: usize) -> f64 {
    1.0 - params.b + params.b * (doc_len as f64 / avg_doc_len)
}

fn term_score(idf: f64, n: usize, k1: f64, length_norm: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let tf = n as f64;
    idf * (tf * (k1 + 1.0)) / (tf + k1 * length_norm)
}
