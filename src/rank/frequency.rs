//! Term frequency and inverse document frequency.

use crate::domain::{Document, ScoreMap};
use crate::error::{Result, RetrievalError};
use std::collections::{HashMap, HashSet};

/// Occurrence count of every distinct token in `document`.
pub(crate) fn term_counts(document: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in document {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Relative frequency `count / len` for every term of `vocab` and of `document`.
///
/// Vocabulary terms missing from the document are present with 0.0.
pub fn calculate_tf(vocab: &[String], document: &[String]) -> Result<ScoreMap> {
    if vocab.is_empty() {
        return Err(RetrievalError::EmptyInput("vocab"));
    }
    if document.is_empty() {
        return Err(RetrievalError::EmptyInput("document"));
    }

    let counts = term_counts(document);
    let len = document.len() as f64;

    Ok(vocab
        .iter()
        .chain(document.iter())
        .map(|term| {
            let count = counts.get(term.as_str()).copied().unwrap_or(0);
            (term.clone(), count as f64 / len)
        })
        .collect())
}

/// BM25-style IDF for every vocabulary term: `ln((N - n_t + 0.5) / (n_t + 0.5))`.
///
/// Terms found in more than half of the documents get a negative weight.
pub fn calculate_idf(vocab: &[String], documents: &[Document]) -> Result<ScoreMap> {
    if vocab.is_empty() {
        return Err(RetrievalError::EmptyInput("vocab"));
    }
    if documents.is_empty() {
        return Err(RetrievalError::EmptyInput("documents"));
    }

    let doc_sets: Vec<HashSet<&str>> =
        documents.iter().map(|doc| doc.iter().map(String::as_str).collect()).collect();
    let total_docs = documents.len() as f64;

    Ok(vocab
        .iter()
        .map(|term| {
            let df = doc_sets.iter().filter(|set| set.contains(term.as_str())).count() as f64;
            (term.clone(), ((total_docs - df + 0.5) / (df + 0.5)).ln())
        })
        .collect())
}
