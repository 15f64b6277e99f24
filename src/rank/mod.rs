//! Corpus statistics, document scoring and query ranking

use crate::domain::{Bm25Params, Config, Document, Ranking, ScoreIndex, ScoreMap, ScoringMethod};
use crate::error::{Result, RetrievalError};
use crate::utils::{remove_stopwords, tokenize};
use std::collections::HashSet;
use tracing::debug;

pub mod bm25;
pub mod eval;
pub mod frequency;
pub mod ranker;

pub use bm25::{calculate_bm25, calculate_bm25_with_cutoff, calculate_tf_idf};
pub use eval::calculate_spearman;
pub use frequency::{calculate_idf, calculate_tf};
pub use ranker::{rank_documents, ranking_ids, truncate_ranking};

/// Distinct tokens across `documents`, in order of first appearance.
pub fn build_vocabulary(documents: &[Document]) -> Result<Vec<String>> {
    if documents.is_empty() {
        return Err(RetrievalError::EmptyInput("documents"));
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut vocab = Vec::new();
    for token in documents.iter().flatten() {
        if seen.insert(token.as_str()) {
            vocab.push(token.clone());
        }
    }
    Ok(vocab)
}

/// Tokenized documents plus the statistics derived from them once.
///
/// Scoring reads vocabulary, IDF and average length from here instead of
/// recomputing them per document.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    vocabulary: Vec<String>,
    idf: ScoreMap,
    avg_doc_len: f64,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Result<Self> {
        let vocabulary = build_vocabulary(&documents)?;
        if vocabulary.is_empty() {
            return Err(RetrievalError::EmptyInput("vocabulary"));
        }
        let idf = calculate_idf(&vocabulary, &documents)?;

        let total_len: usize = documents.iter().map(Vec::len).sum();
        let avg_doc_len = total_len as f64 / documents.len() as f64;

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            avg_doc_len,
            "built corpus statistics"
        );

        Ok(Self { documents, vocabulary, idf, avg_doc_len })
    }

    /// Tokenize raw texts and drop stopwords before building statistics.
    pub fn from_texts<T: AsRef<str>, S: AsRef<str>>(texts: &[T], stopwords: &[S]) -> Result<Self> {
        let documents = texts
            .iter()
            .map(|text| {
                let tokens = tokenize(text.as_ref());
                if tokens.is_empty() {
                    Ok(tokens)
                } else {
                    remove_stopwords(&tokens, stopwords)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(documents)
    }

    /// [`Corpus::from_texts`] with the stopword list from `config`.
    pub fn from_texts_with_config<T: AsRef<str>>(texts: &[T], config: &Config) -> Result<Self> {
        Self::from_texts(texts, &config.stopwords)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &ScoreMap {
        &self.idf
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Term frequencies of one document, or `None` if `doc_id` is out of range.
    pub fn tf(&self, doc_id: usize) -> Option<Result<ScoreMap>> {
        self.documents.get(doc_id).map(|doc| calculate_tf(&self.vocabulary, doc))
    }

    /// Score map of one document under `method`.
    ///
    /// An empty document (e.g. only stopwords) gets an empty map.
    pub fn score_document(
        &self,
        document: &[String],
        method: ScoringMethod,
        params: Bm25Params,
    ) -> Result<ScoreMap> {
        if document.is_empty() {
            return Ok(ScoreMap::new());
        }

        match method {
            ScoringMethod::TfIdf => {
                let tf = calculate_tf(&self.vocabulary, document)?;
                calculate_tf_idf(&tf, &self.idf)
            }
            ScoringMethod::Bm25 => calculate_bm25(
                &self.vocabulary,
                document,
                &self.idf,
                params,
                self.avg_doc_len,
                document.len(),
            ),
            ScoringMethod::Bm25Cutoff { alpha } => calculate_bm25_with_cutoff(
                &self.vocabulary,
                document,
                &self.idf,
                alpha,
                params,
                self.avg_doc_len,
                document.len(),
            ),
        }
    }

    /// One score map per corpus document, in corpus order.
    pub fn build_index(&self, method: ScoringMethod, params: Bm25Params) -> Result<ScoreIndex> {
        let index = self
            .documents
            .iter()
            .map(|doc| self.score_document(doc, method, params))
            .collect::<Result<ScoreIndex>>()?;

        debug!(documents = index.len(), ?method, "built score index");
        Ok(index)
    }

    /// Build an index under `method` and rank it against `query`.
    pub fn search<S: AsRef<str>>(
        &self,
        query: &str,
        method: ScoringMethod,
        params: Bm25Params,
        stopwords: &[S],
    ) -> Result<Ranking> {
        let index = self.build_index(method, params)?;
        rank_documents(&index, query, stopwords)
    }

    /// Index built with the method and BM25 parameters from `config`.
    pub fn build_index_with_config(&self, config: &Config) -> Result<ScoreIndex> {
        self.build_index(config.scoring_method(), config.bm25_params()?)
    }

    /// Rank against `query` using `config` for scoring and stopwords,
    /// keeping at most `config.top_k` results.
    pub fn search_with_config(&self, query: &str, config: &Config) -> Result<Ranking> {
        let index = self.build_index_with_config(config)?;
        let ranking = rank_documents(&index, query, &config.stopwords)?;
        Ok(truncate_ranking(ranking, config.top_k))
    }
}
