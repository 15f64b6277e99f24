//! bm25-retrieval: lexical document ranking with TF-IDF and BM25
//!
//! This library tokenizes documents, derives corpus statistics (vocabulary,
//! TF, IDF), scores each document into a term → score map, ranks documents
//! against a query, persists score indexes as JSON, and measures ranking
//! quality with Spearman's rank correlation.

pub mod config;
pub mod domain;
pub mod error;
pub mod index;
pub mod rank;
pub mod utils;

pub use domain::{Bm25Params, Config, Document, Ranking, ScoreIndex, ScoreMap, ScoringMethod};
pub use error::{Result, RetrievalError};
pub use index::{load_index, save_index, save_index_with_config};
pub use rank::{
    build_vocabulary, calculate_bm25, calculate_bm25_with_cutoff, calculate_idf,
    calculate_spearman, calculate_tf, calculate_tf_idf, rank_documents, ranking_ids,
    truncate_ranking, Corpus,
};
pub use utils::{remove_stopwords, tokenize, DEFAULT_STOPWORDS};
