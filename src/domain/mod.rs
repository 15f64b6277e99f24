//! Core domain types and models
//!
//! Defines the score maps, rankings, BM25 parameters and the crate `Config`.

use crate::error::{Result, RetrievalError};
use crate::utils::default_stopwords;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Token sequence of one document, in reading order.
pub type Document = Vec<String>;

/// Term → relevance score (TF, IDF, TF-IDF, BM25 or cutoff BM25).
pub type ScoreMap = BTreeMap<String, f64>;

/// One score map per corpus document; position is the document id.
pub type ScoreIndex = Vec<ScoreMap>;

/// `(document id, score)` pairs, best first.
pub type Ranking = Vec<(usize, f64)>;

pub const DEFAULT_K1: f64 = 1.5;
pub const DEFAULT_B: f64 = 0.75;

/// Accepted `k1` range for cutoff scoring.
pub const CUTOFF_K1_RANGE: (f64, f64) = (1.2, 2.0);

/// Which per-document score map to build for an index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum ScoringMethod {
    TfIdf,
    #[default]
    Bm25,
    /// BM25 over vocabulary terms whose IDF exceeds `alpha`.
    Bm25Cutoff { alpha: f64 },
}

/// BM25 tuning: `k1` controls term-frequency saturation, `b` length normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    #[serde(default = "default_k1")]
    pub k1: f64,
    #[serde(default = "default_b")]
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: DEFAULT_K1, b: DEFAULT_B }
    }
}

impl Bm25Params {
    pub fn new(k1: f64, b: f64) -> Result<Self> {
        let params = Self { k1, b };
        params.validate()?;
        Ok(params)
    }

    /// `k1` must be finite and non-negative, `b` within `[0, 1]`.
    ///
    /// A `b` above 1 can drive the length norm to zero or below for short
    /// documents, which makes the BM25 denominator vanish or flip sign.
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() || self.k1 < 0.0 {
            return Err(RetrievalError::InvalidParameter { name: "k1", value: self.k1 });
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(RetrievalError::InvalidParameter { name: "b", value: self.b });
        }
        Ok(())
    }

    /// Stricter bounds used by cutoff scoring: `1.2 <= k1 <= 2.0`, `0 <= b <= 1`.
    pub fn validate_for_cutoff(&self) -> Result<()> {
        let (lo, hi) = CUTOFF_K1_RANGE;
        if !(lo..=hi).contains(&self.k1) {
            return Err(RetrievalError::InvalidParameter { name: "k1", value: self.k1 });
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(RetrievalError::InvalidParameter { name: "b", value: self.b });
        }
        Ok(())
    }
}

/// Main configuration for building and querying an index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_k1")]
    pub k1: f64,

    #[serde(default = "default_b")]
    pub b: f64,

    /// IDF threshold; when set, `method` is forced to cutoff BM25.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_alpha: Option<f64>,

    #[serde(default)]
    pub method: ScoringMethod,

    #[serde(default = "default_stopwords", alias = "stop_words")]
    pub stopwords: Vec<String>,

    #[serde(default = "default_index_path")]
    pub index_path: PathBuf,

    /// Truncate rankings to this many documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            k1: DEFAULT_K1,
            b: DEFAULT_B,
            cutoff_alpha: None,
            method: ScoringMethod::default(),
            stopwords: default_stopwords(),
            index_path: default_index_path(),
            top_k: None,
        }
    }
}

impl Config {
    pub fn bm25_params(&self) -> Result<Bm25Params> {
        Bm25Params::new(self.k1, self.b)
    }

    /// Scoring method with `cutoff_alpha` taking precedence over `method`.
    pub fn scoring_method(&self) -> ScoringMethod {
        match self.cutoff_alpha {
            Some(alpha) => ScoringMethod::Bm25Cutoff { alpha },
            None => self.method,
        }
    }
}

fn default_k1() -> f64 {
    DEFAULT_K1
}

fn default_b() -> f64 {
    DEFAULT_B
}

fn default_index_path() -> PathBuf {
    PathBuf::from("./out/index.json")
}
