//! Programmatic overrides layered over a loaded config

use crate::domain::{Config, ScoringMethod};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub k1: Option<f64>,
    pub b: Option<f64>,
    pub cutoff_alpha: Option<f64>,
    pub method: Option<ScoringMethod>,
    pub stopwords: Option<Vec<String>>,
    pub index_path: Option<PathBuf>,
    pub top_k: Option<usize>,
}

pub fn merge_overrides(mut base_config: Config, overrides: ConfigOverrides) -> Config {
    if let Some(k1) = overrides.k1 {
        base_config.k1 = k1;
    }
    if let Some(b) = overrides.b {
        base_config.b = b;
    }

    // An explicit method replaces any cutoff from the file unless a new cutoff comes with it.
    if let Some(method) = overrides.method {
        base_config.method = method;
        base_config.cutoff_alpha = None;
    }
    if let Some(alpha) = overrides.cutoff_alpha {
        base_config.cutoff_alpha = Some(alpha);
    }

    if let Some(stopwords) = overrides.stopwords {
        base_config.stopwords = stopwords;
    }
    if let Some(index_path) = overrides.index_path {
        base_config.index_path = index_path;
    }
    if let Some(top_k) = overrides.top_k {
        base_config.top_k = Some(top_k);
    }

    base_config
}
