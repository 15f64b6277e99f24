//! Configuration loading
//!
//! Layers, lowest to highest precedence: built-in defaults, a TOML or YAML
//! config file, then `BM25_*` environment variables (e.g. `BM25_K1=1.2`).

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::Config;

mod merge;

pub use merge::{merge_overrides, ConfigOverrides};

/// File names looked up under the root directory, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["bm25-retrieval.toml", ".bm25.yml", ".bm25.yaml"];

pub const ENV_PREFIX: &str = "BM25_";

/// Load config from `explicit` if given, otherwise from the first known file under `root`.
///
/// A missing discovered file is not an error; a missing explicit file is.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let file = match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_config(root),
    };

    let mut figment = Figment::from(Serialized::defaults(Config::default()));
    if let Some(path) = &file {
        debug!(path = %path.display(), "loading config file");
        figment = if is_yaml(path) {
            figment.merge(Yaml::file(path))
        } else {
            figment.merge(Toml::file(path))
        };
    }
    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    let config: Config = figment.extract().with_context(|| match &file {
        Some(path) => format!("Failed to parse config from {}", path.display()),
        None => "Failed to parse config from environment".to_string(),
    })?;

    config.bm25_params().context("Invalid BM25 parameters in config")?;
    Ok(config)
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).find(|path| path.is_file())
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yml") | Some("yaml"))
}
