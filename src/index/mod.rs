//! Score index persistence as indented JSON.
//!
//! The file holds an array of objects, one per document, mapping terms to
//! scores. Loading trusts the file: anything that decodes is returned as is.

use crate::domain::{Config, ScoreIndex, ScoreMap};
use crate::error::{Result, RetrievalError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const INDENT: &[u8] = b"    ";

/// Write `index` to `path`, creating parent directories as needed.
///
/// Returns `Ok(false)` without touching the filesystem when the path or index
/// is empty, or when a score is NaN or infinite (JSON cannot carry it).
pub fn save_index(index: &[ScoreMap], path: &Path) -> Result<bool> {
    if path.as_os_str().is_empty() {
        warn!("refusing to save index: empty path");
        return Ok(false);
    }
    if index.is_empty() {
        warn!(path = %path.display(), "refusing to save index: no documents");
        return Ok(false);
    }
    if let Some((doc_id, term)) = first_non_finite(index) {
        warn!(path = %path.display(), doc_id, term, "refusing to save index: non-finite score");
        return Ok(false);
    }

    let contents = to_json(index)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| RetrievalError::Io { path: parent.to_path_buf(), source })?;
    }
    fs::write(path, contents)
        .map_err(|source| RetrievalError::Io { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), documents = index.len(), "saved score index");
    Ok(true)
}

/// [`save_index`] to `config.index_path`.
pub fn save_index_with_config(index: &[ScoreMap], config: &Config) -> Result<bool> {
    save_index(index, &config.index_path)
}

/// Read a score index written by [`save_index`].
pub fn load_index(path: &Path) -> Result<ScoreIndex> {
    if path.as_os_str().is_empty() {
        return Err(RetrievalError::EmptyInput("path"));
    }

    let raw = fs::read_to_string(path)
        .map_err(|source| RetrievalError::Io { path: path.to_path_buf(), source })?;
    let index: ScoreIndex = serde_json::from_str(&raw)?;

    info!(path = %path.display(), documents = index.len(), "loaded score index");
    Ok(index)
}

fn to_json(index: &[ScoreMap]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    index.serialize(&mut serializer)?;
    Ok(buf)
}

fn first_non_finite(index: &[ScoreMap]) -> Option<(usize, &str)> {
    index.iter().enumerate().find_map(|(doc_id, scores)| {
        scores.iter().find(|(_, v)| !v.is_finite()).map(|(term, _)| (doc_id, term.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::{load_index, save_index, save_index_with_config};
    use crate::domain::{Config, ScoreIndex, ScoreMap};
    use crate::error::RetrievalError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn map(entries: &[(&str, f64)]) -> ScoreMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn writes_four_space_indented_json() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("index.json");
        let index = vec![map(&[("dog", 0.5), ("cat", 1.0)]), map(&[("cat", 0.2)])];

        assert!(save_index(&index, &path).unwrap());
        let saved = fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!(saved, @r###"
        [
            {
                "cat": 1.0,
                "dog": 0.5
            },
            {
                "cat": 0.2
            }
        ]
        "###);
    }

    #[test]
    fn round_trips_scores() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("index.json");
        let index =
            vec![map(&[("cat", 1.25), ("dog", -0.75)]), ScoreMap::new(), map(&[("owl", 0.0)])];

        assert!(save_index(&index, &path).unwrap());
        let loaded = load_index(&path).unwrap();
        similar_asserts::assert_eq!(loaded, index);
    }

    #[test]
    fn writes_to_configured_index_path() {
        let dir = TempDir::new().expect("temp dir");
        let config =
            Config { index_path: dir.path().join("out").join("bm25.json"), ..Config::default() };
        let index = vec![map(&[("cat", 0.5)])];

        assert!(save_index_with_config(&index, &config).unwrap());
        assert_eq!(load_index(&config.index_path).unwrap(), index);
    }

    #[test]
    fn refuses_bad_input_without_writing() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("index.json");

        let empty: ScoreIndex = Vec::new();
        assert!(!save_index(&empty, &path).unwrap());
        assert!(!save_index(&[map(&[("cat", f64::NAN)])], &path).unwrap());
        assert!(!save_index(&[map(&[("cat", f64::INFINITY)])], &path).unwrap());
        assert!(!save_index(&[map(&[("cat", 1.0)])], Path::new("")).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn load_surfaces_format_errors() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"cat\": \"not a number\"}]").unwrap();
        assert!(matches!(load_index(&path), Err(RetrievalError::Json(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_index(&missing), Err(RetrievalError::Io { .. })));
        assert!(matches!(load_index(Path::new("")), Err(RetrievalError::EmptyInput("path"))));
    }
}
