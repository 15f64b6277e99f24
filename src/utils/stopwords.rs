//! Stopword removal.

use crate::error::{Result, RetrievalError};
use std::collections::HashSet;

/// Common English function words, used when no stopword list is configured.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "my", "no", "not",
    "of", "on", "or", "our", "she", "so", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "to", "was", "we", "were", "what", "when",
    "which", "who", "will", "with", "would", "you", "your",
];

/// The default list as owned strings, for config defaults.
pub fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect()
}

/// Remove every token that appears in `stopwords`, keeping order and repeats.
pub fn remove_stopwords<S: AsRef<str>>(tokens: &[String], stopwords: &[S]) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(RetrievalError::EmptyInput("tokens"));
    }
    if stopwords.is_empty() {
        return Err(RetrievalError::EmptyInput("stopwords"));
    }

    let stop: HashSet<&str> = stopwords.iter().map(|s| s.as_ref()).collect();
    Ok(tokens.iter().filter(|t| !stop.contains(t.as_str())).cloned().collect())
}
