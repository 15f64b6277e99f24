//! Word tokenization for documents and queries.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal run of letters (general category L). Whitespace, digits,
/// punctuation, letter numbers and combining marks all end a run.
static ALPHA_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}+").expect("letter run pattern is valid"));

/// Split `text` into lowercase alphabetic tokens.
///
/// `"Hello, World! 123"` yields `["hello", "world"]`; a word such as
/// `"e-mail2you"` yields `["e", "mail", "you"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    ALPHA_RUN.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}
