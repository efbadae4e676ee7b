use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w{4,}\b").unwrap());

/// At most this many keywords are retained per content.
pub const MAX_KEYWORDS: usize = 3;

/// Derive the salient tokens of a content string: lowercase words of length
/// >= 4, deduplicated in first-seen order, capped at [`MAX_KEYWORDS`].
pub fn extract(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);
    for found in WORD.find_iter(&lower) {
        let token = found.as_str();
        if !keywords.iter().any(|k| k == token) {
            keywords.push(token.to_string());
            if keywords.len() == MAX_KEYWORDS {
                break;
            }
        }
    }
    keywords
}
