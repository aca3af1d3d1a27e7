//! Query and document tokenization

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").unwrap());

/// Words too common to carry signal in a task description
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "for", "how", "in", "is", "of", "on", "or", "the", "to",
        "use", "using", "what", "when", "with", "your",
    ]
    .into_iter()
    .collect()
});

/// Split text into lowercase terms
///
/// Splits on non-alphanumeric boundaries and camelCase humps (so
/// "FeatureLayer" yields `featurelayer`, `feature`, `layer`), filters
/// stopwords and single characters, and normalizes trailing-s plurals.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut terms = Vec::new();
    for word in WORD_RE.find_iter(text) {
        let word = word.as_str();
        push_term(&mut terms, word);
        for hump in split_camel(word) {
            if hump.len() < word.len() {
                push_term(&mut terms, &hump);
            }
        }
    }
    terms
}

fn push_term(terms: &mut Vec<String>, word: &str) {
    let term = normalize(word);
    if term.len() > 1 && !STOPWORDS.contains(term.as_str()) && !terms.contains(&term) {
        terms.push(term);
    }
}

fn normalize(word: &str) -> String {
    let lower = word.to_lowercase();
    // Light plural folding: "layers" and "layer" should agree
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        lower[..lower.len() - 1].to_string()
    } else {
        lower
    }
}

/// Split a word at lowercase-to-uppercase boundaries
fn split_camel(word: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in word.chars() {
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            parts.push(current.clone());
            current.clear();
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
