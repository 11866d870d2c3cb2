//! Query tokenization.
//!
//! A query becomes a list of lowercased, punctuation-stripped words with
//! stop words and single characters removed. Scoring and highlighting both
//! derive their tokens here and nowhere else, so the two can never disagree
//! on what counts as a match.
//!
//! An empty token list is a defined no-op, not an error: callers treat it as
//! "no search performed" and return empty results.

use lazy_static::lazy_static;
use regex::Regex;

/// Words too common to carry any relevance signal: articles, conjunctions,
/// frequent prepositions, and forms of "to be".
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of",
    "with", "by", "from", "as", "is", "was", "are", "were", "be", "been",
    "being",
];

lazy_static! {
    /// Anything that is neither a word character nor whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
}

/// Split a raw query into normalized search tokens.
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. Replace every non-word, non-whitespace character with a space
/// 3. Split on whitespace runs
/// 4. Drop tokens of length ≤ 1 and stop words
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 1 && !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}
