//! Query highlighting for display strings.
//!
//! Splits a display string into spans so a rendering surface can mark the
//! parts that matched the query. Tokens come from the same tokenizer the
//! scorer uses - highlighting and scoring must never disagree on what
//! counts as a token.

use regex::Regex;
use serde::Serialize;

use crate::query::tokenize;

/// One run of a display string, marked when it equals a query token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub text: String,
    pub matched: bool,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        HighlightSpan {
            text: text.to_string(),
            matched: false,
        }
    }
}

/// Split `text` into marked and unmarked spans for `query`.
///
/// Builds a single case-insensitive alternation over all query tokens and
/// marks every occurrence that case-insensitively equals one of them.
/// Queries that yield no tokens return the whole text as one unmarked span.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSpan> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return vec![HighlightSpan::plain(text)];
    }

    let alternation = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = match Regex::new(&format!("(?i)({alternation})")) {
        Ok(pattern) => pattern,
        // Escaped tokens always compile; fall through to unmarked text.
        Err(_) => return vec![HighlightSpan::plain(text)],
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for hit in pattern.find_iter(text) {
        if hit.start() > last {
            spans.push(HighlightSpan::plain(&text[last..hit.start()]));
        }
        let matched = tokens
            .iter()
            .any(|token| hit.as_str().to_lowercase() == *token);
        spans.push(HighlightSpan {
            text: hit.as_str().to_string(),
            matched,
        });
        last = hit.end();
    }
    if last < text.len() {
        spans.push(HighlightSpan::plain(&text[last..]));
    }
    spans
}
