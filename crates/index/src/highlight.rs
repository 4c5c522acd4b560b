//! Highlight spans for rendering search results
//!
//! Callers that display results want to emphasize where the query
//! matched. This module finds the byte ranges in the *original* text
//! where any query token occurs as a case-insensitive literal
//! substring. Lowercasing can change a char's byte length (ß → ss and
//! friends), so matching runs over a lowercased copy with a byte-offset
//! map back into the original.

use crate::tokenizer::query_tokens;
use std::ops::Range;

/// Byte ranges of `text` matching any token of `query`, left to right
///
/// Spans are non-overlapping: when matches collide, the earlier
/// (and on ties, the first-found) span wins. Tokens come from the same
/// normalization the index uses, so highlighting agrees with matching.
///
/// # Example
///
/// ```
/// use msgsearch_index::highlight::highlight_spans;
///
/// let spans = highlight_spans("See you, see YOU", "see");
/// assert_eq!(spans, vec![0..3, 9..12]);
/// ```
pub fn highlight_spans(text: &str, query: &str) -> Vec<Range<usize>> {
    let needles = query_tokens(query);
    if needles.is_empty() || text.is_empty() {
        return Vec::new();
    }

    // Lowercased with the same `str::to_lowercase` the tokenizer uses,
    // plus, per byte of the copy, the byte offset of the originating
    // char in `text`. The contextual form only diverges from per-char
    // lowering on final sigma, which keeps its byte length, so the
    // per-char lengths still line up with the copy.
    let lower = text.to_lowercase();
    let mut origin = Vec::with_capacity(lower.len());
    for (off, ch) in text.char_indices() {
        let lowered_len: usize = ch.to_lowercase().map(char::len_utf8).sum();
        origin.resize(origin.len() + lowered_len, off);
    }
    debug_assert_eq!(origin.len(), lower.len());

    let mut candidates: Vec<Range<usize>> = Vec::new();
    for needle in &needles {
        for (pos, found) in lower.match_indices(needle.as_str()) {
            let start = origin[pos];
            let last = origin[pos + found.len() - 1];
            candidates.push(start..last + char_len_at(text, last));
        }
    }
    candidates.sort_by_key(|r| (r.start, r.end));

    let mut spans: Vec<Range<usize>> = Vec::new();
    for r in candidates {
        match spans.last() {
            Some(prev) if r.start < prev.end => {} // overlaps, earlier span wins
            _ => spans.push(r),
        }
    }
    spans
}

fn char_len_at(text: &str, offset: usize) -> usize {
    text[offset..].chars().next().map_or(0, char::len_utf8)
}
