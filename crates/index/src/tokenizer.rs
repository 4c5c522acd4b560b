//! Tokenizer for message indexing and query processing
//!
//! Messages and queries are normalized identically: lowercase, split on
//! whitespace runs, drop empties. There is deliberately no stemming, no
//! punctuation stripping, and no stop-word removal — tokens are exact
//! whitespace-delimited lower-cased substrings, so punctuation is part
//! of the token. Matching stays predictable and the index stays cheap.

use msgsearch_core::Message;

/// Tokenize a message into its searchable terms
///
/// Sender, content, and date are concatenated with single spaces and
/// tokenized as one blob: all three fields are searchable,
/// symmetrically.
///
/// Deterministic and side-effect-free; callable from any thread.
///
/// # Example
///
/// ```
/// use msgsearch_core::{Message, MessageId, RawMessage};
/// use msgsearch_index::tokenizer::tokenize;
///
/// let msg = Message::from_raw(
///     MessageId::new(0),
///     RawMessage::new("Ann", "See you Tomorrow!", "Jan 1"),
/// );
/// let tokens = tokenize(&msg);
/// assert_eq!(tokens, vec!["ann", "see", "you", "tomorrow!", "jan", "1"]);
/// ```
pub fn tokenize(message: &Message) -> Vec<String> {
    let blob = format!("{} {} {}", message.sender, message.content, message.date);
    normalize(&blob)
}

/// Tokenize a query string
///
/// Applies exactly the same normalization as [`tokenize`] so that query
/// terms line up with indexed terms. An empty or all-whitespace query
/// yields no tokens.
///
/// # Example
///
/// ```
/// use msgsearch_index::tokenizer::query_tokens;
///
/// assert_eq!(query_tokens("  See   YOU "), vec!["see", "you"]);
/// assert!(query_tokens("   ").is_empty());
/// ```
pub fn query_tokens(query: &str) -> Vec<String> {
    normalize(query)
}

fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
