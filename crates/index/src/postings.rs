//! Inverted index mapping tokens to posting sets
//!
//! The posting store owns the token → {message id} mapping. It is
//! monotonically growing for the lifetime of a session: tokens and ids
//! are only ever added, never removed (message deletion is not
//! supported). The store is exclusively owned by the boundary worker,
//! so no interior synchronization is needed.

use msgsearch_core::MessageId;
use rustc_hash::{FxHashMap, FxHashSet};

/// Set of message ids containing a given token
pub type PostingSet = FxHashSet<MessageId>;

/// Token → posting-set mapping
#[derive(Debug, Default)]
pub struct PostingStore {
    postings: FxHashMap<String, PostingSet>,
}

impl PostingStore {
    /// Create a new empty posting store
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a message: insert `id` into each token's posting set
    ///
    /// Posting sets are created on first use. Idempotent per
    /// (token, id) pair, so duplicate tokens within one message are
    /// harmless.
    pub fn index_message<I, S>(&mut self, id: MessageId, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            self.postings.entry(token.into()).or_default().insert(id);
        }
    }

    /// Borrowed view of a token's posting set
    ///
    /// Returns `None` when the token has never been indexed. The
    /// distinction between "absent" and "empty" matters: an absent
    /// token makes any conjunctive query unsatisfiable and lets the
    /// query engine short-circuit.
    pub fn postings(&self, token: &str) -> Option<&PostingSet> {
        self.postings.get(token)
    }

    /// Number of distinct tokens ever indexed
    pub fn distinct_tokens(&self) -> usize {
        self.postings.len()
    }

    /// Drop all postings (session reset)
    pub fn clear(&mut self) {
        self.postings.clear();
    }
}
