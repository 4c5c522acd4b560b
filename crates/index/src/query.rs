//! Conjunctive query evaluation against the posting store
//!
//! A query is tokenized exactly like a message and evaluated as an AND
//! over the tokens' posting sets. There is no OR, NOT, phrase operator,
//! or relevance scoring: the result is an unordered match set,
//! materialized to full records in ascending id order so replies are
//! deterministic.

use crate::log::MessageLog;
use crate::postings::{PostingSet, PostingStore};
use crate::tokenizer::query_tokens;
use msgsearch_core::{Message, MessageId};
use std::time::{Duration, Instant};

/// Result of one query evaluation
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching messages, materialized from the log in ascending id order
    pub messages: Vec<Message>,
    /// Wall-clock time spent evaluating the query (diagnostic only)
    pub elapsed: Duration,
}

impl SearchOutcome {
    fn empty(started: Instant) -> Self {
        SearchOutcome {
            messages: Vec::new(),
            elapsed: started.elapsed(),
        }
    }
}

/// Evaluate a conjunctive query
///
/// Tokenizes `query`, AND-folds the tokens' posting sets, and
/// materializes the surviving ids to full records. An empty or
/// all-whitespace query matches nothing (not everything). A token that
/// was never indexed makes the whole conjunction unsatisfiable, so
/// evaluation short-circuits to an empty outcome without touching the
/// remaining tokens.
pub fn execute(store: &PostingStore, log: &MessageLog, query: &str) -> SearchOutcome {
    let started = Instant::now();

    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return SearchOutcome::empty(started);
    }

    let mut acc: Option<PostingSet> = None;
    for token in &tokens {
        let Some(set) = store.postings(token) else {
            return SearchOutcome::empty(started);
        };
        acc = Some(match acc {
            // First token seeds a copy: the stored set must stay
            // independently mutable from the result being built.
            None => set.clone(),
            Some(current) => intersect(&current, set),
        });
        if acc.as_ref().is_some_and(PostingSet::is_empty) {
            break;
        }
    }

    let mut ids: Vec<MessageId> = acc.unwrap_or_default().into_iter().collect();
    ids.sort_unstable();

    let messages = ids
        .into_iter()
        .filter_map(|id| log.get(id).ok().cloned())
        .collect();

    SearchOutcome {
        messages,
        elapsed: started.elapsed(),
    }
}

/// Intersect two posting sets by iterating the smaller one
///
/// Bounds the cost at `O(min(|a|, |b|))`, which matters when a common
/// token (a frequent sender name, say) has a posting set in the tens of
/// thousands.
fn intersect(a: &PostingSet, b: &PostingSet) -> PostingSet {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter(|id| large.contains(id))
        .copied()
        .collect()
}
