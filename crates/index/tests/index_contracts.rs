//! Contract tests for the indexing core
//!
//! Exercises the documented invariants of the message log, posting
//! store, query engine, and context resolver together, the way the
//! boundary worker drives them.

use msgsearch_core::{MessageId, RawMessage};
use msgsearch_index::{context_window, execute, tokenize, MessageLog, PostingStore};

// ============================================================================
// Test Helpers
// ============================================================================

fn index_batch(log: &mut MessageLog, store: &mut PostingStore, batch: Vec<RawMessage>) {
    let range = log.append(batch);
    for id in range {
        let id = MessageId::new(id);
        let tokens = tokenize(log.get(id).unwrap());
        store.index_message(id, tokens);
    }
}

fn result_ids(store: &PostingStore, log: &MessageLog, query: &str) -> Vec<u32> {
    execute(store, log, query)
        .messages
        .iter()
        .map(|m| m.id.0)
        .collect()
}

// ============================================================================
// Append monotonicity
// ============================================================================

/// The k-th message overall gets id k, regardless of batch sizes
#[test]
fn test_append_monotonicity_across_batches() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();

    let mk = |i: u32| RawMessage::new(format!("s{i}"), format!("body {i}"), "Jan 1");

    index_batch(&mut log, &mut store, (0..3).map(mk).collect());
    index_batch(&mut log, &mut store, vec![mk(3)]);
    index_batch(&mut log, &mut store, (4..9).map(mk).collect());

    assert_eq!(log.len(), 9);
    for k in 0..9u32 {
        let msg = log.get(MessageId::new(k)).unwrap();
        assert_eq!(msg.id, MessageId::new(k));
        assert_eq!(msg.content, format!("body {k}"));
    }
}

// ============================================================================
// Index completeness
// ============================================================================

/// Every token of every indexed message appears in that token's posting set
#[test]
fn test_index_completeness() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        vec![
            RawMessage::new("Ann", "See you tomorrow!", "Jan 1"),
            RawMessage::new("Bob", "ok, see you", "Jan 2"),
            RawMessage::new("C\u{00e9}line", "\u{00c0} demain", "Jan 3"),
        ],
    );

    for k in 0..log.len() as u32 {
        let id = MessageId::new(k);
        for token in tokenize(log.get(id).unwrap()) {
            let set = store
                .postings(&token)
                .unwrap_or_else(|| panic!("token {token:?} missing from index"));
            assert!(set.contains(&id), "posting set for {token:?} misses id {k}");
        }
    }
}

// ============================================================================
// AND semantics and the concrete scenario
// ============================================================================

#[test]
fn test_concrete_scenario() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        vec![
            RawMessage::new("Ann", "see you tomorrow", "Jan 1"),
            RawMessage::new("Bob", "ok see you", "Jan 2"),
        ],
    );

    assert_eq!(result_ids(&store, &log, "see you"), vec![0, 1]);
    assert_eq!(result_ids(&store, &log, "tomorrow"), vec![0]);
    assert_eq!(result_ids(&store, &log, "xyz"), Vec::<u32>::new());

    let w = context_window(&log, MessageId::new(1), 1, 1).unwrap();
    assert_eq!(w.messages.len(), 2);
    assert_eq!(w.messages[0].id, MessageId::new(0));
    assert_eq!(w.messages[1].id, MessageId::new(1));
    assert_eq!(w.focus, 1);
}

/// Multi-token results equal the intersection of each token's postings
#[test]
fn test_and_equals_posting_intersection() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        vec![
            RawMessage::new("alice", "hello world", "Jan 1"),
            RawMessage::new("alice", "goodbye world", "Jan 2"),
            RawMessage::new("bob", "hello alice", "Jan 3"),
        ],
    );

    let alice = store.postings("alice").unwrap();
    let hello = store.postings("hello").unwrap();
    let expected: Vec<u32> = {
        let mut v: Vec<u32> = alice.intersection(hello).map(|id| id.0).collect();
        v.sort_unstable();
        v
    };

    assert_eq!(result_ids(&store, &log, "alice hello"), expected);
}

#[test]
fn test_repeated_token_equals_single() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        vec![
            RawMessage::new("Ann", "the quick fox", "Jan 1"),
            RawMessage::new("Bob", "the slow fox", "Jan 2"),
        ],
    );

    assert_eq!(
        result_ids(&store, &log, "the the"),
        result_ids(&store, &log, "the"),
    );
}

// ============================================================================
// Context window clamping
// ============================================================================

#[test]
fn test_context_window_clamping_both_ends() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        (0..40u32)
            .map(|i| RawMessage::new("s", format!("m{i}"), "Jan 1"))
            .collect(),
    );

    let first = context_window(&log, MessageId::new(0), 10, 10).unwrap();
    assert_eq!(first.messages.first().unwrap().id, MessageId::new(0));
    assert_eq!(first.messages.len(), 11);
    assert_eq!(first.focus, 0);

    let last_id = MessageId::new(39);
    let last = context_window(&log, last_id, 10, 10).unwrap();
    assert_eq!(last.messages.last().unwrap().id, last_id);
    assert_eq!(last.messages.len(), 11);
    assert_eq!(last.focus, 10);
}

/// Extreme reach values clamp instead of overflowing
#[test]
fn test_context_window_extreme_reach() {
    let mut log = MessageLog::new();
    let mut store = PostingStore::new();
    index_batch(
        &mut log,
        &mut store,
        (0..3u32)
            .map(|i| RawMessage::new("s", format!("m{i}"), "Jan 1"))
            .collect(),
    );

    let w = context_window(&log, MessageId::new(1), 0, usize::MAX).unwrap();
    assert_eq!(w.messages.first().unwrap().id, MessageId::new(1));
    assert_eq!(w.messages.last().unwrap().id, MessageId::new(2));
    assert_eq!(w.focus, 0);
    assert_eq!(w.messages[w.focus].id, MessageId::new(1));

    let w = context_window(&log, MessageId::new(1), usize::MAX, usize::MAX).unwrap();
    assert_eq!(w.messages.len(), 3);
    assert_eq!(w.focus, 1);
}
