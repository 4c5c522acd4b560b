//! Indexing and query core for msgsearch
//!
//! This crate provides:
//! - Tokenizer shared by indexing and query processing
//! - PostingStore: the incremental inverted index
//! - MessageLog: append-only, ordered source of truth for messages
//! - Conjunctive query evaluation with smaller-set intersection
//! - Context window resolution around a given message
//! - Highlight spans for result rendering
//!
//! Everything here is synchronous and single-owner: the engine crate
//! wraps this state in an isolated worker task and is the only mutator.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod highlight;
pub mod log;
pub mod postings;
pub mod query;
pub mod tokenizer;

// Re-export commonly used types
pub use context::{context_window, ContextWindow};
pub use highlight::highlight_spans;
pub use log::MessageLog;
pub use postings::{PostingSet, PostingStore};
pub use query::{execute, SearchOutcome};
pub use tokenizer::{query_tokens, tokenize};
