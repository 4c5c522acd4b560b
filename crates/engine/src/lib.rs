//! Indexing/search boundary for msgsearch
//!
//! This crate hosts the isolated execution context that owns the
//! message log, the inverted index, and query evaluation. Callers
//! never touch that state directly; they hold a [`SearchEngine`] handle
//! and exchange tagged request/reply messages with the worker task:
//!
//! ```ignore
//! use msgsearch_engine::{RawMessage, SearchEngine};
//!
//! let engine = SearchEngine::spawn();
//! engine.add_messages(batch).await?;
//! let results = engine.search("see you").await?;
//! let window = engine.context(results.results[0].id, 10, 10).await?;
//! ```
//!
//! The worker processes one request at a time in FIFO order, so the
//! index needs no locks and a search always reflects every append the
//! caller awaited before issuing it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod engine;
pub mod output;
mod worker;

// Re-export commonly used types
pub use command::{Request, DEFAULT_CONTEXT_REACH};
pub use engine::SearchEngine;
pub use output::{IndexStats, Reply, SearchResults};

// Re-export the foundational types so callers need only this crate
pub use msgsearch_core::{Error, Message, MessageId, RawMessage, Result};
pub use msgsearch_index::{highlight_spans, ContextWindow};
