//! msgsearch - incremental inverted-index search over conversation exports
//!
//! msgsearch lets a caller locate messages inside a large, locally-held
//! conversation export by free-text query, with sub-second response at
//! tens of thousands of messages, and inspect the surrounding
//! conversation for any hit.
//!
//! # Quick Start
//!
//! ```ignore
//! use msgsearch::{RawMessage, SearchEngine};
//!
//! // Spawn the isolated worker that owns the log and the index
//! let engine = SearchEngine::spawn();
//!
//! // Feed it pre-parsed records (from an export extraction step)
//! engine.add_messages(vec![
//!     RawMessage::new("Ann", "see you tomorrow", "Jan 1"),
//! ]).await?;
//!
//! // Conjunctive free-text search
//! let results = engine.search("see you").await?;
//!
//! // Surrounding conversation for any hit
//! let window = engine.context(results.results[0].id, 10, 10).await?;
//! ```
//!
//! # Architecture
//!
//! All index state lives inside a single worker task reachable only
//! through the [`SearchEngine`] handle's request/reply protocol. The
//! caller holds opaque ids and copies of returned records, never
//! references into the index.

// Re-export the public API from msgsearch-engine
pub use msgsearch_engine::*;
