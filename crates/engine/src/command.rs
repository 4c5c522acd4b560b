//! Request enum defining all boundary operations.
//!
//! Requests are the instruction set of the indexing/search boundary.
//! Every operation the caller can ask of the worker is a variant of
//! this enum.
//!
//! Requests are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-context transports
//! - **Exhaustively matched**: The worker matches every variant; an
//!   unrecognized tag is rejected at deserialization time rather than
//!   silently ignored

use msgsearch_core::{MessageId, RawMessage};
use serde::{Deserialize, Serialize};

/// Default context reach on each side of the focus message
pub const DEFAULT_CONTEXT_REACH: usize = 10;

fn default_reach() -> usize {
    DEFAULT_CONTEXT_REACH
}

/// A self-contained, serializable boundary operation
///
/// # Example
///
/// ```
/// use msgsearch_core::RawMessage;
/// use msgsearch_engine::Request;
///
/// let req = Request::AddMessages {
///     messages: vec![RawMessage::new("Ann", "see you tomorrow", "Jan 1")],
/// };
/// let search = Request::Search { query: "tomorrow".into() };
/// # let _ = (req, search);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Request {
    /// Append a batch of records to the log and index each new message.
    /// Malformed records (an empty sender, content, or date) are dropped
    /// before they reach the index.
    /// Returns: `Reply::Processed` with the new total count
    AddMessages {
        /// Pre-parsed records from the extraction collaborator
        messages: Vec<RawMessage>,
    },

    /// Run a conjunctive query against the current index.
    /// Returns: `Reply::SearchResults`, echoing the query so the caller
    /// can discard stale or out-of-order replies
    Search {
        /// Free-text query; tokenized like message text
        query: String,
    },

    /// Resolve the ordered neighborhood around a message.
    /// Returns: `Reply::Context` (`window` is `None` for an unknown id)
    Context {
        /// Focus message, previously returned by a search
        id: MessageId,
        /// Messages to include before the focus
        #[serde(default = "default_reach")]
        before: usize,
        /// Messages to include after the focus
        #[serde(default = "default_reach")]
        after: usize,
    },

    /// Report index statistics.
    /// Returns: `Reply::Stats`
    Stats,

    /// Clear the log and the index; subsequent ids restart at 0.
    /// Returns: `Reply::ResetDone`
    Reset,
}
