//! Error types for msgsearch
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::MessageId;
use thiserror::Error;

/// Result type alias for msgsearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the msgsearch engine
///
/// The taxonomy is deliberately small: every core operation is
/// deterministic and in-memory, so there is nothing to retry. Malformed
/// input records are filtered before indexing and are never an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Message log or context access with an id outside `[0, len)`
    #[error("message id {id} out of range (log holds {len} messages)")]
    OutOfRange {
        /// The offending id
        id: MessageId,
        /// Log length at the time of the access
        len: usize,
    },

    /// The boundary worker is gone (failed to start, crashed, or shut down)
    ///
    /// Terminal for the session: the index is not restarted automatically
    /// because a partial re-index would risk silent incompleteness. The
    /// caller must spawn a fresh engine and re-submit all data.
    #[error("search engine unavailable")]
    EngineUnavailable,

    /// A reply variant did not match the request kind
    ///
    /// Indicates a bug in the boundary protocol, not caller misuse.
    #[error("unexpected reply from engine (expected {expected})")]
    UnexpectedReply {
        /// The reply variant the request called for
        expected: &'static str,
    },
}
