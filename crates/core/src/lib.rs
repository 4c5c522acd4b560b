//! Core types for msgsearch
//!
//! This crate defines the foundational types used throughout the system:
//! - MessageId: Dense, zero-based handle into the message log
//! - RawMessage: Pre-parsed record from the extraction collaborator
//! - Message: Immutable record owned by the message log
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Message, MessageId, RawMessage};
