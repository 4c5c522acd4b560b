//! Core types for msgsearch
//!
//! This module defines the foundational record types:
//! - MessageId: Dense, zero-based handle into the message log
//! - RawMessage: Pre-parsed record from the extraction collaborator
//! - Message: Immutable record owned by the message log

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle for a message in the log
///
/// A MessageId equals the message's append-order position: ids are
/// dense, zero-based, and strictly increasing. An id is never reused
/// or reassigned for the lifetime of the session, so it is the only
/// handle needed to re-locate a message (context lookups, click-through
/// from search results).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u32);

impl MessageId {
    /// Create a MessageId from a raw position
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of this id in the message log
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for MessageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A message record as produced by the extraction collaborator
///
/// Carries no id: ids are assigned by the message log at append time.
/// A record with an empty (after trimming) sender, content, or date is
/// malformed and is dropped at the boundary before it reaches the
/// index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Display name of the sender
    pub sender: String,
    /// Message body
    pub content: String,
    /// Date as opaque display text (not parsed)
    pub date: String,
}

impl RawMessage {
    /// Create a new raw message record
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    /// Whether all three fields are non-empty after trimming
    pub fn is_complete(&self) -> bool {
        !self.sender.trim().is_empty()
            && !self.content.trim().is_empty()
            && !self.date.trim().is_empty()
    }
}

/// An immutable message owned by the message log
///
/// All three text fields are searchable, symmetrically. Other
/// components hold only the id or cloned copies returned across the
/// boundary, never references that could outlive or diverge from the
/// log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Append-order position in the message log
    pub id: MessageId,
    /// Display name of the sender
    pub sender: String,
    /// Message body
    pub content: String,
    /// Date as opaque display text
    pub date: String,
}

impl Message {
    /// Assemble a log-owned message from a raw record and its assigned id
    pub fn from_raw(id: MessageId, raw: RawMessage) -> Self {
        Self {
            id,
            sender: raw.sender,
            content: raw.content,
            date: raw.date,
        }
    }
}
