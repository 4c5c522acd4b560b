//! Append-only message log
//!
//! The log is the source of truth for message content and for context
//! window lookups. Ids are assigned at append time as the record's
//! position, so the log doubles as the id → message mapping: dense,
//! zero-based, strictly increasing, never reused.

use msgsearch_core::{Error, Message, MessageId, RawMessage, Result};
use std::ops::Range;

/// Ordered, append-only store of message records
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of raw records, assigning dense ids in input order
    ///
    /// Returns the half-open range of ids assigned to the batch. The
    /// batch is atomic with respect to readers: the log is only ever
    /// read and written by its single owner, so no reader can observe
    /// a partially-appended batch.
    pub fn append<I>(&mut self, batch: I) -> Range<u32>
    where
        I: IntoIterator<Item = RawMessage>,
    {
        let start = self.messages.len() as u32;
        self.messages.extend(
            batch
                .into_iter()
                .enumerate()
                .map(|(i, raw)| Message::from_raw(MessageId::new(start + i as u32), raw)),
        );
        start..self.messages.len() as u32
    }

    /// Look up a message by id
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] when `id` is not in `[0, len)`.
    pub fn get(&self, id: MessageId) -> Result<&Message> {
        self.messages.get(id.index()).ok_or(Error::OutOfRange {
            id,
            len: self.messages.len(),
        })
    }

    /// Borrowed view of a contiguous run of the log
    ///
    /// `range` is clamped to the log's bounds by the caller; this is a
    /// plain slice into the owned storage.
    pub fn slice(&self, range: Range<usize>) -> &[Message] {
        &self.messages[range]
    }

    /// Current number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop all messages (session reset); subsequent ids restart at 0
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(n: u32) -> RawMessage {
        RawMessage::new(format!("sender{n}"), format!("content {n}"), "Jan 1")
    }

    #[test]
    fn test_append_assigns_dense_ids() {
        let mut log = MessageLog::new();
        let first = log.append(vec![raw(0), raw(1), raw(2)]);
        assert_eq!(first, 0..3);

        let second = log.append(vec![raw(3)]);
        assert_eq!(second, 3..4);

        for i in 0..4u32 {
            assert_eq!(log.get(MessageId::new(i)).unwrap().id, MessageId::new(i));
        }
    }

    #[test]
    fn test_ids_dense_across_batch_splits() {
        // The k-th message overall gets id k regardless of batch sizes.
        let mut a = MessageLog::new();
        a.append((0..5).map(raw));

        let mut b = MessageLog::new();
        b.append((0..2).map(raw));
        b.append((2..3).map(raw));
        b.append((3..5).map(raw));

        assert_eq!(a.len(), b.len());
        for i in 0..5u32 {
            let id = MessageId::new(i);
            assert_eq!(a.get(id).unwrap(), b.get(id).unwrap());
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let mut log = MessageLog::new();
        log.append(vec![raw(0)]);

        let err = log.get(MessageId::new(5)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { len: 1, .. }));
    }

    #[test]
    fn test_empty_log() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.get(MessageId::new(0)).is_err());
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut log = MessageLog::new();
        log.append(vec![raw(0), raw(1)]);
        log.clear();
        assert!(log.is_empty());

        let range = log.append(vec![raw(9)]);
        assert_eq!(range, 0..1);
    }
}
