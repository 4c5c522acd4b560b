//! Context window resolution
//!
//! Given a message id previously returned by a search, resolve the
//! ordered run of messages surrounding it in the log. Resolution goes
//! straight to the message log; the index is not involved.

use crate::log::MessageLog;
use msgsearch_core::{Message, MessageId};
use serde::{Deserialize, Serialize};

/// An ordered run of messages surrounding one focus message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextWindow {
    /// The window's messages in original append order
    pub messages: Vec<Message>,
    /// Offset of the requested message within `messages`
    pub focus: usize,
}

/// Resolve the context window around `id`
///
/// Returns the contiguous slice `[max(0, id-before), min(len,
/// id+after+1))` of the log, clamped at both ends, together with the
/// focus offset of `id` within the slice. Near the log's edges the
/// window is shorter than `before + after + 1`; that is expected, not
/// an error.
///
/// Returns `None` when `id` is not currently in the log. Callers are
/// expected to only pass ids they received from a search result, so a
/// miss is caller misuse and stays silent rather than escalating.
pub fn context_window(
    log: &MessageLog,
    id: MessageId,
    before: usize,
    after: usize,
) -> Option<ContextWindow> {
    if log.get(id).is_err() {
        return None;
    }

    let pos = id.index();
    let start = pos.saturating_sub(before);
    // Saturating: `after` comes straight off the wire and may be huge.
    let end = log.len().min(pos.saturating_add(after).saturating_add(1));

    Some(ContextWindow {
        messages: log.slice(start..end).to_vec(),
        focus: pos - start,
    })
}
