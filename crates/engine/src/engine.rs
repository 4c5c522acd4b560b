//! Async handle to the indexing/search boundary.
//!
//! [`SearchEngine::spawn`] starts the worker task and returns a cheap,
//! cloneable handle. All interaction crosses an asynchronous message
//! channel: the handle sends a [`Request`] with a oneshot reply channel
//! and awaits the correlated [`Reply`]. Requests from a single caller
//! are processed in the order sent; a search awaited after an
//! acknowledged append is guaranteed to observe it.

use crate::command::Request;
use crate::output::{IndexStats, Reply, SearchResults};
use crate::worker::{self, Envelope};
use msgsearch_core::{Error, MessageId, RawMessage, Result};
use msgsearch_index::ContextWindow;
use tokio::sync::{mpsc, oneshot};

/// Inbox depth before senders are backpressured
const INBOX_CAPACITY: usize = 64;

/// Handle to a running search worker
///
/// Cloning the handle shares the same worker. The worker exits when
/// every handle is dropped; once it is gone, every operation returns
/// [`Error::EngineUnavailable`] — terminal for the session, the caller
/// must spawn a fresh engine and re-submit all data.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    tx: mpsc::Sender<Envelope>,
}

impl SearchEngine {
    /// Spawn the worker task and return a handle to it
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(INBOX_CAPACITY);
        tokio::spawn(worker::run(rx));
        SearchEngine { tx }
    }

    /// Append a batch of records; returns the new log total
    ///
    /// Malformed records are dropped before indexing and do not count.
    pub async fn add_messages(&self, messages: Vec<RawMessage>) -> Result<usize> {
        match self.request(Request::AddMessages { messages }).await? {
            Reply::Processed { count } => Ok(count),
            _ => Err(Error::UnexpectedReply {
                expected: "Processed",
            }),
        }
    }

    /// Run a conjunctive query against the current index
    pub async fn search(&self, query: impl Into<String>) -> Result<SearchResults> {
        match self
            .request(Request::Search {
                query: query.into(),
            })
            .await?
        {
            Reply::SearchResults(results) => Ok(results),
            _ => Err(Error::UnexpectedReply {
                expected: "SearchResults",
            }),
        }
    }

    /// Resolve the ordered neighborhood around `id`
    ///
    /// `None` when `id` is not in the log (silent, per the contract).
    pub async fn context(
        &self,
        id: MessageId,
        before: usize,
        after: usize,
    ) -> Result<Option<ContextWindow>> {
        match self.request(Request::Context { id, before, after }).await? {
            Reply::Context { window } => Ok(window),
            _ => Err(Error::UnexpectedReply {
                expected: "Context",
            }),
        }
    }

    /// Current index statistics
    pub async fn stats(&self) -> Result<IndexStats> {
        match self.request(Request::Stats).await? {
            Reply::Stats(stats) => Ok(stats),
            _ => Err(Error::UnexpectedReply { expected: "Stats" }),
        }
    }

    /// Clear the log and the index; subsequent ids restart at 0
    pub async fn reset(&self) -> Result<()> {
        match self.request(Request::Reset).await? {
            Reply::ResetDone => Ok(()),
            _ => Err(Error::UnexpectedReply {
                expected: "ResetDone",
            }),
        }
    }

    async fn request(&self, request: Request) -> Result<Reply> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope { request, reply_tx })
            .await
            .map_err(|_| Error::EngineUnavailable)?;
        reply_rx.await.map_err(|_| Error::EngineUnavailable)
    }
}
