//! The boundary worker: single owner of the log and the index.
//!
//! Exactly one logical operation is in flight at a time. Requests are
//! drained from a single mpsc inbox in FIFO order and each one runs to
//! completion before the next is taken, so the log and the posting
//! store need no locks. Tokenization, indexing, and search are CPU-bound
//! and fast; the isolation exists so this work never stalls the
//! caller's interactive context.

use crate::command::Request;
use crate::output::{IndexStats, Reply, SearchResults};
use msgsearch_core::RawMessage;
use msgsearch_index::{context_window, execute, tokenize, MessageLog, PostingStore};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// A request paired with its reply channel
pub(crate) struct Envelope {
    pub(crate) request: Request,
    pub(crate) reply_tx: oneshot::Sender<Reply>,
}

/// Owned index state, instantiated once per session
#[derive(Default)]
pub(crate) struct IndexWorker {
    log: MessageLog,
    postings: PostingStore,
}

impl IndexWorker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Execute one request against the owned state
    pub(crate) fn apply(&mut self, request: Request) -> Reply {
        match request {
            Request::AddMessages { messages } => {
                let received = messages.len();
                let complete: Vec<RawMessage> =
                    messages.into_iter().filter(RawMessage::is_complete).collect();
                let dropped = received - complete.len();
                if dropped > 0 {
                    warn!(dropped, received, "dropped malformed records before indexing");
                }

                let range = self.log.append(complete);
                let tokenized: Vec<_> = self
                    .log
                    .slice(range.start as usize..range.end as usize)
                    .iter()
                    .map(|m| (m.id, tokenize(m)))
                    .collect();
                for (id, tokens) in tokenized {
                    self.postings.index_message(id, tokens);
                }

                let count = self.log.len();
                info!(appended = range.len(), total = count, "batch indexed");
                Reply::Processed { count }
            }

            Request::Search { query } => {
                let outcome = execute(&self.postings, &self.log, &query);
                debug!(
                    query = %query,
                    hits = outcome.messages.len(),
                    elapsed_us = outcome.elapsed.as_micros() as u64,
                    "search evaluated"
                );
                Reply::SearchResults(SearchResults {
                    results: outcome.messages,
                    query,
                    elapsed_time_ms: outcome.elapsed.as_secs_f64() * 1_000.0,
                })
            }

            Request::Context { id, before, after } => Reply::Context {
                window: context_window(&self.log, id, before, after),
            },

            Request::Stats => Reply::Stats(IndexStats {
                messages: self.log.len(),
                distinct_tokens: self.postings.distinct_tokens(),
            }),

            Request::Reset => {
                self.log.clear();
                self.postings.clear();
                info!("session reset, ids restart at 0");
                Reply::ResetDone
            }
        }
    }
}

/// Worker loop: drain the inbox until every handle is dropped
pub(crate) async fn run(mut inbox: mpsc::Receiver<Envelope>) {
    let mut worker = IndexWorker::new();
    while let Some(Envelope { request, reply_tx }) = inbox.recv().await {
        let reply = worker.apply(request);
        if reply_tx.send(reply).is_err() {
            // Caller went away between send and reply; nothing to do.
            debug!("reply dropped, caller gone");
        }
    }
    info!("inbox closed, search worker exiting");
}
