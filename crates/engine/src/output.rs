//! Reply enum and result payloads for the boundary protocol.
//!
//! Every [`Request`](crate::Request) variant has exactly one reply
//! shape. The wire form is camelCase so the protocol stays shape-stable
//! regardless of transport.

use msgsearch_core::Message;
use msgsearch_index::ContextWindow;
use serde::{Deserialize, Serialize};

/// Results of one search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SearchResults {
    /// Matching messages in ascending id order
    pub results: Vec<Message>,
    /// The query this reply answers, echoed for stale-reply discard
    pub query: String,
    /// Wall-clock evaluation time in milliseconds (diagnostic only)
    pub elapsed_time_ms: f64,
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IndexStats {
    /// Messages currently in the log
    pub messages: usize,
    /// Distinct tokens ever indexed this session
    pub distinct_tokens: usize,
}

/// Reply to a boundary request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Reply {
    /// Batch appended and indexed; `count` is the new log total
    Processed {
        /// Total messages in the log after the append
        count: usize,
    },
    /// Search completed
    SearchResults(SearchResults),
    /// Context resolved; `None` when the id is unknown
    Context {
        /// The resolved window, if the id was in the log
        window: Option<ContextWindow>,
    },
    /// Current index statistics
    Stats(IndexStats),
    /// Log and index cleared
    ResetDone,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_wire_shape() {
        let reply = Reply::SearchResults(SearchResults {
            results: vec![],
            query: "see you".into(),
            elapsed_time_ms: 0.25,
        });
        let json = serde_json::to_value(&reply).unwrap();
        let body = &json["SearchResults"];
        assert_eq!(body["query"], "see you");
        assert_eq!(body["elapsedTimeMs"], 0.25);
        assert!(body["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_stats_wire_shape() {
        let json = serde_json::to_value(Reply::Stats(IndexStats {
            messages: 3,
            distinct_tokens: 12,
        }))
        .unwrap();
        assert_eq!(json["Stats"]["messages"], 3);
        assert_eq!(json["Stats"]["distinctTokens"], 12);
    }

    #[test]
    fn test_processed_round_trip() {
        let reply = Reply::Processed { count: 7 };
        let json = serde_json::to_string(&reply).unwrap();
        let back: Reply = serde_json::from_str(&json).unwrap();
        assert_eq!(reply, back);
    }
}
