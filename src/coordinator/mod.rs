//! Request coordination — request tokens, per-stream status and the owned
//! dashboard state.
//!
//! Every fetch that depends on the current [`Selection`] is tagged with a
//! [`RequestToken`] when it is dispatched. Issuing a new token for a stream
//! supersedes the previous one, and changing the selection invalidates all of
//! them. A response is applied only while its token is still live and the
//! selection it was dispatched for is still current; anything else is
//! discarded without touching state.

mod driver;
mod source;
pub mod state;

use crate::shared::{SeasonYear, Selection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use driver::{Coordinator, MISSING_PLAYER_NAME};
pub use source::DashboardSource;
pub use state::{Budgets, Completion, DashboardState, Dispatch};

// ─── Stream ──────────────────────────────────────────────────────────────────

/// An independent request stream. Each stream has at most one live token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Squad,
    /// Shared by the transfers fetch and the composite squad + transfers fetch.
    Transfers,
    Revenue,
    Valuations,
    PlayerDetails,
    Summary,
}

impl Stream {
    pub const ALL: [Stream; 6] = [
        Stream::Squad,
        Stream::Transfers,
        Stream::Revenue,
        Stream::Valuations,
        Stream::PlayerDetails,
        Stream::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stream::Squad => "squad",
            Stream::Transfers => "transfers",
            Stream::Revenue => "revenue",
            Stream::Valuations => "valuations",
            Stream::PlayerDetails => "player_details",
            Stream::Summary => "summary",
        }
    }
}

impl std::fmt::Display for Stream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── StreamStatus ────────────────────────────────────────────────────────────

/// `Idle -> Loading -> {Success, Failure}`; `Loading` can be re-entered from
/// any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failure,
}

impl StreamStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, StreamStatus::Loading)
    }
}

// ─── RequestToken ────────────────────────────────────────────────────────────

/// Identity of one dispatched request.
///
/// `seq` is unique per registry, so two dispatches issued within the same
/// clock tick are still distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub stream: Stream,
    pub club: String,
    pub season: SeasonYear,
    pub issued_at: DateTime<Utc>,
    pub seq: u64,
}

/// Holds the live token of each stream.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    active: HashMap<Stream, RequestToken>,
    next_seq: u64,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for `stream`, superseding the stream's previous token.
    pub fn issue(&mut self, stream: Stream, selection: &Selection) -> RequestToken {
        self.next_seq += 1;
        let token = RequestToken {
            stream,
            club: selection.club.clone(),
            season: selection.season.clone(),
            issued_at: Utc::now(),
            seq: self.next_seq,
        };
        self.active.insert(stream, token.clone());
        token
    }

    pub fn is_active(&self, token: &RequestToken) -> bool {
        self.active
            .get(&token.stream)
            .is_some_and(|live| live.seq == token.seq)
    }

    pub fn active(&self, stream: Stream) -> Option<&RequestToken> {
        self.active.get(&stream)
    }

    /// Drop every live token. In-flight responses will be discarded.
    pub fn invalidate_all(&mut self) {
        self.active.clear();
    }
}
