//! # clubdash
//!
//! Rust client for the club financial dashboard API: squad rosters, transfer
//! movements, market valuations, player profiles, AI season summaries and the
//! conversational agent.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types (no I/O)
//! 2. **HTTP API** — `ClubdashHttp`: URL building, JSON bodies, error normalization
//! 3. **High-Level Client** — `ClubdashClient` with nested sub-clients
//! 4. **Coordination** — request tokens and the owned `DashboardState`, driven by `Coordinator`
//! 5. **Aggregation** — squad value, payroll remaining and budget health
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clubdash::prelude::*;
//!
//! let client = ClubdashClient::builder()
//!     .base_url("http://localhost:8000/api")
//!     .build()?;
//!
//! let coordinator = Coordinator::new(client, Selection::parse("Boca Juniors", "2025/26")?);
//! coordinator.load_all().await;
//! let derived = coordinator.derived().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Single-shot JSON HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ClubdashClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Coordination ────────────────────────────────────────────────────

/// Stale-response suppression and the dashboard state container.
pub mod coordinator;

// ── Layer 5: Aggregation ─────────────────────────────────────────────────────

/// Pure derivations over fetched collections.
pub mod aggregate;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::fmt::money::{display_currency, display_signed};
    pub use crate::shared::{SeasonYear, Selection};

    // Domain types
    pub use crate::domain::agent::{ChatMessage, ChatSession, Role};
    pub use crate::domain::club::ClubData;
    pub use crate::domain::player::{PlayerDetails, PlayerInfo, PlayerInfoOutcome, PlayerQuery};
    pub use crate::domain::revenue::{FinancialSummary, RevenueQuery};
    pub use crate::domain::squad::Player;
    pub use crate::domain::transfer::{
        parse_amount_input, ExecutedTransfer, TransferLedger, TransferOrder, TransferSet,
    };
    pub use crate::domain::valuation::{ValuationPoint, ValuationQuery};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AgentClient, ClubdashClient, ClubdashClientBuilder, ClubsClient, PlayersClient,
        RevenueClient, SquadClient, SummariesClient, TransfersClient, ValuationsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{CallOptions, ClubdashHttp};

    // Coordination + aggregation
    pub use crate::aggregate::{BudgetHealth, DerivedFinancials};
    pub use crate::coordinator::{
        Budgets, Completion, Coordinator, DashboardSource, DashboardState, Stream, StreamStatus,
    };
}
