//! High-level client — `ClubdashClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::agent::client::Agent;
use crate::domain::club::client::Clubs;
use crate::domain::player::client::Players;
use crate::domain::revenue::client::Revenue;
use crate::domain::squad::client::Squad;
use crate::domain::summary::client::Summaries;
use crate::domain::transfer::client::Transfers;
use crate::domain::valuation::client::Valuations;
use crate::error::SdkError;
use crate::http::ClubdashHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::agent::client::Agent as AgentClient;
pub use crate::domain::club::client::Clubs as ClubsClient;
pub use crate::domain::player::client::Players as PlayersClient;
pub use crate::domain::revenue::client::Revenue as RevenueClient;
pub use crate::domain::squad::client::Squad as SquadClient;
pub use crate::domain::summary::client::Summaries as SummariesClient;
pub use crate::domain::transfer::client::Transfers as TransfersClient;
pub use crate::domain::valuation::client::Valuations as ValuationsClient;

/// The primary entry point for the dashboard API.
///
/// Provides nested sub-client accessors for each domain:
/// `client.squad()`, `client.transfers()`, etc.
#[derive(Debug, Clone)]
pub struct ClubdashClient {
    pub(crate) http: ClubdashHttp,
}

impl ClubdashClient {
    pub fn builder() -> ClubdashClientBuilder {
        ClubdashClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn squad(&self) -> Squad<'_> {
        Squad { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn clubs(&self) -> Clubs<'_> {
        Clubs { client: self }
    }

    pub fn revenue(&self) -> Revenue<'_> {
        Revenue { client: self }
    }

    pub fn valuations(&self) -> Valuations<'_> {
        Valuations { client: self }
    }

    pub fn players(&self) -> Players<'_> {
        Players { client: self }
    }

    pub fn summaries(&self) -> Summaries<'_> {
        Summaries { client: self }
    }

    pub fn agent(&self) -> Agent<'_> {
        Agent { client: self }
    }

    /// Raw HTTP access for endpoints without a typed sub-client.
    pub fn http(&self) -> &ClubdashHttp {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
pub struct ClubdashClientBuilder {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl Default for ClubdashClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            headers: Vec::new(),
        }
    }
}

impl ClubdashClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Take the base URL from `CLUBDASH_API_URL` when it is set and non-empty.
    pub fn from_env(self) -> Self {
        match std::env::var(crate::network::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.base_url(url.trim()),
            _ => self,
        }
    }

    pub fn build(self) -> Result<ClubdashClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base URL must not be empty".to_string()));
        }
        tracing::debug!(base_url = %self.base_url, "building dashboard client");
        Ok(ClubdashClient {
            http: ClubdashHttp::with_headers(&self.base_url, &self.headers)?,
        })
    }
}
