//! Async driver for [`DashboardState`].

use super::state::{Budgets, Completion, DashboardState};
use super::{DashboardSource, Stream};
use crate::aggregate::DerivedFinancials;
use crate::domain::club::ClubData;
use crate::domain::player::{PlayerDetails, PlayerQuery};
use crate::domain::revenue::{FinancialSummary, RevenueQuery};
use crate::domain::squad::Player;
use crate::domain::transfer::TransferSet;
use crate::domain::valuation::{ValuationPoint, ValuationQuery};
use crate::error::SdkError;
use crate::shared::{SeasonYear, Selection};

use async_lock::RwLock;
use std::future::Future;
use std::sync::Arc;

/// Error slot text when player details are requested without a name.
pub const MISSING_PLAYER_NAME: &str = "Missing required parameters: player name";

/// Issues fetches against a [`DashboardSource`] and applies their results to
/// the shared [`DashboardState`].
///
/// The state lock is held only while a request begins and while it completes,
/// never across the network call, so reads stay responsive and concurrent
/// operations interleave freely.
pub struct Coordinator<S> {
    source: S,
    state: Arc<RwLock<DashboardState>>,
}

impl<S: DashboardSource> Coordinator<S> {
    pub fn new(source: S, selection: Selection) -> Self {
        Self::with_state(source, Arc::new(RwLock::new(DashboardState::new(selection))))
    }

    pub fn with_state(source: S, state: Arc<RwLock<DashboardState>>) -> Self {
        Self { source, state }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Shared handle for readers outside the coordinator.
    pub fn state(&self) -> Arc<RwLock<DashboardState>> {
        Arc::clone(&self.state)
    }

    pub async fn read<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        let state = self.state.read().await;
        f(&state)
    }

    pub async fn derived(&self) -> DerivedFinancials {
        self.read(|s| s.derived()).await
    }

    // ── Inputs ───────────────────────────────────────────────────────────

    pub async fn set_selection(&self, selection: Selection) -> bool {
        self.state.write().await.set_selection(selection)
    }

    pub async fn set_club(&self, club: &str) -> bool {
        self.state.write().await.set_club(club)
    }

    pub async fn set_season(&self, season: SeasonYear) -> bool {
        self.state.write().await.set_season(season)
    }

    pub async fn set_budgets(&self, budgets: Budgets) {
        self.state.write().await.set_budgets(budgets);
    }

    pub async fn set_player_query(&self, query: impl Into<String>) {
        self.state.write().await.set_player_query(query);
    }

    // ── Loads ────────────────────────────────────────────────────────────

    pub async fn load_squad(&self) -> Completion {
        self.run(
            Stream::Squad,
            |selection| async move { self.source.squad(&selection).await },
            |state: &mut DashboardState, roster: Vec<Player>| state.roster = roster,
        )
        .await
    }

    /// Transfers never fail; a failing endpoint shows as no movement.
    pub async fn load_transfers(&self) -> Completion {
        self.run(
            Stream::Transfers,
            |selection| async move {
                Ok::<_, SdkError>(self.source.transfers(&selection).await)
            },
            |state: &mut DashboardState, transfers: TransferSet| state.transfers = transfers,
        )
        .await
    }

    /// Squad and transfers together, on the transfers stream.
    pub async fn load_all(&self) -> Completion {
        self.run(
            Stream::Transfers,
            |selection| async move { self.source.club_data(&selection).await },
            |state: &mut DashboardState, data: ClubData| {
                state.roster = data.players;
                state.transfers = data.transfers;
            },
        )
        .await
    }

    /// Simulate the current selection's transfers against the transfer
    /// budget. A simulation that produced nothing leaves the previous figures
    /// in place.
    pub async fn simulate_revenue(&self) -> Completion {
        let transfer_budget = self.read(|s| s.budgets().transfer_budget).await;
        self.run(
            Stream::Revenue,
            |selection| async move {
                let query = RevenueQuery {
                    club: selection.club,
                    season: selection.season,
                    transfer_budget,
                };
                Ok::<_, SdkError>(self.source.revenue(&query).await)
            },
            |state: &mut DashboardState, summary: Option<FinancialSummary>| {
                if let Some(summary) = summary {
                    state.financials = Some(summary);
                }
            },
        )
        .await
    }

    /// Valuation history for the current player query. Returns `None` without
    /// dispatching when the query is blank.
    pub async fn load_valuations(&self) -> Option<Completion> {
        let player = self.read(|s| s.player_query().trim().to_string()).await;
        if player.is_empty() {
            return None;
        }
        let completion = self
            .run(
                Stream::Valuations,
                |selection| async move {
                    let query = ValuationQuery {
                        player,
                        club: selection.club,
                        season: selection.season,
                    };
                    Ok::<_, SdkError>(self.source.valuations(&query).await)
                },
                |state: &mut DashboardState, history: Option<Vec<ValuationPoint>>| {
                    state.valuations = history.unwrap_or_default()
                },
            )
            .await;
        Some(completion)
    }

    /// Profile and valuation history for one player. A blank name fails
    /// without reaching the source.
    pub async fn load_player_details(&self, name: &str) -> Completion {
        let name = name.trim().to_string();
        if name.is_empty() {
            let mut state = self.state.write().await;
            let dispatch = state.begin(Stream::PlayerDetails);
            return state.complete(
                &dispatch,
                Err::<PlayerDetails, _>(SdkError::Validation(MISSING_PLAYER_NAME.to_string())),
                |_, _| {},
            );
        }
        self.run(
            Stream::PlayerDetails,
            |selection| async move {
                let query = PlayerQuery {
                    name,
                    club: selection.club,
                    season: selection.season,
                };
                self.source.player_details(&query).await
            },
            |state: &mut DashboardState, details: PlayerDetails| {
                state.player_details = Some(details)
            },
        )
        .await
    }

    pub async fn load_summary(&self) -> Completion {
        self.run(
            Stream::Summary,
            |selection| async move { self.source.season_summary(&selection).await },
            |state: &mut DashboardState, summary: String| state.summary = Some(summary),
        )
        .await
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn run<T, F, Fut>(
        &self,
        stream: Stream,
        fetch: F,
        apply: impl FnOnce(&mut DashboardState, T),
    ) -> Completion
    where
        F: FnOnce(Selection) -> Fut,
        Fut: Future<Output = Result<T, SdkError>>,
    {
        let dispatch = self.state.write().await.begin(stream);
        let result = fetch(dispatch.selection.clone()).await;
        self.state.write().await.complete(&dispatch, result, apply)
    }
}
