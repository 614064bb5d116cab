//! Dashboard state container — single writer, owned by the coordinator.

use super::{RequestToken, Stream, StreamStatus, TokenRegistry};
use crate::aggregate::DerivedFinancials;
use crate::domain::player::PlayerDetails;
use crate::domain::revenue::FinancialSummary;
use crate::domain::squad::Player;
use crate::domain::transfer::TransferSet;
use crate::domain::valuation::ValuationPoint;
use crate::error::SdkError;
use crate::shared::{SeasonYear, Selection};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-entered budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budgets {
    pub transfer_budget: Decimal,
    pub salary_budget: Decimal,
}

/// A request that has been dispatched but not completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub token: RequestToken,
    /// Selection at dispatch time.
    pub selection: Selection,
}

impl Dispatch {
    pub fn stream(&self) -> Stream {
        self.token.stream
    }
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Completion {
    /// Current and successful; the result was applied.
    Applied,
    /// Current and failed; the error slot holds the message.
    Failed,
    /// Superseded or dispatched for another selection; nothing changed.
    Discarded,
}

/// Everything the dashboard renders, plus the request bookkeeping that keeps
/// it consistent with the current selection.
#[derive(Debug, Clone)]
pub struct DashboardState {
    selection: Selection,
    budgets: Budgets,
    player_query: String,
    tokens: TokenRegistry,
    status: HashMap<Stream, StreamStatus>,
    error: Option<String>,

    pub(crate) roster: Vec<Player>,
    pub(crate) transfers: TransferSet,
    pub(crate) financials: Option<FinancialSummary>,
    pub(crate) summary: Option<String>,
    pub(crate) valuations: Vec<ValuationPoint>,
    pub(crate) player_details: Option<PlayerDetails>,
}

impl DashboardState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            budgets: Budgets::default(),
            player_query: String::new(),
            tokens: TokenRegistry::new(),
            status: HashMap::new(),
            error: None,
            roster: Vec::new(),
            transfers: TransferSet::default(),
            financials: None,
            summary: None,
            valuations: Vec::new(),
            player_details: None,
        }
    }

    // ── Request lifecycle ────────────────────────────────────────────────

    /// Start a request on `stream`: issue its token, mark it loading and clear
    /// the error slot.
    pub fn begin(&mut self, stream: Stream) -> Dispatch {
        let token = self.tokens.issue(stream, &self.selection);
        self.status.insert(stream, StreamStatus::Loading);
        self.error = None;
        tracing::debug!(stream = %stream, seq = token.seq, club = %token.club, season = %token.season, "request dispatched");
        Dispatch {
            token,
            selection: self.selection.clone(),
        }
    }

    /// Whether a dispatched request may still write to state.
    pub fn is_current(&self, dispatch: &Dispatch) -> bool {
        self.tokens.is_active(&dispatch.token) && dispatch.selection == self.selection
    }

    /// Finish a request. Stale results are dropped without any mutation.
    pub fn complete<T>(
        &mut self,
        dispatch: &Dispatch,
        result: Result<T, SdkError>,
        apply: impl FnOnce(&mut Self, T),
    ) -> Completion {
        let stream = dispatch.stream();
        if !self.is_current(dispatch) {
            tracing::debug!(
                stream = %stream,
                seq = dispatch.token.seq,
                club = %dispatch.selection.club,
                season = %dispatch.selection.season,
                "discarding stale response"
            );
            return Completion::Discarded;
        }

        match result {
            Ok(value) => {
                apply(self, value);
                self.status.insert(stream, StreamStatus::Success);
                Completion::Applied
            }
            Err(e) => {
                self.error = Some(e.user_message());
                self.status.insert(stream, StreamStatus::Failure);
                Completion::Failed
            }
        }
    }

    // ── Selection & inputs ───────────────────────────────────────────────

    /// Replace the selection. When it actually changes, every in-flight
    /// request is invalidated and selection-scoped data is cleared.
    /// Clubs compare as the API sees them, so a change of case alone is not
    /// a change. Returns whether anything changed.
    pub fn set_selection(&mut self, selection: Selection) -> bool {
        if selection.api_club() == self.selection.api_club()
            && selection.season == self.selection.season
        {
            return false;
        }
        tracing::debug!(from = %self.selection, to = %selection, "selection changed");
        self.selection = selection;
        self.tokens.invalidate_all();
        for stream in Stream::ALL {
            self.status.insert(stream, StreamStatus::Idle);
        }
        self.roster.clear();
        self.transfers = TransferSet::default();
        self.financials = None;
        self.summary = None;
        self.valuations.clear();
        self.player_details = None;
        self.error = None;
        true
    }

    pub fn set_club(&mut self, club: &str) -> bool {
        let selection = Selection::new(club.trim(), self.selection.season.clone());
        self.set_selection(selection)
    }

    pub fn set_season(&mut self, season: SeasonYear) -> bool {
        let selection = Selection::new(self.selection.club.clone(), season);
        self.set_selection(selection)
    }

    pub fn set_budgets(&mut self, budgets: Budgets) {
        self.budgets = budgets;
    }

    pub fn set_player_query(&mut self, query: impl Into<String>) {
        self.player_query = query.into();
    }

    // ── Read access ──────────────────────────────────────────────────────

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn budgets(&self) -> Budgets {
        self.budgets
    }

    pub fn player_query(&self) -> &str {
        &self.player_query
    }

    pub fn status(&self, stream: Stream) -> StreamStatus {
        self.status.get(&stream).copied().unwrap_or_default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn transfers(&self) -> &TransferSet {
        &self.transfers
    }

    pub fn financials(&self) -> Option<&FinancialSummary> {
        self.financials.as_ref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn valuations(&self) -> &[ValuationPoint] {
        &self.valuations
    }

    pub fn player_details(&self) -> Option<&PlayerDetails> {
        self.player_details.as_ref()
    }

    /// Squad value and payroll figures for the current roster.
    pub fn derived(&self) -> DerivedFinancials {
        DerivedFinancials::compute(&self.roster, self.budgets.salary_budget)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    fn selection(club: &str, season: &str) -> Selection {
        Selection::parse(club, season).unwrap()
    }

    fn player(name: &str) -> Player {
        Player {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn set_roster(state: &mut DashboardState, roster: Vec<Player>) {
        state.roster = roster;
    }

    #[test]
    fn test_stale_response_never_overwrites() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let first = state.begin(Stream::Squad);
        state.set_club("River");
        let second = state.begin(Stream::Squad);

        let applied = state.complete(&second, Ok(vec![player("river")]), set_roster);
        let stale = state.complete(&first, Ok(vec![player("boca")]), set_roster);

        assert_eq!(applied, Completion::Applied);
        assert_eq!(stale, Completion::Discarded);
        assert_eq!(state.roster()[0].name, "river");
        assert_eq!(state.status(Stream::Squad), StreamStatus::Success);
    }

    #[test]
    fn test_superseded_failure_is_silent() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let first = state.begin(Stream::Squad);
        let second = state.begin(Stream::Squad);

        let stale = state.complete(
            &first,
            Err::<Vec<Player>, _>(SdkError::Other("boom".into())),
            set_roster,
        );
        assert_eq!(stale, Completion::Discarded);
        assert_eq!(state.error(), None);
        assert_eq!(state.status(Stream::Squad), StreamStatus::Loading);

        state.complete(&second, Ok(vec![player("a")]), set_roster);
        assert_eq!(state.status(Stream::Squad), StreamStatus::Success);
    }

    #[test]
    fn test_selection_change_invalidates_without_new_dispatch() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let pending = state.begin(Stream::Transfers);
        assert!(state.set_season(SeasonYear::parse("2024").unwrap()));

        let done = state.complete(
            &pending,
            Ok(TransferSet {
                acquisitions: vec![player("x")],
                departures: vec![],
            }),
            |s, t| s.transfers = t,
        );
        assert_eq!(done, Completion::Discarded);
        assert!(state.transfers().is_empty());
        assert_eq!(state.status(Stream::Transfers), StreamStatus::Idle);
    }

    #[test]
    fn test_selection_change_clears_data_immediately() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        state.transfers = TransferSet {
            acquisitions: vec![player("a")],
            departures: vec![player("b")],
        };
        state.roster = vec![player("c")];
        state.summary = Some("## resumen".into());
        state.financials = Some(FinancialSummary::default());

        assert!(state.set_club("Racing"));
        assert!(state.transfers().acquisitions.is_empty());
        assert!(state.transfers().departures.is_empty());
        assert!(state.roster().is_empty());
        assert_eq!(state.summary(), None);
        assert_eq!(state.financials(), None);
    }

    #[test]
    fn test_same_selection_is_not_a_change() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let pending = state.begin(Stream::Squad);
        assert!(!state.set_club(" Boca "));
        assert!(!state.set_season(SeasonYear::parse("2025/26").unwrap()));
        assert!(state.is_current(&pending));
    }

    #[test]
    fn test_club_case_change_keeps_data() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        state.roster = vec![player("a")];
        let pending = state.begin(Stream::Squad);
        assert!(!state.set_club("boca"));
        assert!(!state.set_club("BOCA "));
        assert_eq!(state.roster().len(), 1);
        assert!(state.is_current(&pending));
        assert_eq!(state.selection().club, "Boca");
    }

    #[test]
    fn test_selection_change_resets_every_stream() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        state.begin(Stream::Revenue);
        assert!(state.set_club("Racing"));
        for stream in Stream::ALL {
            assert_eq!(state.status(stream), StreamStatus::Idle);
        }
    }

    #[test]
    fn test_failure_sets_error_and_dispatch_clears_it() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let d = state.begin(Stream::PlayerDetails);
        let done = state.complete(
            &d,
            Err::<(), _>(SdkError::Http(HttpError::Status {
                status: 404,
                message: "Jugador no encontrado".into(),
            })),
            |_, _| {},
        );
        assert_eq!(done, Completion::Failed);
        assert_eq!(state.error(), Some("Jugador no encontrado"));
        assert_eq!(state.status(Stream::PlayerDetails), StreamStatus::Failure);

        state.begin(Stream::PlayerDetails);
        assert_eq!(state.error(), None);
        assert_eq!(state.status(Stream::PlayerDetails), StreamStatus::Loading);
    }

    #[test]
    fn test_error_slot_holds_latest_failure() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let squad = state.begin(Stream::Squad);
        let summary = state.begin(Stream::Summary);
        state.complete(&squad, Err::<(), _>(SdkError::Other("first".into())), |_, _| {});
        state.complete(&summary, Err::<(), _>(SdkError::Semantic("second".into())), |_, _| {});
        assert_eq!(state.error(), Some("second"));
    }

    #[test]
    fn test_repeated_dispatch_applies_each_time() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        let first = state.begin(Stream::Squad);
        assert_eq!(
            state.complete(&first, Ok(vec![player("a")]), set_roster),
            Completion::Applied
        );
        let second = state.begin(Stream::Squad);
        assert_eq!(state.status(Stream::Squad), StreamStatus::Loading);
        assert_eq!(
            state.complete(&second, Ok(vec![player("b")]), set_roster),
            Completion::Applied
        );
        assert_eq!(state.roster()[0].name, "b");
    }

    #[test]
    fn test_derived_uses_salary_budget() {
        let mut state = DashboardState::new(selection("Boca", "2025"));
        state.set_budgets(Budgets {
            transfer_budget: Decimal::ZERO,
            salary_budget: Decimal::from(1_000_000),
        });
        state.roster = vec![Player {
            annual_salary: Some(Decimal::from(1_200_000)),
            ..player("a")
        }];
        let derived = state.derived();
        assert_eq!(derived.payroll_remaining, Decimal::from(-200_000));
        assert!(!derived.payroll_health.is_healthy());
    }
}
