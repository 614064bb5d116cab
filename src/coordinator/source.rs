//! The fetch seam between the coordinator and the API sub-clients.

use crate::domain::club::ClubData;
use crate::domain::player::{PlayerDetails, PlayerQuery};
use crate::domain::revenue::{FinancialSummary, RevenueQuery};
use crate::domain::squad::Player;
use crate::domain::transfer::TransferSet;
use crate::domain::valuation::{ValuationPoint, ValuationQuery};
use crate::error::SdkError;
use crate::shared::Selection;
use async_trait::async_trait;

/// Data source driven by [`Coordinator`](super::Coordinator).
///
/// Resilience follows the fetchers: transfers never fail, revenue and
/// valuations yield `None` on failure, the rest propagate errors.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn squad(&self, selection: &Selection) -> Result<Vec<Player>, SdkError>;

    async fn transfers(&self, selection: &Selection) -> TransferSet;

    async fn club_data(&self, selection: &Selection) -> Result<ClubData, SdkError>;

    async fn revenue(&self, query: &RevenueQuery) -> Option<FinancialSummary>;

    async fn valuations(&self, query: &ValuationQuery) -> Option<Vec<ValuationPoint>>;

    async fn player_details(&self, query: &PlayerQuery) -> Result<PlayerDetails, SdkError>;

    async fn season_summary(&self, selection: &Selection) -> Result<String, SdkError>;
}

#[cfg(feature = "http")]
#[async_trait]
impl DashboardSource for crate::client::ClubdashClient {
    async fn squad(&self, selection: &Selection) -> Result<Vec<Player>, SdkError> {
        self.squad().fetch(&selection.club, &selection.season).await
    }

    async fn transfers(&self, selection: &Selection) -> TransferSet {
        self.transfers().fetch(&selection.club, &selection.season).await
    }

    async fn club_data(&self, selection: &Selection) -> Result<ClubData, SdkError> {
        self.clubs()
            .fetch_club_data(&selection.club, &selection.season)
            .await
    }

    async fn revenue(&self, query: &RevenueQuery) -> Option<FinancialSummary> {
        self.revenue().simulate(query).await
    }

    async fn valuations(&self, query: &ValuationQuery) -> Option<Vec<ValuationPoint>> {
        self.valuations().history(query).await
    }

    async fn player_details(&self, query: &PlayerQuery) -> Result<PlayerDetails, SdkError> {
        self.players().details(query).await
    }

    async fn season_summary(&self, selection: &Selection) -> Result<String, SdkError> {
        self.summaries()
            .season(&selection.club, &selection.season)
            .await
    }
}
