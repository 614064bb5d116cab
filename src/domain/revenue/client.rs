//! Revenue sub-client — transfer budget simulation.

use crate::client::ClubdashClient;
use crate::domain::revenue::wire::{RevenueRequest, RevenueResponse};
use crate::domain::revenue::{FinancialSummary, RevenueQuery};

pub struct Revenue<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Revenue<'a> {
    /// Simulate the season's transfers against `query.transfer_budget`.
    ///
    /// `None` on any failure (logged). Callers treat `None` as "no update",
    /// never as zero figures.
    pub async fn simulate(&self, query: &RevenueQuery) -> Option<FinancialSummary> {
        let body = RevenueRequest::from(query);
        match self
            .client
            .http
            .post::<RevenueResponse, _>("/transfers/revenue", &body)
            .await
        {
            Ok(resp) => Some(resp.into()),
            Err(e) => {
                tracing::warn!(club = %body.club, season = %body.season, error = %e, "revenue simulation failed");
                None
            }
        }
    }
}
