//! Valuations sub-client — player market-value history.

use crate::client::ClubdashClient;
use crate::domain::valuation::wire::{ValuationRequest, WireValuation};
use crate::domain::valuation::{ValuationPoint, ValuationQuery};

pub struct Valuations<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Valuations<'a> {
    /// Valuation history in API order, or `None` on any failure (logged).
    pub async fn history(&self, query: &ValuationQuery) -> Option<Vec<ValuationPoint>> {
        let body = ValuationRequest::from(query);
        match self
            .client
            .http
            .post::<Option<Vec<WireValuation>>, _>("/valuations", &body)
            .await
        {
            Ok(rows) => Some(
                rows.unwrap_or_default()
                    .into_iter()
                    .map(ValuationPoint::from)
                    .collect(),
            ),
            Err(e) => {
                tracing::warn!(player = %body.player, club = %body.club, error = %e, "valuation history fetch failed");
                None
            }
        }
    }
}
