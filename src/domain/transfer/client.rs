//! Transfers sub-client — movement queries and simulated execution.

use crate::client::ClubdashClient;
use crate::domain::transfer::wire::{SimulateTransferRequest, TransfersRequest, TransfersResponse};
use crate::domain::transfer::{TransferOrder, TransferSet};
use crate::error::SdkError;
use crate::shared::{normalize_club, SeasonYear};

pub struct Transfers<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Transfers<'a> {
    /// Fetch acquisitions and departures for a club and season.
    ///
    /// Never fails: any transport or decode error is logged and degraded to an
    /// empty [`TransferSet`] so other panels can keep rendering.
    pub async fn fetch(&self, club: &str, season: &SeasonYear) -> TransferSet {
        let body = TransfersRequest {
            club: normalize_club(club),
            season: season.as_str().to_string(),
        };
        match self
            .client
            .http
            .post::<TransfersResponse, _>("/transfers", &body)
            .await
        {
            Ok(resp) => resp.into(),
            Err(e) => {
                tracing::warn!(
                    club = %body.club,
                    season = %body.season,
                    error = %e,
                    "transfer fetch failed, showing no movements"
                );
                TransferSet::default()
            }
        }
    }

    /// Execute a simulated transfer. Returns the backend's raw acknowledgement.
    pub async fn execute(&self, order: &TransferOrder) -> Result<serde_json::Value, SdkError> {
        let body = SimulateTransferRequest::from(order);
        Ok(self.client.http.post("/simulateTransfer", &body).await?)
    }
}
