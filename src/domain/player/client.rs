//! Players sub-client — profile lookup and detail view loading.

use crate::client::ClubdashClient;
use crate::domain::player::wire::{PlayerInfoEnvelope, PlayerInfoRequest};
use crate::domain::player::{PlayerDetails, PlayerInfo, PlayerInfoOutcome, PlayerQuery};
use crate::domain::valuation::ValuationQuery;
use crate::error::SdkError;

pub struct Players<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Players<'a> {
    /// Look up a player's profile.
    ///
    /// Transport failures are [`SdkError::Http`]; a well-formed "not found"
    /// response is [`SdkError::Semantic`] carrying the backend's message.
    pub async fn info(&self, query: &PlayerQuery) -> Result<PlayerInfo, SdkError> {
        let body = PlayerInfoRequest::from(query);
        let envelope: PlayerInfoEnvelope = self.client.http.post("/playerInfo", &body).await?;
        PlayerInfoOutcome::from(envelope).into_result()
    }

    /// Profile, then valuation history. The history is only requested once the
    /// profile resolved; a failed history degrades to an empty series.
    pub async fn details(&self, query: &PlayerQuery) -> Result<PlayerDetails, SdkError> {
        let info = self.info(query).await?;
        let valuations = self
            .client
            .valuations()
            .history(&ValuationQuery {
                player: query.name.clone(),
                club: query.club.clone(),
                season: query.season.clone(),
            })
            .await
            .unwrap_or_default();
        Ok(PlayerDetails { info, valuations })
    }
}
