//! Clubs sub-client — composite fetches.

use crate::client::ClubdashClient;
use crate::domain::club::ClubData;
use crate::error::SdkError;
use crate::shared::SeasonYear;

pub struct Clubs<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Clubs<'a> {
    /// Fetch squad and transfers concurrently.
    ///
    /// Fails only when the squad leg fails; a failing transfers leg yields an
    /// empty [`TransferSet`](crate::domain::transfer::TransferSet).
    pub async fn fetch_club_data(
        &self,
        club: &str,
        season: &SeasonYear,
    ) -> Result<ClubData, SdkError> {
        let squad = self.client.squad();
        let transfers = self.client.transfers();
        let (players, transfers) = futures_util::join!(
            squad.fetch(club, season),
            transfers.fetch(club, season),
        );
        Ok(ClubData {
            players: players?,
            transfers,
        })
    }

    /// Club names the backend has data for.
    pub async fn available(&self) -> Result<Vec<String>, SdkError> {
        let clubs: Option<Vec<String>> = self.client.http.get("/clubs").await?;
        Ok(clubs.unwrap_or_default())
    }
}
