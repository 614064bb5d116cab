//! Squad sub-client — roster queries.

use crate::client::ClubdashClient;
use crate::domain::squad::wire::SquadResponse;
use crate::domain::squad::Player;
use crate::error::SdkError;
use crate::shared::{normalize_club, SeasonYear};

pub struct Squad<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Squad<'a> {
    /// Fetch the roster for a club and season.
    ///
    /// A response without `data` is an empty roster, not an error. Transport
    /// errors propagate.
    pub async fn fetch(&self, club: &str, season: &SeasonYear) -> Result<Vec<Player>, SdkError> {
        let endpoint = format!(
            "/squad/{}/{}",
            urlencoding::encode(&normalize_club(club)),
            urlencoding::encode(season.as_str())
        );
        let resp: SquadResponse = self.client.http.get(&endpoint).await?;
        Ok(resp.into_players())
    }
}
