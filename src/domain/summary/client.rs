//! Summaries sub-client.

use crate::client::ClubdashClient;
use crate::domain::summary::summary_text;
use crate::error::SdkError;
use crate::shared::{normalize_club, SeasonYear};

pub struct Summaries<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Summaries<'a> {
    /// Generate the season summary for a club. Slow on the backend side; the
    /// request carries no body.
    pub async fn season(&self, club: &str, season: &SeasonYear) -> Result<String, SdkError> {
        let endpoint = format!(
            "/summary/{}/{}",
            urlencoding::encode(&normalize_club(club)),
            urlencoding::encode(season.as_str())
        );
        let body: serde_json::Value = self.client.http.post_empty(&endpoint).await?;
        Ok(summary_text(&body))
    }
}
