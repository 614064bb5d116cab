//! Live tests against a running dashboard backend.
//!
//! All tests are `#[ignore]` because they require network access. The base URL
//! is read from `CLUBDASH_API_URL` (a `.env` file is honored).
//!
//! Run with:
//! ```bash
//! CLUBDASH_API_URL=http://localhost:8000/api cargo test --test live_api -- --ignored
//! ```

use clubdash::prelude::*;

fn live_client() -> ClubdashClient {
    dotenvy::dotenv().ok();
    ClubdashClient::builder()
        .from_env()
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn live_clubs_and_squad() {
    let client = live_client();
    let clubs = client.clubs().available().await.expect("clubs should load");
    let Some(club) = clubs.first() else {
        return;
    };

    let season = SeasonYear::parse("2024").unwrap();
    let data = client
        .clubs()
        .fetch_club_data(club, &season)
        .await
        .expect("club data should load");
    println!(
        "{club}: {} players, {} altas, {} bajas",
        data.players.len(),
        data.transfers.acquisitions.len(),
        data.transfers.departures.len()
    );
}

#[tokio::test]
#[ignore]
async fn live_unknown_player_is_semantic() {
    let client = live_client();
    let err = client
        .players()
        .info(&PlayerQuery {
            name: "zzzz-no-such-player".to_string(),
            club: "boca".to_string(),
            season: SeasonYear::parse("2024").unwrap(),
        })
        .await
        .expect_err("unknown player should not resolve");
    println!("player lookup failed with: {}", err.user_message());
}
