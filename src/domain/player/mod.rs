//! Player domain — single-player profile lookup and detail view data.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::domain::squad::Player;
use crate::domain::valuation::ValuationPoint;
use crate::error::SdkError;
use crate::shared::SeasonYear;
use serde::{Deserialize, Serialize};

/// Message used when a profile response carries neither data nor a reason.
pub const NOT_FOUND_FALLBACK: &str = "No player information found";

/// Input for a player profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerQuery {
    pub name: String,
    pub club: String,
    pub season: SeasonYear,
}

/// A player's profile as stored in the club's squad dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub player: Player,
    pub club: Option<String>,
    pub age: Option<u32>,
    pub birth_date: Option<String>,
    pub foot: Option<String>,
    pub nationality: Option<String>,
    pub height_cm: Option<u32>,
    pub last_valuation_date: Option<String>,
    /// Valuation rows embedded in the profile, if the backend sent any.
    pub valuations: Vec<ValuationPoint>,
}

/// Decoded `/playerInfo` response.
///
/// The backend signals "not found" inside a 200 response, so the raw shape is
/// resolved into one of these variants immediately on receipt.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerInfoOutcome {
    Found(PlayerInfo),
    NotFound { message: String },
}

impl PlayerInfoOutcome {
    /// `NotFound` becomes [`SdkError::Semantic`] carrying the backend message.
    pub fn into_result(self) -> Result<PlayerInfo, SdkError> {
        match self {
            PlayerInfoOutcome::Found(info) => Ok(info),
            PlayerInfoOutcome::NotFound { message } => Err(SdkError::Semantic(message)),
        }
    }
}

/// Everything the player detail view shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerDetails {
    pub info: PlayerInfo,
    /// History from the valuations dataset, in API order.
    pub valuations: Vec<ValuationPoint>,
}
