//! Squad domain — players registered to a club for a season.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A player row as shown in squad and transfer tables.
///
/// `id` identifies a player within one club/season response but is not
/// guaranteed to be globally unique; [`Player::key`] falls back to the name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub id: Option<String>,
    pub name: String,
    pub position: Option<String>,
    pub market_value: Option<Decimal>,
    pub annual_salary: Option<Decimal>,
    /// Club the player arrived from (acquisitions) or previous club (squad).
    pub source_club: Option<String>,
    /// Club the player left for (departures).
    pub destination_club: Option<String>,
}

impl Player {
    /// Stable row key: the player id, or the name when no id is present.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// A transfer with no positive fee is a free transfer or a loan.
    pub fn is_free_or_loan(&self) -> bool {
        !matches!(self.market_value, Some(v) if v > Decimal::ZERO)
    }
}
