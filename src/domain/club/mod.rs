//! Club domain — composite club data and the list of known clubs.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::squad::Player;
use crate::domain::transfer::TransferSet;
use serde::{Deserialize, Serialize};

/// Roster and transfer movements for one club and season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClubData {
    pub players: Vec<Player>,
    pub transfers: TransferSet,
}

impl ClubData {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.transfers.is_empty()
    }
}
