//! Transfer domain — acquisitions (altas), departures (bajas) and simulated
//! transfer execution.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::aggregate::saturating_sum;
use crate::domain::squad::Player;
use crate::shared::SeasonYear;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{parse_amount_input, ExecutedTransfer, TransferLedger};

/// Player movements for a club and season.
///
/// Empty vectors are a valid "no movement" result, distinct from a failed
/// fetch (which the transfers sub-client degrades to this same empty value).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransferSet {
    pub acquisitions: Vec<Player>,
    pub departures: Vec<Player>,
}

impl TransferSet {
    pub fn is_empty(&self) -> bool {
        self.acquisitions.is_empty() && self.departures.is_empty()
    }

    /// Sum of acquisition fees; free transfers and loans count as zero.
    pub fn total_spent(&self) -> Decimal {
        sum_fees(&self.acquisitions)
    }

    /// Sum of departure fees; free transfers and loans count as zero.
    pub fn total_income(&self) -> Decimal {
        sum_fees(&self.departures)
    }
}

fn sum_fees(players: &[Player]) -> Decimal {
    saturating_sum(players.iter().filter_map(|p| p.market_value))
}

/// A request to move a player between two clubs in the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOrder {
    pub player: String,
    pub season: SeasonYear,
    pub from_club: String,
    pub to_club: String,
    pub transfer_amount: Decimal,
}
