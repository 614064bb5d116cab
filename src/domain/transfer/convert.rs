//! Conversions between wire and domain types for transfers.

use super::wire::{SimulateTransferRequest, TransfersResponse};
use super::{TransferOrder, TransferSet};
use crate::domain::squad::Player;
use rust_decimal::prelude::ToPrimitive;

impl From<TransfersResponse> for TransferSet {
    fn from(r: TransfersResponse) -> Self {
        Self {
            acquisitions: r
                .altas
                .unwrap_or_default()
                .into_iter()
                .map(Player::from)
                .collect(),
            departures: r
                .bajas
                .unwrap_or_default()
                .into_iter()
                .map(Player::from)
                .collect(),
        }
    }
}

impl From<&TransferOrder> for SimulateTransferRequest {
    fn from(o: &TransferOrder) -> Self {
        Self {
            player: o.player.clone(),
            season: o.season.as_str().to_string(),
            from_club: o.from_club.clone(),
            to_club: o.to_club.clone(),
            transfer_amount: o.transfer_amount.to_f64().unwrap_or_default(),
        }
    }
}
