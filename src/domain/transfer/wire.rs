//! Wire types for transfer requests and responses.

use crate::domain::squad::wire::WirePlayer;
use serde::{Deserialize, Serialize};

/// Body for `POST /transfers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransfersRequest {
    pub club: String,
    pub season: String,
}

/// REST response for `POST /transfers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransfersResponse {
    #[serde(default)]
    pub altas: Option<Vec<WirePlayer>>,
    #[serde(default)]
    pub bajas: Option<Vec<WirePlayer>>,
}

/// Body for `POST /simulateTransfer`. The backend expects a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateTransferRequest {
    pub player: String,
    pub season: String,
    pub from_club: String,
    pub to_club: String,
    pub transfer_amount: f64,
}
