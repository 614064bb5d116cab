//! Wire types for `POST /playerInfo`.

use crate::domain::squad::wire::WirePlayer;
use crate::domain::valuation::wire::WireValuation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInfoRequest {
    pub name: String,
    pub club: String,
    pub season: String,
}

/// Raw response: `{status: "success", data}` or `{status?, message | error}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerInfoEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<WirePlayerInfo>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// The squad row for the player plus profile-only columns.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WirePlayerInfo {
    #[serde(flatten)]
    pub player: WirePlayer,
    #[serde(default)]
    pub club: Option<Value>,
    #[serde(default)]
    pub edad: Option<Value>,
    #[serde(default, rename = "fecha de nacimiento")]
    pub birth_date: Option<Value>,
    #[serde(default)]
    pub pie: Option<Value>,
    #[serde(default, rename = "pais de orígen")]
    pub nationality: Option<Value>,
    #[serde(default)]
    pub altura: Option<Value>,
    #[serde(default, rename = "ultima valoracion")]
    pub last_valuation: Option<Value>,
    #[serde(default)]
    pub valuations: Option<Vec<WireValuation>>,
}
