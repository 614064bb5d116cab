//! Wire types for squad responses.
//!
//! Player rows are serialized dataframe records, so field names vary between
//! endpoints (squad vs. transfers) and values are loosely typed. Every field
//! is kept as a raw JSON value and resolved in `convert.rs`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// REST response for `GET /squad/{club}/{season}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SquadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<WirePlayer>>,
}

/// A raw player row (squad, acquisitions and departures share this shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePlayer {
    #[serde(default)]
    pub player_id: Option<Value>,
    #[serde(default, rename = "nombre y apellido")]
    pub full_name: Option<Value>,
    #[serde(default)]
    pub player_name: Option<Value>,
    #[serde(default, rename = "player name")]
    pub player_name_spaced: Option<Value>,
    #[serde(default)]
    pub nombre: Option<Value>,
    #[serde(default)]
    pub posicion: Option<Value>,
    #[serde(default)]
    pub valor: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub sueldo_anual: Option<Value>,
    #[serde(default)]
    pub annual_salary: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default)]
    pub from_club: Option<Value>,
    #[serde(default, rename = "club anterior")]
    pub previous_club: Option<Value>,
    #[serde(default)]
    pub to_club: Option<Value>,
}
