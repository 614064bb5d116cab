//! Wire types for `POST /valuations`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    pub club: String,
    pub season: String,
    pub player: String,
}

/// A raw valuation row. Field names differ between the valuations dataset
/// (`valuation_*`) and embedded player profiles (`date`/`amount`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireValuation {
    #[serde(default)]
    pub valuation_date: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub valuation_amount: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub age_at_valuation: Option<Value>,
    #[serde(default)]
    pub club_nombre: Option<Value>,
    #[serde(default)]
    pub club: Option<Value>,
}
