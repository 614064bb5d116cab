//! Valuation domain — a player's market-value history.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::SeasonYear;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for a valuation history lookup. `player` is matched by the backend
/// as an accent- and case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationQuery {
    pub player: String,
    pub club: String,
    pub season: SeasonYear,
}

/// A market-value estimate at a point in time.
///
/// Histories are kept in API order; the client never re-sorts them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValuationPoint {
    /// Date as reported by the source (format is not normalized).
    pub date: String,
    pub amount: Option<Decimal>,
    pub age_at_valuation: Option<u32>,
    pub club: Option<String>,
}

/// Chart series for a history: `(date label, amount or zero)`.
pub fn chart_series(points: &[ValuationPoint]) -> Vec<(String, Decimal)> {
    points
        .iter()
        .map(|p| (p.date.clone(), p.amount.unwrap_or_default()))
        .collect()
}

/// Highest valuation in a history.
pub fn peak(points: &[ValuationPoint]) -> Option<&ValuationPoint> {
    points
        .iter()
        .filter(|p| p.amount.is_some())
        .max_by_key(|p| p.amount)
}
