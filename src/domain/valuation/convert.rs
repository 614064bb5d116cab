//! Conversions between wire and domain types for valuations.

use super::wire::{ValuationRequest, WireValuation};
use super::{ValuationPoint, ValuationQuery};
use crate::shared::normalize_club;
use crate::shared::serde_util::{decimal_from_value, first_of, text_from_value};
use rust_decimal::prelude::ToPrimitive;

impl From<WireValuation> for ValuationPoint {
    fn from(w: WireValuation) -> Self {
        Self {
            date: first_of(&[&w.valuation_date, &w.date], text_from_value).unwrap_or_default(),
            amount: first_of(&[&w.valuation_amount, &w.amount], decimal_from_value),
            age_at_valuation: first_of(&[&w.age_at_valuation], decimal_from_value)
                .and_then(|age| age.trunc().to_u32()),
            club: first_of(&[&w.club_nombre, &w.club], text_from_value),
        }
    }
}

impl From<&ValuationQuery> for ValuationRequest {
    fn from(q: &ValuationQuery) -> Self {
        Self {
            club: normalize_club(&q.club),
            season: q.season.as_str().to_string(),
            player: q.player.trim().to_string(),
        }
    }
}
