//! Conversions between wire and domain types for player profiles.

use super::wire::{PlayerInfoEnvelope, PlayerInfoRequest, WirePlayerInfo};
use super::{PlayerInfo, PlayerInfoOutcome, PlayerQuery, NOT_FOUND_FALLBACK};
use crate::domain::squad::Player;
use crate::domain::valuation::ValuationPoint;
use crate::shared::normalize_club;
use crate::shared::serde_util::{decimal_from_value, first_of, text_from_value};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

fn whole_number(value: &Option<serde_json::Value>) -> Option<u32> {
    first_of(&[value], decimal_from_value)
        .filter(|d| *d > Decimal::ZERO)
        .and_then(|d| d.trunc().to_u32())
}

impl From<WirePlayerInfo> for PlayerInfo {
    fn from(w: WirePlayerInfo) -> Self {
        Self {
            club: first_of(&[&w.club], text_from_value),
            age: whole_number(&w.edad),
            birth_date: first_of(&[&w.birth_date], text_from_value),
            foot: first_of(&[&w.pie], text_from_value),
            nationality: first_of(&[&w.nationality], text_from_value),
            height_cm: whole_number(&w.altura),
            last_valuation_date: first_of(&[&w.last_valuation], text_from_value),
            valuations: w
                .valuations
                .unwrap_or_default()
                .into_iter()
                .map(ValuationPoint::from)
                .collect(),
            player: Player::from(w.player),
        }
    }
}

impl From<PlayerInfoEnvelope> for PlayerInfoOutcome {
    fn from(env: PlayerInfoEnvelope) -> Self {
        if env.status.as_deref() == Some("success") {
            if let Some(data) = env.data {
                return PlayerInfoOutcome::Found(data.into());
            }
        }
        let message = first_of(&[&env.message, &env.error], text_from_value)
            .unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string());
        PlayerInfoOutcome::NotFound { message }
    }
}

impl From<&PlayerQuery> for PlayerInfoRequest {
    fn from(q: &PlayerQuery) -> Self {
        Self {
            name: q.name.trim().to_string(),
            club: normalize_club(&q.club),
            season: q.season.as_str().to_string(),
        }
    }
}
