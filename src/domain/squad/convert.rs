//! Conversions from wire types to domain types for players.

use super::wire::{SquadResponse, WirePlayer};
use super::Player;
use crate::shared::serde_util::{decimal_from_value, first_of, text_from_value};

impl From<WirePlayer> for Player {
    fn from(w: WirePlayer) -> Self {
        Self {
            id: first_of(&[&w.player_id], text_from_value),
            name: first_of(
                &[
                    &w.full_name,
                    &w.player_name,
                    &w.player_name_spaced,
                    &w.nombre,
                ],
                text_from_value,
            )
            .unwrap_or_default(),
            position: first_of(&[&w.posicion], text_from_value),
            market_value: first_of(&[&w.valor, &w.amount], decimal_from_value),
            annual_salary: first_of(
                &[&w.sueldo_anual, &w.annual_salary, &w.salary],
                decimal_from_value,
            ),
            source_club: first_of(&[&w.from_club, &w.previous_club], text_from_value),
            destination_club: first_of(&[&w.to_club], text_from_value),
        }
    }
}

impl SquadResponse {
    /// Players in API order; a missing `data` field is an empty squad.
    pub fn into_players(self) -> Vec<Player> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(Player::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_squad_row_conversion() {
        let json = r#"{
            "player_id": 418560,
            "número": "1",
            "nombre y apellido": "Leandro Brey",
            "posicion": "Portero",
            "valor": 1500000,
            "club anterior": "Los Andes",
            "sueldo_anual": "120000"
        }"#;
        let wire: WirePlayer = serde_json::from_str(json).unwrap();
        let player = Player::from(wire);
        assert_eq!(player.id.as_deref(), Some("418560"));
        assert_eq!(player.name, "Leandro Brey");
        assert_eq!(player.position.as_deref(), Some("Portero"));
        assert_eq!(player.market_value, Some(Decimal::from(1_500_000)));
        assert_eq!(player.annual_salary, Some(Decimal::from(120_000)));
        assert_eq!(player.source_club.as_deref(), Some("Los Andes"));
        assert_eq!(player.key(), "418560");
    }

    #[test]
    fn test_transfer_row_aliases() {
        let json = r#"{"player_id": "N/A", "player name": "Juan Pérez", "to_club": "River Plate", "amount": "Libre / Cesión"}"#;
        let player = Player::from(serde_json::from_str::<WirePlayer>(json).unwrap());
        assert_eq!(player.id, None);
        assert_eq!(player.name, "Juan Pérez");
        assert_eq!(player.key(), "Juan Pérez");
        assert_eq!(player.destination_club.as_deref(), Some("River Plate"));
        assert_eq!(player.market_value, None);
        assert!(player.is_free_or_loan());
    }

    #[test]
    fn test_valor_preferred_over_amount() {
        let json = r#"{"player_name": "X", "valor": null, "amount": 250000.0}"#;
        let player = Player::from(serde_json::from_str::<WirePlayer>(json).unwrap());
        assert_eq!(player.market_value, Some(Decimal::from(250_000)));
        assert!(!player.is_free_or_loan());
    }

    #[test]
    fn test_missing_data_is_empty_squad() {
        let resp: SquadResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(resp.into_players().is_empty());
        let resp: SquadResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        assert!(resp.into_players().is_empty());
    }
}
