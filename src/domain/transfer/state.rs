//! Transfer simulator state — app-owned, SDK-provided update logic.

use super::TransferOrder;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// A transfer the backend acknowledged during this session.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedTransfer {
    pub order: TransferOrder,
    pub executed_at: DateTime<Utc>,
}

/// Session log of executed transfers, newest first.
///
/// The app owns instances of this type. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct TransferLedger {
    entries: VecDeque<ExecutedTransfer>,
}

impl TransferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, order: TransferOrder) {
        self.entries.push_front(ExecutedTransfer {
            order,
            executed_at: Utc::now(),
        });
    }

    pub fn entries(&self) -> &VecDeque<ExecutedTransfer> {
        &self.entries
    }

    pub fn latest(&self) -> Option<&ExecutedTransfer> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Parse a user-typed amount by keeping only ASCII digits.
///
/// `"1.500.000 €"` → `1500000`; input without digits is zero.
pub fn parse_amount_input(raw: &str) -> Decimal {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .try_fold(Decimal::ZERO, |acc, c| {
            acc.checked_mul(Decimal::TEN)?
                .checked_add(Decimal::from(c.to_digit(10)?))
        })
        .unwrap_or(Decimal::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SeasonYear;

    fn order(player: &str) -> TransferOrder {
        TransferOrder {
            player: player.to_string(),
            season: SeasonYear::parse("2024").unwrap(),
            from_club: "a".to_string(),
            to_club: "b".to_string(),
            transfer_amount: Decimal::from(1000),
        }
    }

    #[test]
    fn test_ledger_newest_first() {
        let mut ledger = TransferLedger::new();
        ledger.record(order("first"));
        ledger.record(order("second"));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.latest().unwrap().order.player, "second");
        let names: Vec<_> = ledger.entries().iter().map(|e| e.order.player.as_str()).collect();
        assert_eq!(names, ["second", "first"]);
        ledger.clear();
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_parse_amount_input() {
        assert_eq!(parse_amount_input("1.500.000 €"), Decimal::from(1_500_000));
        assert_eq!(parse_amount_input("2500000"), Decimal::from(2_500_000));
        assert_eq!(parse_amount_input(""), Decimal::ZERO);
        assert_eq!(parse_amount_input("abc"), Decimal::ZERO);
    }
}
