//! Revenue domain — server-side transfer budget simulation.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::aggregate::BudgetHealth;
use crate::shared::SeasonYear;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input for a revenue simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueQuery {
    pub club: String,
    pub season: SeasonYear,
    pub transfer_budget: Decimal,
}

/// Financial outcome of a season's transfers against a transfer budget.
///
/// All figures are computed by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub net_benefit: Decimal,
    pub budget_remaining: Decimal,
    pub total_spent: Decimal,
    pub total_income: Decimal,
}

impl FinancialSummary {
    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::from_remaining(self.budget_remaining)
    }

    pub fn is_healthy(&self) -> bool {
        self.health().is_healthy()
    }
}
