//! Wire types for `POST /transfers/revenue`.

use crate::shared::serde_util::lenient_decimal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueRequest {
    pub club: String,
    pub season: String,
    pub transfer_budget: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueResponse {
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub net_benefit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub budget_remaining: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub total_spent: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub total_income: Option<Decimal>,
}
