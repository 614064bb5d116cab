//! Conversions between wire and domain types for revenue simulation.

use super::wire::{RevenueRequest, RevenueResponse};
use super::{FinancialSummary, RevenueQuery};
use crate::shared::normalize_club;
use rust_decimal::prelude::ToPrimitive;

impl From<RevenueResponse> for FinancialSummary {
    fn from(r: RevenueResponse) -> Self {
        Self {
            net_benefit: r.net_benefit.unwrap_or_default(),
            budget_remaining: r.budget_remaining.unwrap_or_default(),
            total_spent: r.total_spent.unwrap_or_default(),
            total_income: r.total_income.unwrap_or_default(),
        }
    }
}

impl From<&RevenueQuery> for RevenueRequest {
    fn from(q: &RevenueQuery) -> Self {
        Self {
            club: normalize_club(&q.club),
            season: q.season.as_str().to_string(),
            transfer_budget: q.transfer_budget.to_f64().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SeasonYear;
    use rust_decimal::Decimal;

    #[test]
    fn test_revenue_response_conversion() {
        let json = r#"{"net_benefit": -1500000.0, "budget_remaining": 3500000.0, "total_spent": 2000000.0, "total_income": 500000.0}"#;
        let summary = FinancialSummary::from(serde_json::from_str::<RevenueResponse>(json).unwrap());
        assert_eq!(summary.net_benefit, Decimal::from(-1_500_000));
        assert_eq!(summary.budget_remaining, Decimal::from(3_500_000));
        assert_eq!(summary.total_spent, Decimal::from(2_000_000));
        assert_eq!(summary.total_income, Decimal::from(500_000));
        assert!(summary.is_healthy());
    }

    #[test]
    fn test_negative_remaining_is_warning() {
        let json = r#"{"net_benefit": 0, "budget_remaining": -1, "total_spent": 1, "total_income": 0}"#;
        let summary = FinancialSummary::from(serde_json::from_str::<RevenueResponse>(json).unwrap());
        assert!(!summary.is_healthy());
    }

    #[test]
    fn test_request_lowercases_club() {
        let query = RevenueQuery {
            club: "Boca Juniors".to_string(),
            season: SeasonYear::parse("2025/26").unwrap(),
            transfer_budget: Decimal::from(5_000_000),
        };
        let req = RevenueRequest::from(&query);
        assert_eq!(req.club, "boca juniors");
        assert_eq!(req.season, "2025");
        assert_eq!(req.transfer_budget, 5_000_000.0);
    }
}
