//! View-state aggregation — pure derivations over fetched collections.
//!
//! Nothing here touches the network or the coordinator; every function is a
//! plain computation over the current roster and user-entered budgets.

use crate::domain::squad::Player;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// Sum of market values. Missing or non-numeric values count as zero.
pub fn squad_total_value(roster: &[Player]) -> Decimal {
    saturating_sum(roster.iter().filter_map(|p| p.market_value))
}

/// Sum of annual salaries, with the same lenient rule.
pub fn squad_payroll(roster: &[Player]) -> Decimal {
    saturating_sum(roster.iter().filter_map(|p| p.annual_salary))
}

/// Salary budget left after paying the roster. May be negative; saturates
/// at the `Decimal` bounds.
pub fn payroll_remaining(salary_budget: Decimal, roster: &[Player]) -> Decimal {
    salary_budget.saturating_sub(squad_payroll(roster))
}

/// Whether a remaining budget is still within limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetHealth {
    Healthy,
    Warning,
}

impl BudgetHealth {
    pub fn from_remaining(remaining: Decimal) -> Self {
        if remaining >= Decimal::ZERO {
            BudgetHealth::Healthy
        } else {
            BudgetHealth::Warning
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, BudgetHealth::Healthy)
    }
}

/// Figures derived from the current roster and salary budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFinancials {
    pub squad_total_value: Decimal,
    pub payroll_remaining: Decimal,
    pub payroll_health: BudgetHealth,
}

impl DerivedFinancials {
    pub fn compute(roster: &[Player], salary_budget: Decimal) -> Self {
        let payroll_remaining = payroll_remaining(salary_budget, roster);
        Self {
            squad_total_value: squad_total_value(roster),
            payroll_remaining,
            payroll_health: BudgetHealth::from_remaining(payroll_remaining),
        }
    }
}

impl Default for DerivedFinancials {
    fn default() -> Self {
        Self::compute(&[], Decimal::ZERO)
    }
}
