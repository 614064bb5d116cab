//! Money formatting for dashboard cards and tables.
//!
//! Amounts are whole currency units grouped with `.` (the `es-AR` convention
//! the backend data uses), e.g. `1500000` → `"1.500.000"`.

use rust_decimal::prelude::*;

/// Groups the integer digits of an already-rounded amount.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format an amount with no decimal places and `.` thousands separators.
pub fn display_amount(value: &Decimal) -> String {
    let rounded = value.round_dp(0).abs().normalize();
    let grouped = group_thousands(&rounded.trunc().to_string());
    if value.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `"$1.500.000"`. Missing or zero amounts render as `"$0"`.
pub fn display_currency(value: Option<&Decimal>) -> String {
    match value {
        Some(v) => {
            let body = display_amount(v);
            match body.strip_prefix('-') {
                Some(abs) => format!("-${}", abs),
                None => format!("${}", body),
            }
        }
        None => "$0".to_string(),
    }
}

/// `"+$1.000"` for non-negative values, `"-$1.000"` otherwise.
pub fn display_signed(value: &Decimal) -> String {
    let sign = if value.is_sign_negative() && !value.round_dp(0).is_zero() {
        '-'
    } else {
        '+'
    };
    format!("{}${}", sign, display_amount(&value.abs()))
}
