//! Custom serde helpers for backend wire formats.
//!
//! The backend serializes dataframe rows, so the same logical field can arrive
//! as a number, a numeric string, `null`, or free text such as
//! `"Libre / Cesión"`. These helpers never fail on such values.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Interpret a JSON value as a money amount.
///
/// Numbers and numeric strings parse; everything else is `None`.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Interpret a JSON value as display text. Numbers are stringified, `null`,
/// empty strings and the backend's `"N/A"` placeholder are `None`.
pub fn text_from_value(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() || text == "N/A" {
        None
    } else {
        Some(text)
    }
}

/// First field among `candidates` that yields a value.
pub fn first_of<T>(candidates: &[&Option<Value>], f: impl Fn(&Value) -> Option<T>) -> Option<T> {
    candidates
        .iter()
        .filter_map(|c| c.as_ref())
        .find_map(|v| f(v))
}

/// Deserializes any JSON value into `Option<Decimal>` using [`decimal_from_value`].
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(super::decimal_from_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decimal_from_number_and_string() {
        assert_eq!(decimal_from_value(&json!(1000000)), Some(Decimal::from(1_000_000)));
        assert_eq!(
            decimal_from_value(&json!(1500000.0)),
            Some(Decimal::from(1_500_000))
        );
        assert_eq!(decimal_from_value(&json!(" 250000 ")), Some(Decimal::from(250_000)));
    }

    #[test]
    fn test_decimal_from_junk_is_none() {
        assert_eq!(decimal_from_value(&json!("bad")), None);
        assert_eq!(decimal_from_value(&json!("Libre / Cesión")), None);
        assert_eq!(decimal_from_value(&json!("")), None);
        assert_eq!(decimal_from_value(&Value::Null), None);
        assert_eq!(decimal_from_value(&json!({"v": 1})), None);
    }

    #[test]
    fn test_text_from_value() {
        assert_eq!(text_from_value(&json!("Delantero")), Some("Delantero".to_string()));
        assert_eq!(text_from_value(&json!(12345)), Some("12345".to_string()));
        assert_eq!(text_from_value(&json!("N/A")), None);
        assert_eq!(text_from_value(&json!("  ")), None);
        assert_eq!(text_from_value(&Value::Null), None);
    }

    #[test]
    fn test_first_of_skips_missing_and_unparseable() {
        let a = None;
        let b = Some(json!("n/a money"));
        let c = Some(json!(42));
        assert_eq!(
            first_of(&[&a, &b, &c], decimal_from_value),
            Some(Decimal::from(42))
        );
    }
}
