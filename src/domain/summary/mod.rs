//! Summary domain — AI-generated season summaries (markdown).

#[cfg(feature = "http")]
pub mod client;

use serde_json::Value;

/// Render a summary response body as displayable text.
///
/// A JSON string is the markdown itself; any other JSON is pretty-printed.
pub fn summary_text(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_body_is_markdown() {
        let body = json!("## Temporada 2025\n\n- Ventas: 3");
        assert_eq!(summary_text(&body), "## Temporada 2025\n\n- Ventas: 3");
    }

    #[test]
    fn test_object_body_is_pretty_json() {
        let body = json!({"resumen": "ok"});
        assert_eq!(summary_text(&body), "{\n  \"resumen\": \"ok\"\n}");
    }

    #[test]
    fn test_null_body_is_empty() {
        assert_eq!(summary_text(&Value::Null), "");
    }
}
