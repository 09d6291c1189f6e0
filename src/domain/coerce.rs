//! Lenient conversions for client payloads. Bad input never fails a request,
//! it falls back to a zero/empty value instead.

use serde_json::Value;

/// JSON number or numeric string, else 0.
pub fn number_or_zero(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

pub fn clamped(value: &Value, min: f64, max: f64) -> f64 {
    number_or_zero(value).clamp(min, max)
}

/// Rating on the 1..=5 scale used for effort and impact.
pub fn rating(value: &Value) -> u8 {
    number_or_zero(value).round().clamp(1.0, 5.0) as u8
}

pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn non_blank(value: &Value) -> Option<String> {
    text(value).filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings() {
        assert_eq!(number_or_zero(&json!(7.5)), 7.5);
        assert_eq!(number_or_zero(&json!(" 42 ")), 42.0);
        assert_eq!(number_or_zero(&json!("many")), 0.0);
        assert_eq!(number_or_zero(&Value::Null), 0.0);
        assert_eq!(number_or_zero(&json!([1])), 0.0);
    }

    #[test]
    fn rating_clamps_into_scale() {
        assert_eq!(rating(&json!(9)), 5);
        assert_eq!(rating(&json!(-3)), 1);
        assert_eq!(rating(&Value::Null), 1);
        assert_eq!(rating(&json!("2.6")), 3);
    }

    #[test]
    fn blank_text_is_dropped() {
        assert_eq!(non_blank(&json!("  ")), None);
        assert_eq!(non_blank(&json!("2024-01-01")), Some("2024-01-01".to_string()));
        assert_eq!(non_blank(&json!(false)), None);
    }
}
