//! Field checks shared by the dish and order rules.
//!
//! Payload fields arrive as loose JSON values so that a wrong shape can be reported with the
//! resource's own message instead of a deserializer error. Each resource strings these checks
//! together with `?`, in a fixed order, so the first failing check is the one reported.

use serde_json::Value;

/// A field counts as present unless it is missing, `null` or the empty string.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Truthiness: like [`is_present`], but `false` and `0` also count as absent.
///
/// Used where a falsy value means "not supplied" (the order's `dishes`, the body id).
/// `price` keeps [`is_present`] so that `0` is reported as a bad price.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        other => is_present(other),
    }
}

/// Returns the field as an owned string if it is a non-empty JSON string.
pub fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Returns the field if it is a JSON integer strictly greater than zero.
///
/// Floats (including `2.0`), numeric strings and negative numbers are all rejected.
pub fn positive_integer(value: Option<&Value>) -> Option<u64> {
    value.and_then(Value::as_u64).filter(|n| *n > 0)
}

/// Renders a value the way it appears in error messages: strings bare, anything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Checks a payload `id` against the route id.
///
/// A falsy body id (missing, `null`, `""`, `0`, `false`) passes. Any other must be the same
/// string as the route id; otherwise the rendered body id is returned for the mismatch message.
pub fn matching_body_id(body_id: Option<&Value>, route_id: &str) -> Result<(), String> {
    match body_id {
        Some(id) if is_truthy(Some(id)) => {
            if id.as_str() == Some(route_id) {
                Ok(())
            } else {
                Err(display_value(id))
            }
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&Value::Null)));
        assert!(!is_present(Some(&json!(""))));
        assert!(is_present(Some(&json!("x"))));
        assert!(is_present(Some(&json!(0))));
        assert!(is_present(Some(&json!([]))));
        assert!(is_present(Some(&json!(false))));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(0.0))));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!(-1))));
        assert!(is_truthy(Some(&json!([]))));
        assert!(is_truthy(Some(&json!({}))));
    }

    #[test]
    fn test_non_empty_string() {
        assert_eq!(non_empty_string(Some(&json!("Dolcelatte"))), Some("Dolcelatte".into()));
        assert_eq!(non_empty_string(Some(&json!(""))), None);
        assert_eq!(non_empty_string(Some(&json!(12))), None);
        assert_eq!(non_empty_string(None), None);
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer(Some(&json!(26))), Some(26));
        assert_eq!(positive_integer(Some(&json!(0))), None);
        assert_eq!(positive_integer(Some(&json!(-3))), None);
        assert_eq!(positive_integer(Some(&json!(2.5))), None);
        assert_eq!(positive_integer(Some(&json!("17"))), None);
        assert_eq!(positive_integer(None), None);
    }

    #[test]
    fn test_matching_body_id() {
        assert_eq!(matching_body_id(None, "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&Value::Null), "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&json!("")), "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&json!(0)), "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&json!(false)), "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&json!("abc")), "abc"), Ok(()));
        assert_eq!(matching_body_id(Some(&json!("xyz")), "abc"), Err("xyz".into()));
        assert_eq!(matching_body_id(Some(&json!(42)), "42"), Err("42".into()));
    }
}
