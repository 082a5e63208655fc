//! Pattern → route canonicalization.
//!
//! - string: returned unchanged
//! - number: decimal stringification (see [`crate::number`])
//! - mapping: `{k1:v1/k2:v2/…/kN:vN}` with every value canonicalized
//!   recursively and fragments sorted by key (see [`crate::collation`])
//!
//! Two patterns whose mappings hold the same pairs in any insertion order
//! produce byte-identical routes.

use serde_json::Value;

use crate::collation::compare_keys;
use crate::config::{CanonicalizeOptions, KeyOrder};
use crate::error::RouteError;
use crate::number::format_number;
use crate::pattern::Pattern;

/// Canonicalize a pattern with default options.
///
/// # Example
/// ```
/// use pattern_route_core::{canonicalize, Pattern};
///
/// let pattern = Pattern::mapping([("cmd", Pattern::from("sum")), ("role", Pattern::from("math"))]);
/// assert_eq!(canonicalize(&pattern), "{cmd:sum/role:math}");
/// ```
pub fn canonicalize(pattern: &Pattern) -> String {
    render(pattern, KeyOrder::default())
}

/// Canonicalize a pattern with explicit options.
pub fn canonicalize_with(pattern: &Pattern, options: &CanonicalizeOptions) -> String {
    render(pattern, options.key_order)
}

/// Canonicalize a dynamically-typed JSON value.
///
/// Fails with [`RouteError::InvalidPatternType`] if the value, or any value
/// nested inside it, is a boolean or null. No partial route is produced.
///
/// # Example
/// ```
/// use pattern_route_core::canonicalize_value;
/// use serde_json::json;
///
/// let route = canonicalize_value(&json!({ "b": { "y": 1, "x": 2 }, "a": 1 })).unwrap();
/// assert_eq!(route, "{a:1/b:{x:2/y:1}}");
/// assert!(canonicalize_value(&json!(null)).is_err());
/// ```
pub fn canonicalize_value(value: &Value) -> Result<String, RouteError> {
    canonicalize_value_with(value, &CanonicalizeOptions::default())
}

/// Canonicalize a JSON value with explicit options.
pub fn canonicalize_value_with(
    value: &Value,
    options: &CanonicalizeOptions,
) -> Result<String, RouteError> {
    let pattern = Pattern::from_value(value)?;
    Ok(canonicalize_with(&pattern, options))
}

/// Parse JSON text and canonicalize it.
pub fn canonicalize_str(json: &str) -> Result<String, RouteError> {
    canonicalize_str_with(json, &CanonicalizeOptions::default())
}

/// Parse JSON text and canonicalize it with explicit options.
pub fn canonicalize_str_with(
    json: &str,
    options: &CanonicalizeOptions,
) -> Result<String, RouteError> {
    let value: Value = serde_json::from_str(json)?;
    canonicalize_value_with(&value, options)
}

/// Whether two JSON patterns resolve to the same route.
pub fn routes_match(left: &Value, right: &Value) -> Result<bool, RouteError> {
    Ok(canonicalize_value(left)? == canonicalize_value(right)?)
}

fn render(pattern: &Pattern, order: KeyOrder) -> String {
    match pattern {
        Pattern::String(s) => s.clone(),
        Pattern::Number(n) => format_number(n),
        Pattern::Mapping(entries) => render_mapping(entries, order),
    }
}

fn render_mapping(entries: &[(String, Pattern)], order: KeyOrder) -> String {
    let mut fragments: Vec<(&str, String)> = entries
        .iter()
        .map(|(key, value)| (key.as_str(), render(value, order)))
        .collect();

    // Duplicate keys fall back to the rendered value so the order stays
    // independent of insertion order.
    fragments.sort_by(|a, b| compare_keys(a.0, b.0, order).then_with(|| a.1.cmp(&b.1)));

    let mut route = String::from("{");
    for (index, (key, value)) in fragments.iter().enumerate() {
        if index > 0 {
            route.push('/');
        }
        route.push_str(key);
        route.push(':');
        route.push_str(value);
    }
    route.push('}');

    tracing::trace!(entries = entries.len(), route = %route, "canonicalized mapping");
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn route(value: Value) -> String {
        canonicalize_value(&value).expect("pattern should canonicalize")
    }

    #[test]
    fn test_string_passes_through() {
        assert_eq!(route(json!("hello")), "hello");
        assert_eq!(route(json!("")), "");
    }

    #[test]
    fn test_number_stringified() {
        assert_eq!(route(json!(42)), "42");
        assert_eq!(route(json!(-3.5)), "-3.5");
    }

    #[test]
    fn test_flat_mapping_sorted() {
        assert_eq!(route(json!({ "b": 1, "a": 2 })), "{a:2/b:1}");
    }

    #[test]
    fn test_nested_mapping_sorted_at_every_level() {
        assert_eq!(
            route(json!({ "b": { "y": 1, "x": 2 }, "a": 1 })),
            "{a:1/b:{x:2/y:1}}"
        );
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(route(json!({})), "{}");
        assert_eq!(route(json!([])), "{}");
    }

    #[test]
    fn test_array_as_index_mapping() {
        assert_eq!(route(json!([1, 2])), "{0:1/1:2}");
    }

    #[test]
    fn test_long_array_sorts_indices_lexically() {
        let items: Vec<u32> = (0..11).collect();
        assert_eq!(
            route(json!(items)),
            "{0:0/1:1/10:10/2:2/3:3/4:4/5:5/6:6/7:7/8:8/9:9}"
        );
    }

    #[test]
    fn test_insertion_order_ignored() {
        let forward = Pattern::mapping([("cmd", Pattern::from("sum")), ("id", Pattern::from(1))]);
        let reverse = Pattern::mapping([("id", Pattern::from(1)), ("cmd", Pattern::from("sum"))]);
        assert_eq!(canonicalize(&forward), canonicalize(&reverse));
    }

    #[test]
    fn test_duplicate_keys_kept_and_ordered_by_value() {
        let left = Pattern::mapping([("k", Pattern::from("b")), ("k", Pattern::from("a"))]);
        let right = Pattern::mapping([("k", Pattern::from("a")), ("k", Pattern::from("b"))]);
        assert_eq!(canonicalize(&left), "{k:a/k:b}");
        assert_eq!(canonicalize(&left), canonicalize(&right));
    }

    #[test]
    fn test_key_order_option() {
        let pattern = Pattern::mapping([("a", Pattern::from(1)), ("B", Pattern::from(2))]);
        assert_eq!(canonicalize(&pattern), "{a:1/B:2}");
        assert_eq!(
            canonicalize_with(&pattern, &CanonicalizeOptions::with_key_order(KeyOrder::Codepoint)),
            "{B:2/a:1}"
        );
    }

    #[test]
    fn test_canonical_string_is_idempotent() {
        let first = route(json!({ "z": { "q": 1 }, "m": "x" }));
        assert_eq!(route(Value::String(first.clone())), first);
    }

    #[test]
    fn test_invalid_types_fail() {
        for value in [json!(null), json!(true), json!(false), json!({ "a": null })] {
            let err = canonicalize_value(&value).unwrap_err();
            assert!(matches!(err, RouteError::InvalidPatternType { .. }), "{value}");
        }
    }

    #[test]
    fn test_canonicalize_str_parse_error() {
        let err = canonicalize_str("{not json").unwrap_err();
        assert!(matches!(err, RouteError::JsonError(_)));
    }

    #[test]
    fn test_canonicalize_str_with_key_order() {
        let json = r#"{"a": 1, "B": {"c": 2, "D": 3}}"#;
        assert_eq!(canonicalize_str(json).unwrap(), "{a:1/B:{c:2/D:3}}");
        assert_eq!(
            canonicalize_str_with(json, &CanonicalizeOptions::with_key_order(KeyOrder::Codepoint))
                .unwrap(),
            "{B:{D:3/c:2}/a:1}"
        );
    }

    #[test]
    fn test_routes_match() {
        assert!(routes_match(&json!({ "a": 1, "b": 2 }), &json!({ "b": 2, "a": 1 })).unwrap());
        assert!(!routes_match(&json!({ "a": 1 }), &json!({ "a": 2 })).unwrap());
        assert!(routes_match(&json!(1), &json!(null)).is_err());
    }
}
