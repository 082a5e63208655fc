//! Decimal stringification of numeric patterns.
//!
//! Integers print exactly. Floats use the shortest digit string that
//! round-trips, laid out the way ECMAScript `Number.prototype.toString`
//! lays it out, so a route built here matches one built by a JavaScript
//! peer for the same value.

use serde_json::Number;

/// Format a JSON number as its route fragment.
pub fn format_number(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        // serde_json numbers are always finite
        format_f64(number.as_f64().unwrap_or_default())
    }
}

/// Format a finite `f64`.
///
/// - `2.0` → `"2"`, `-0.0` → `"0"`
/// - decimal exponent in `-7 < n < 21` prints positionally
/// - anything else prints as `d.ddde+N` / `de-N`
pub fn format_f64(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    layout(&mut out, &digits, exponent + 1);
    out
}

/// Place `digits` (value `0.digits × 10^point`) following the ECMAScript rules.
fn layout(out: &mut String, digits: &str, point: i32) {
    let len = digits.len() as i32;

    if len <= point && point <= 21 {
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take((point - len) as usize));
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < point && point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-point) as usize));
        out.push_str(digits);
    } else {
        let exp = point - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&exp.abs().to_string());
    }
}
