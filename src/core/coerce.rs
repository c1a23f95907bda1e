//! Numeric coercion for upstream statistics.
//!
//! The stats service is inconsistent about types: counting stats usually
//! arrive as JSON numbers, rate stats as strings (`".287"`, `"3.41"`), and
//! placeholders such as `"-.--"` show up when a rate is undefined. Every
//! statistic read out of an upstream payload goes through [`safe_int`] or
//! [`safe_float`] so a malformed field degrades to a default instead of
//! failing the whole request.

use serde_json::Value;


/// Interpret a JSON value as a finite number, accepting numeric strings.
fn as_finite_f64(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

/// Coerce to an integer, truncating any fractional part (`"3.7"` -> `3`).
///
/// Returns `default` for missing, null, empty, non-numeric or non-finite values.
pub fn safe_int(value: Option<&Value>, default: i64) -> i64 {
    if let Some(i) = value.and_then(Value::as_i64) {
        return i;
    }
    as_finite_f64(value)
        .map(|f| f.trunc() as i64)
        .unwrap_or(default)
}

/// Coerce to a float. Same fallback rules as [`safe_int`].
pub fn safe_float(value: Option<&Value>, default: f64) -> f64 {
    as_finite_f64(value).unwrap_or(default)
}
