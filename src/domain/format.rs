// src/domain/format.rs

use serde_json::Value;

/// Placeholder shown wherever the API left a field out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Treats `null`, `false`, zero and empty strings as "no value".
///
/// A real zero (e.g. a tax amount of 0) therefore displays as N/A too.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Follows `path` through nested objects, yielding `None` at the first gap.
pub fn lookup<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

/// Same as [`lookup`], but drops falsy leaves.
pub fn lookup_present<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    lookup(root, path).filter(|v| !is_falsy(v))
}

/// Inserts `,` every three digits of the integer part. Keeps sign and fraction.
pub fn group_digits(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

fn number_text(value: &Value) -> Option<String> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(i) = n.as_i64() {
        return Some(i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 {
        Some(format!("{f:.0}"))
    } else {
        Some(f.to_string())
    }
}

/// Thousands-separated rendering of a present, non-falsy value.
pub fn thousands(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| !is_falsy(v))?;
    match value {
        Value::Number(_) => number_text(value).map(|s| group_digits(&s)),
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

/// `$1,234,567`, or N/A.
pub fn currency(value: Option<&Value>) -> String {
    thousands(value)
        .map(|s| format!("${s}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Plain rendering of a scalar (no separators), or N/A.
pub fn plain(value: Option<&Value>) -> String {
    match value.filter(|v| !is_falsy(v)) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(v @ Value::Number(_)) => number_text(v).unwrap_or_else(|| v.to_string()),
        Some(other) => other.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Plain rendering with a unit suffix, e.g. `3 Bed`, or N/A.
pub fn with_unit(value: Option<&Value>, unit: &str) -> String {
    match value.filter(|v| !is_falsy(v)) {
        Some(_) => format!("{} {unit}", plain(value)),
        None => NOT_AVAILABLE.to_string(),
    }
}
