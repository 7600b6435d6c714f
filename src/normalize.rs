//! Field normalizers: raw JSON values to well-formed quantities.
//!
//! Each function is total. A return of `None` means "unusable for
//! scoring" and is a normal, silent outcome for the rule engine; the
//! stricter quality checks in `classify` are deliberately separate.

use serde_json::Value;

use crate::constants::plausibility;

/// Parse a raw blood-pressure field into `(systolic, diastolic)`.
///
/// Accepts only a string of the exact shape `"systolic/diastolic"`
/// after trimming. Both halves must parse as integers, be strictly
/// positive, and sit inside the plausibility bounds.
pub fn blood_pressure(raw: &Value) -> Option<(i64, i64)> {
    let text = raw.as_str()?.trim();
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return None;
    }
    let systolic = parse_integer(parts[0])?;
    let diastolic = parse_integer(parts[1])?;
    if systolic <= 0 || diastolic <= 0 {
        return None;
    }
    if systolic > plausibility::SYSTOLIC_MAX || diastolic > plausibility::DIASTOLIC_MAX {
        return None;
    }
    Some((systolic, diastolic))
}

/// Parse a raw temperature field into degrees.
///
/// Accepts a JSON number or numeric-looking text; anything else is
/// unusable. No plausibility bound is applied to temperature.
pub fn temperature(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
        }
        _ => None,
    }
}

/// Parse a raw age field into whole years.
///
/// Accepts an integral JSON number or integer-looking text; the result
/// must fall in `(0, AGE_MAX]`.
pub fn age(raw: &Value) -> Option<i64> {
    let years = match raw {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => parse_integer(text)?,
        _ => return None,
    };
    if years <= 0 || years > plausibility::AGE_MAX {
        return None;
    }
    Some(years)
}

fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
