// server/src/pipelines/validation.rs

//! Presence and type checks shared by the create workflows.
//!
//! A field counts as missing when it is absent or holds a falsy JSON value:
//! `null`, `false`, `0` or the empty string. Arrays and objects are present.

use crate::errors::{AppError, Result};
use serde_json::Value;

pub fn is_falsy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) => true,
    Some(Value::Bool(b)) => !b,
    Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
    Some(Value::String(s)) => s.is_empty(),
    Some(Value::Array(_)) | Some(Value::Object(_)) => false,
  }
}

/// Name of the first field that is missing, in the order given.
pub fn first_missing<'a>(fields: &[(&'a str, Option<&Value>)]) -> Option<&'a str> {
  fields.iter().find(|(_, value)| is_falsy(*value)).map(|(name, _)| *name)
}

/// Returns the field as owned text. Call after the presence check.
pub fn require_text(field: &str, value: Option<&Value>) -> Result<String> {
  match value {
    Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
    _ => Err(AppError::Validation(format!("Field '{}' must be a non-empty string.", field))),
  }
}

/// Reads a quantity from a JSON number or a numeric string.
///
/// Returns `None` unless the value is a whole number of at least 1.
pub fn parse_quantity(value: &Value) -> Option<i64> {
  let number = match value {
    Value::Number(n) => match n.as_i64() {
      Some(i) => return (i >= 1).then_some(i),
      None => n.as_f64()?,
    },
    Value::String(s) => {
      let s = s.trim();
      // Integer spellings stay exact; only forms like "4.0" or "1e2" go through f64.
      if let Ok(i) = s.parse::<i64>() {
        return (i >= 1).then_some(i);
      }
      s.parse::<f64>().ok()?
    }
    _ => return None,
  };

  // `i64::MAX as f64` rounds up to 2^63, so equality is already out of range.
  if !number.is_finite() || number.fract() != 0.0 || number < 1.0 || number >= i64::MAX as f64 {
    return None;
  }
  Some(number as i64)
}
