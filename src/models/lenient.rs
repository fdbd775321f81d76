//! Forgiving field readers for stored records
//!
//! Hand-edited or older files may hold numbers as strings, floats where an
//! integer is expected, or nulls. These readers coerce what they can and
//! fall back to the field default instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
  Ok(match Value::deserialize(d)? {
    Value::String(s) => s,
    Value::Null => String::new(),
    other => other.to_string(),
  })
}

pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  Ok(match Value::deserialize(d)? {
    Value::Null => None,
    Value::String(s) => Some(s),
    other => Some(other.to_string()),
  })
}

fn as_number(value: &Value) -> Option<f64> {
  match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
    _ => None,
  }
}

pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
  Ok(as_number(&Value::deserialize(d)?).unwrap_or(0.0))
}

pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
  Ok(as_number(&Value::deserialize(d)?))
}

/// Whole minutes; fractions round, negatives and junk read as 0
pub fn minutes<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
  let value = as_number(&Value::deserialize(d)?).unwrap_or(0.0);
  Ok(value.round().clamp(0.0, u32::MAX as f64) as u32)
}

/// Keep every element that reads as `T`, log and drop the rest
pub fn vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned,
{
  let Value::Array(items) = Value::deserialize(d)? else {
    tracing::warn!("Expected a list in stored data, using an empty one");
    return Ok(Vec::new());
  };

  Ok(
    items
      .into_iter()
      .filter_map(|item| match serde_json::from_value(item) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
          tracing::warn!("Dropping unreadable stored record: {}", e);
          None
        }
      })
      .collect(),
  )
}

pub fn map<'de, D: Deserializer<'de>>(d: D) -> Result<Map<String, Value>, D::Error> {
  Ok(match Value::deserialize(d)? {
    Value::Object(map) => map,
    _ => Map::new(),
  })
}
