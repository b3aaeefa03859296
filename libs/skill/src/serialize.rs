//! The plain-data capability every response entity implements, plus the
//! numeric-input coercion used for conceptually-integer platform fields.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::SkillError;

/// Capability shared by every entity that can render itself as plain JSON
/// data ready for encoding.
///
/// Serialization is where cross-field contracts are checked last: an entity
/// that cannot produce a valid platform fragment fails with
/// [`SkillError::Structure`] instead of emitting a payload the platform would
/// reject.
pub trait Serializable {
    /// Produces the plain-data tree for this entity.
    fn to_value(&self) -> Result<Value, SkillError>;

    /// Compact JSON text of [`Serializable::to_value`].
    fn to_json(&self) -> Result<String, SkillError> {
        Ok(self.to_value()?.to_string())
    }
}

/// Opaque collaborator payloads (response `context`/`data`) are plain JSON
/// already.
impl Serializable for Value {
    fn to_value(&self) -> Result<Value, SkillError> {
        Ok(self.clone())
    }
}

/// Single-line JSON used for debug display of payload fragments.
pub fn compact_json(value: &Value) -> String {
    value.to_string()
}

pub(crate) fn display_json(
    value: Result<Value, SkillError>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value {
        Ok(value) => f.write_str(&compact_json(&value)),
        Err(err) => write!(f, "<invalid skill payload: {err}>"),
    }
}

/// Wraps a component body in its single-key platform tag.
pub(crate) fn tagged(tag: &str, body: Value) -> Value {
    let mut out = Map::new();
    out.insert(tag.to_string(), body);
    Value::Object(out)
}

pub(crate) fn insert_opt_str(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.clone()));
    }
}

pub(crate) fn insert_opt_int(map: &mut Map<String, Value>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::from(value));
    }
}

/// Loosely typed input for fields the platform expects as integers.
///
/// Callers routinely hold prices and image dimensions as strings or floats;
/// the wire format wants integers. Conversion happens once, at construction,
/// so bad input fails with [`SkillError::Conversion`] before any payload is
/// assembled.
#[derive(Debug, Clone, PartialEq)]
pub enum IntLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IntLike {
    pub fn into_int(self, target: &'static str) -> Result<i64, SkillError> {
        match self {
            IntLike::Int(n) => Ok(n),
            IntLike::Float(x) if x.is_finite() => Ok(x as i64),
            IntLike::Float(x) => Err(SkillError::conversion(x, target)),
            IntLike::Text(s) => {
                if let Ok(n) = s.parse::<i64>() {
                    return Ok(n);
                }
                match s.parse::<f64>() {
                    Ok(x) if x.is_finite() => Ok(x as i64),
                    _ => Err(SkillError::conversion(s, target)),
                }
            }
        }
    }
}

impl From<i64> for IntLike {
    fn from(value: i64) -> Self {
        IntLike::Int(value)
    }
}

impl From<i32> for IntLike {
    fn from(value: i32) -> Self {
        IntLike::Int(value.into())
    }
}

impl From<u32> for IntLike {
    fn from(value: u32) -> Self {
        IntLike::Int(value.into())
    }
}

impl From<f64> for IntLike {
    fn from(value: f64) -> Self {
        IntLike::Float(value)
    }
}

impl From<f32> for IntLike {
    fn from(value: f32) -> Self {
        IntLike::Float(value.into())
    }
}

impl From<&str> for IntLike {
    fn from(value: &str) -> Self {
        IntLike::Text(value.to_string())
    }
}

impl From<String> for IntLike {
    fn from(value: String) -> Self {
        IntLike::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_inputs_pass_through() {
        assert_eq!(IntLike::from(42).into_int("test").unwrap(), 42);
        assert_eq!(IntLike::from(0).into_int("test").unwrap(), 0);
    }

    #[test]
    fn floats_and_numeric_text_truncate_to_int() {
        assert_eq!(IntLike::from(50.0).into_int("test").unwrap(), 50);
        assert_eq!(IntLike::from("100").into_int("test").unwrap(), 100);
        assert_eq!(IntLike::from("12.5").into_int("test").unwrap(), 12);
    }

    #[test]
    fn non_numeric_text_is_a_conversion_error() {
        let err = IntLike::from("wide").into_int("Thumbnail.width").unwrap_err();
        assert!(matches!(err, SkillError::Conversion { .. }));
        assert!(err.to_string().contains("Thumbnail.width"));
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(IntLike::from(f64::NAN).into_int("test").is_err());
        assert!(IntLike::from(f64::INFINITY).into_int("test").is_err());
    }
}
