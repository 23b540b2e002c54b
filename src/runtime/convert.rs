//! Type conversion of extracted values
//!
//! Conversions never coerce between kinds: a string is never read as a
//! number, a number never as a boolean.

use crate::error::AccessError;
use crate::types::{value_tag, AccessedValue, ScalarType, ValueType};
use serde_json::Value;

/// Conversion from a JSON value into a Rust type produced by accessors
pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self, AccessError>;

    /// Name of the expected JSON type, used in mismatch errors
    fn expected() -> String;
}

fn mismatch<T: FromJson>(value: &Value) -> AccessError {
    AccessError::TypeMismatch {
        expected: T::expected(),
        actual: value_tag(value),
    }
}

impl FromJson for String {
    fn from_json(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn expected() -> String {
        ScalarType::String.name().to_string()
    }
}

impl FromJson for f64 {
    fn from_json(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| mismatch::<Self>(value)),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn expected() -> String {
        ScalarType::Number.name().to_string()
    }
}

impl FromJson for bool {
    fn from_json(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn expected() -> String {
        ScalarType::Boolean.name().to_string()
    }
}

impl<T: FromJson> FromJson for Vec<T> {
    /// Converts every element in order, failing on the first mismatch
    fn from_json(value: &Value) -> Result<Self, AccessError> {
        match value {
            Value::Array(arr) => arr.iter().map(T::from_json).collect(),
            other => Err(mismatch::<Self>(other)),
        }
    }

    fn expected() -> String {
        format!("list of {}", T::expected())
    }
}

/// Convert a value into the declared type of an accessor
pub fn convert(value: &Value, value_type: ValueType) -> Result<AccessedValue, AccessError> {
    match value_type {
        ValueType::String => convert_scalar(value, ScalarType::String),
        ValueType::Number => convert_scalar(value, ScalarType::Number),
        ValueType::Boolean => convert_scalar(value, ScalarType::Boolean),
        ValueType::ListOf(scalar) => match value {
            Value::Array(arr) => arr
                .iter()
                .map(|element| convert_scalar(element, scalar))
                .collect::<Result<Vec<_>, _>>()
                .map(AccessedValue::List),
            other => Err(AccessError::TypeMismatch {
                expected: value_type.to_string(),
                actual: value_tag(other),
            }),
        },
    }
}

fn convert_scalar(value: &Value, scalar: ScalarType) -> Result<AccessedValue, AccessError> {
    match scalar {
        ScalarType::String => String::from_json(value).map(AccessedValue::String),
        ScalarType::Number => f64::from_json(value).map(AccessedValue::Number),
        ScalarType::Boolean => bool::from_json(value).map(AccessedValue::Boolean),
    }
}
