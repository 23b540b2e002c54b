//! Path extraction
//!
//! Replays a path against a document. Objects are stepped into by key and
//! arrays by index; the `Each` wildcard maps the rest of the path over every
//! array element.

use crate::error::AccessError;
use crate::types::{value_tag, PathSegment};
use serde_json::Value;
use std::borrow::Cow;

/// Extract the value at `path`.
///
/// Borrows from the document unless the path contains a wildcard, in which
/// case the collected elements are returned as a new array.
pub fn extract<'v>(value: &'v Value, path: &[PathSegment]) -> Result<Cow<'v, Value>, AccessError> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(Cow::Borrowed(value));
    };

    match (value, segment) {
        (Value::Array(arr), PathSegment::Each) => {
            let collected = arr
                .iter()
                .map(|element| extract(element, rest).map(Cow::into_owned))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Cow::Owned(Value::Array(collected)))
        }
        (Value::Array(arr), _) => {
            let idx = segment.as_index().ok_or_else(|| invalid(segment, value))?;
            let element = arr.get(idx).ok_or(AccessError::IndexOutOfBounds(idx))?;
            extract(element, rest)
        }
        (Value::Object(obj), _) => {
            let key = segment.as_key().ok_or_else(|| invalid(segment, value))?;
            let child = obj.get(&key).ok_or(AccessError::MissingKey(key))?;
            extract(child, rest)
        }
        _ => Err(invalid(segment, value)),
    }
}

fn invalid(segment: &PathSegment, found: &Value) -> AccessError {
    AccessError::InvalidPath {
        segment: segment.to_string(),
        found: value_tag(found),
    }
}
