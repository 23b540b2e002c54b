use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Semantic classification of a JSON value, derived on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Number,
    Bool,
    Object,
    /// Non-empty array, classified by its first element only
    ArrayOf(Box<JsonKind>),
    Other,
}

/// One step of a path through a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
    /// Every element of an array (collector accessors only)
    Each,
}

impl PathSegment {
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }

    /// The segment as an object key. Indices use their decimal form.
    pub fn as_key(&self) -> Option<String> {
        match self {
            PathSegment::Key(k) => Some(k.clone()),
            PathSegment::Index(i) => Some(i.to_string()),
            PathSegment::Each => None,
        }
    }

    /// The segment as an array index, if it is one or parses as one.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(k) => parse_index(k),
            PathSegment::Each => None,
        }
    }
}

/// Non-negative decimal integers only; rejects signs and whitespace.
/// Values past `usize::MAX` saturate so they still read as out of bounds.
fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse().unwrap_or(usize::MAX))
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Each => f.write_str("*"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Ordered sequence of segments from the document root
pub type Path = Vec<PathSegment>;

/// Render a path as `a.b.0.c` for diagnostics
pub fn display_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return "$".to_string();
    }
    path.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Primitive types an accessor can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Number,
    Boolean,
}

impl ScalarType {
    /// Scalar type for a leaf kind; `None` for objects, arrays and other
    pub fn from_kind(kind: &JsonKind) -> Option<Self> {
        match kind {
            JsonKind::String => Some(ScalarType::String),
            JsonKind::Number => Some(ScalarType::Number),
            JsonKind::Bool => Some(ScalarType::Boolean),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Boolean => "boolean",
        }
    }

    /// Rust type produced by the runtime for this scalar
    pub fn rust_type(self) -> &'static str {
        match self {
            ScalarType::String => "String",
            ScalarType::Number => "f64",
            ScalarType::Boolean => "bool",
        }
    }
}

/// Declared result type of an accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    ListOf(ScalarType),
}

impl ValueType {
    pub fn scalar(scalar: ScalarType) -> Self {
        match scalar {
            ScalarType::String => ValueType::String,
            ScalarType::Number => ValueType::Number,
            ScalarType::Boolean => ValueType::Boolean,
        }
    }

    pub fn rust_type(self) -> String {
        match self {
            ValueType::String => "String".to_string(),
            ValueType::Number => "f64".to_string(),
            ValueType::Boolean => "bool".to_string(),
            ValueType::ListOf(inner) => format!("Vec<{}>", inner.rust_type()),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::String => f.write_str("string"),
            ValueType::Number => f.write_str("number"),
            ValueType::Boolean => f.write_str("boolean"),
            ValueType::ListOf(inner) => write!(f, "list of {}", inner.name()),
        }
    }
}

/// A leaf found by the schema walker, before naming
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub path: Path,
    pub value_type: ValueType,
}

impl Leaf {
    pub fn new(path: Path, value_type: ValueType) -> Self {
        Leaf { path, value_type }
    }
}

/// A named accessor bound to a fixed path and declared type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorSpec {
    pub identifier: String,
    pub path: Path,
    pub value_type: ValueType,
}

/// The converted result of evaluating an accessor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AccessedValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<AccessedValue>),
}

/// Short name of a value's JSON tag, used in error messages
pub fn value_tag(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_segment_as_index() {
        assert_eq!(PathSegment::Index(3).as_index(), Some(3));
        assert_eq!(PathSegment::key("12").as_index(), Some(12));
        assert_eq!(PathSegment::key("-1").as_index(), None);
        assert_eq!(PathSegment::key("+1").as_index(), None);
        assert_eq!(PathSegment::key("").as_index(), None);
        assert_eq!(PathSegment::Each.as_index(), None);
        assert_eq!(PathSegment::key("99999999999999999999").as_index(), Some(usize::MAX));
    }

    #[test]
    fn test_display_path() {
        let path = vec![PathSegment::key("d"), PathSegment::Index(0), PathSegment::key("e")];
        assert_eq!(display_path(&path), "d.0.e");
        assert_eq!(display_path(&[]), "$");
    }

    #[test]
    fn test_value_type_rust_type() {
        assert_eq!(ValueType::Number.rust_type(), "f64");
        assert_eq!(ValueType::ListOf(ScalarType::String).rust_type(), "Vec<String>");
        assert_eq!(ValueType::ListOf(ScalarType::Boolean).to_string(), "list of boolean");
    }

    #[test]
    fn test_spec_serializes() {
        let spec = AccessorSpec {
            identifier: "a_0".to_string(),
            path: vec![PathSegment::key("a"), PathSegment::Index(0)],
            value_type: ValueType::ListOf(ScalarType::Number),
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            value,
            json!({
                "identifier": "a_0",
                "path": [{"key": "a"}, {"index": 0}],
                "value_type": {"list_of": "number"}
            })
        );
        let back: AccessorSpec = serde_json::from_value(value).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_accessed_value_serializes_untagged() {
        let v = AccessedValue::List(vec![AccessedValue::Number(1.0), AccessedValue::Number(2.5)]);
        assert_eq!(serde_json::to_value(&v).unwrap(), json!([1.0, 2.5]));
    }
}
