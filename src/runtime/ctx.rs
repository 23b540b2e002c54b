//! Runtime document context

use serde_json::Value;
use std::io::Read;

/// Owns the document accessors are evaluated against.
///
/// The wrapped value is never mutated, so one context can be shared across
/// threads and queried by any number of accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonCtx {
    value: Value,
}

impl JsonCtx {
    pub fn new(value: Value) -> Self {
        JsonCtx { value }
    }

    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text).map(Self::new)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader).map(Self::new)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl From<Value> for JsonCtx {
    fn from(value: Value) -> Self {
        JsonCtx::new(value)
    }
}
