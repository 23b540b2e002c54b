//! Kind classification of JSON values

use crate::types::JsonKind;
use serde_json::Value;

impl JsonKind {
    /// Classify a value. Arrays look at their first element only.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => JsonKind::String,
            Value::Number(_) => JsonKind::Number,
            Value::Bool(_) => JsonKind::Bool,
            Value::Object(_) => JsonKind::Object,
            Value::Array(arr) => match arr.first() {
                Some(first) => JsonKind::ArrayOf(Box::new(JsonKind::of(first))),
                None => JsonKind::Other,
            },
            Value::Null => JsonKind::Other,
        }
    }
}

/// Free-function form of [`JsonKind::of`]
pub fn classify(value: &Value) -> JsonKind {
    JsonKind::of(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert_eq!(classify(&json!("x")), JsonKind::String);
        assert_eq!(classify(&json!(1)), JsonKind::Number);
        assert_eq!(classify(&json!(1.5)), JsonKind::Number);
        assert_eq!(classify(&json!(false)), JsonKind::Bool);
        assert_eq!(classify(&json!({})), JsonKind::Object);
        assert_eq!(classify(&json!(null)), JsonKind::Other);
    }

    #[test]
    fn test_empty_array_is_other() {
        assert_eq!(classify(&json!([])), JsonKind::Other);
    }

    #[test]
    fn test_array_uses_first_element_only() {
        assert_eq!(
            classify(&json!(["a", 1, true])),
            JsonKind::ArrayOf(Box::new(JsonKind::String))
        );
        assert_eq!(
            classify(&json!([null, "a"])),
            JsonKind::ArrayOf(Box::new(JsonKind::Other))
        );
    }

    #[test]
    fn test_nested_arrays() {
        assert_eq!(
            classify(&json!([[{"a": 1}]])),
            JsonKind::ArrayOf(Box::new(JsonKind::ArrayOf(Box::new(JsonKind::Object))))
        );
        assert_eq!(
            classify(&json!([[]])),
            JsonKind::ArrayOf(Box::new(JsonKind::Other))
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = r#"{"a": [1, "b"], "c": {"d": null}}"#;
        let first: Value = serde_json::from_str(text).unwrap();
        let second: Value = serde_json::from_str(text).unwrap();
        assert_eq!(classify(&first), classify(&second));
        assert_eq!(classify(&first["a"]), classify(&first["a"]));
    }
}
