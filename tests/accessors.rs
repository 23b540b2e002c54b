use json_accessors::runtime::{extract, get};
use json_accessors::{
    generate_accessors, generate_accessors_with, generate_module, AccessError, AccessedValue,
    AccessorSet, GenerateError, GeneratorConfig, JsonCtx, PathSegment, ScalarType, ValueType,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn sample_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn key(k: &str) -> PathSegment {
    PathSegment::key(k)
}

#[test]
fn test_leaf_set_for_mixed_document() {
    let file = sample_file(r#"{"a":{"b":1, "c":[1,2]}, "d":[{"e":"x"},{"e":"y"}]}"#);
    let specs = generate_accessors(file.path()).unwrap();

    let summary: Vec<(String, Vec<PathSegment>, ValueType)> = specs
        .into_iter()
        .map(|s| (s.identifier, s.path, s.value_type))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("a_b".to_string(), vec![key("a"), key("b")], ValueType::Number),
            (
                "a_c".to_string(),
                vec![key("a"), key("c")],
                ValueType::ListOf(ScalarType::Number)
            ),
            (
                "d_0_e".to_string(),
                vec![key("d"), PathSegment::Index(0), key("e")],
                ValueType::String
            ),
            (
                "d_1_e".to_string(),
                vec![key("d"), PathSegment::Index(1), key("e")],
                ValueType::String
            ),
        ]
    );
}

#[test]
fn test_trade_details_accessors() {
    let file = sample_file(
        r#"{"tradeDetails":{"leg1Details":{"priceCurrency":"EUR","notional":1000000}}}"#,
    );
    let specs = generate_accessors(file.path()).unwrap();
    assert_eq!(specs.len(), 2);

    let ctx = JsonCtx::from_json_str(
        r#"{"tradeDetails":{"leg1Details":{"priceCurrency":"EUR","notional":1000000}}}"#,
    )
    .unwrap();

    let currency: String = get(&ctx, &specs[0].path).unwrap();
    let notional: f64 = get(&ctx, &specs[1].path).unwrap();
    assert_eq!(specs[0].identifier, "tradeDetails_leg1Details_priceCurrency");
    assert_eq!(specs[1].identifier, "tradeDetails_leg1Details_notional");
    assert_eq!(currency, "EUR");
    assert_eq!(notional, 1000000.0);
}

#[test]
fn test_first_element_typing_fails_lazily() {
    let set = AccessorSet::from_value(&json!({"xs": ["a", 1]}), &GeneratorConfig::default()).unwrap();
    let spec = set.get("xs").unwrap();
    assert_eq!(spec.value_type, ValueType::ListOf(ScalarType::String));

    let err = spec.evaluate(&JsonCtx::new(json!({"xs": ["a", 1]}))).unwrap_err();
    assert_eq!(
        err,
        AccessError::TypeMismatch {
            expected: "string".to_string(),
            actual: "number"
        }
    );
}

#[test]
fn test_runtime_structural_errors() {
    let doc = json!({"a": {"b": 1}, "d": [{"e": "x"}, {"e": "y"}]});

    assert_eq!(
        extract(&doc, &[key("a"), key("z")]).unwrap_err(),
        AccessError::MissingKey("z".to_string())
    );
    assert_eq!(
        extract(&doc, &[key("d"), key("5")]).unwrap_err(),
        AccessError::IndexOutOfBounds(5)
    );
    assert!(matches!(
        extract(&doc, &[key("a"), key("b"), key("c")]).unwrap_err(),
        AccessError::InvalidPath { .. }
    ));
}

#[test]
fn test_accessors_replayed_on_different_document() {
    let set = AccessorSet::from_value(
        &json!({"user": {"name": "a", "tags": ["x"], "active": true}}),
        &GeneratorConfig::default(),
    )
    .unwrap();
    let ctx = JsonCtx::new(json!({"user": {"name": "b", "tags": ["p", "q"], "active": false}}));

    let results: Vec<(&str, AccessedValue)> = set
        .evaluate_all(&ctx)
        .into_iter()
        .map(|(id, r)| (id, r.unwrap()))
        .collect();

    assert_eq!(
        results,
        vec![
            ("user_name", AccessedValue::String("b".to_string())),
            (
                "user_tags",
                AccessedValue::List(vec![
                    AccessedValue::String("p".to_string()),
                    AccessedValue::String("q".to_string())
                ])
            ),
            ("user_active", AccessedValue::Boolean(false)),
        ]
    );
}

#[test]
fn test_collectors_from_file() {
    let file = sample_file(r#"{"rows": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}"#);
    let config = GeneratorConfig::default().with_collectors(true);
    let specs = generate_accessors_with(file.path(), &config).unwrap();

    let ids: Vec<&str> = specs.iter().map(|s| s.identifier.as_str()).collect();
    assert_eq!(
        ids,
        vec!["rows_0_id", "rows_0_name", "rows_1_id", "rows_1_name", "rows_each_id", "rows_each_name"]
    );

    let ctx = JsonCtx::new(json!({"rows": [{"id": 5, "name": "z"}]}));
    let ids: Vec<f64> = get(&ctx, &specs[4].path).unwrap();
    assert_eq!(ids, vec![5.0]);
}

#[test]
fn test_generate_module_source() {
    let file = sample_file(r#"{"meta": {"page-size": 50, "next": "abc"}}"#);
    let source = generate_module(file.path(), &GeneratorConfig::default()).unwrap();

    assert!(source.contains("pub fn meta_page_size(ctx: &JsonCtx) -> Result<f64, AccessError>"));
    assert!(source.contains("PathSegment::Key(String::from(\"page-size\"))"));
    assert!(source.contains("pub fn meta_next(ctx: &JsonCtx) -> Result<String, AccessError>"));
    syn::parse_file(&source).unwrap();
}

#[test]
fn test_malformed_sample_produces_nothing() {
    let file = sample_file(r#"{"a": 1,, }"#);
    let err = generate_accessors(file.path()).unwrap_err();
    let GenerateError::Syntax(inner) = &err else {
        panic!("expected syntax error, got {err}");
    };
    assert!(err.to_string().contains(&inner.to_string()));
    assert_eq!(inner.line(), 1);
}

#[test]
fn test_invalid_utf8_sample_reports_parser_diagnostic() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{\"a\": \"\xff\"}").unwrap();

    let err = generate_accessors(file.path()).unwrap_err();
    let GenerateError::Syntax(inner) = &err else {
        panic!("expected syntax error, got {err}");
    };
    assert!(err.to_string().contains(&inner.to_string()));
    assert_eq!(inner.line(), 1);
}
