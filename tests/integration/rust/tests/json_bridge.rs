//! JSON Bridge Integration Tests
//!
//! Hosts often hand configuration or request payloads over as JSON. These
//! tests parse text with serde_json, widen it and narrow individual fields.

use conversion::{from_native, json, narrow, Object};

/// Test: a parsed document widens and its fields narrow
#[test]
fn test_parsed_document_fields() {
    let doc: serde_json::Value =
        serde_json::from_str(r#"{"port": 8080, "host": "localhost", "debug": false, "ratio": 0.5}"#)
            .unwrap();
    let obj = from_native(&doc).unwrap();

    let Object::Map(fields) = &obj else {
        panic!("expected map, got {:?}", obj);
    };
    assert_eq!(narrow::to_int(&fields["port"]), Some(8080));
    assert_eq!(narrow::to_string(&fields["host"]).as_deref(), Some("localhost"));
    assert_eq!(narrow::to_bool(&fields["debug"]), Some(false));
    assert_eq!(narrow::to_float64(&fields["ratio"]), Some(0.5));
}

/// Test: numeric strings inside JSON coerce like any other string
#[test]
fn test_numeric_strings_coerce() {
    let doc = serde_json::json!(["42", "4.2", ""]);
    let Object::Array(items) = json::from_json(&doc) else {
        panic!("expected array");
    };
    assert_eq!(narrow::to_int64(&items[0]), Some(42));
    assert_eq!(narrow::to_int64(&items[1]), None);
    assert_eq!(narrow::to_float64(&items[1]), Some(4.2));
    assert_eq!(narrow::to_int64(&items[2]), None);
}

/// Test: Objects serialize back to text
#[test]
fn test_object_serializes_to_text() {
    let obj = Object::array(vec![Object::Int(1), Object::string("two"), Object::Undefined]);
    let text = serde_json::to_string(&json::to_json(&obj)).unwrap();
    assert_eq!(text, r#"[1,"two",null]"#);
}
