//! Unit tests for Object construction, rendering and type names

use object_model::Object;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg(test)]
mod object_creation_tests {
    use super::*;

    #[test]
    fn test_object_undefined() {
        assert!(matches!(Object::Undefined, Object::Undefined));
    }

    #[test]
    fn test_object_int_extremes() {
        assert!(matches!(Object::Int(i64::MAX), Object::Int(n) if n == i64::MAX));
        assert!(matches!(Object::Int(i64::MIN), Object::Int(n) if n == i64::MIN));
    }

    #[test]
    fn test_object_string_constructor() {
        let obj = Object::string("hello");
        assert!(matches!(&obj, Object::String(s) if &**s == "hello"));
    }

    #[test]
    fn test_object_bytes_constructor() {
        let obj = Object::bytes(vec![0u8, 255]);
        assert!(matches!(&obj, Object::Bytes(b) if &**b == [0u8, 255]));
    }

    #[test]
    fn test_object_error_wraps_string() {
        let obj = Object::error("boom");
        match obj {
            Object::Error(inner) => assert_eq!(*inner, Object::string("boom")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_object_error_payload_is_string_for_owned_message() {
        let message = format!("code {}", 7);
        match Object::error(message) {
            Object::Error(inner) => {
                assert_eq!(inner.type_name(), "string");
                assert_eq!(inner.to_string(), "\"code 7\"");
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_object_from_impls() {
        assert_eq!(Object::from(true), Object::Bool(true));
        assert_eq!(Object::from(3i64), Object::Int(3));
        assert_eq!(Object::from(0.5f64), Object::Float(0.5));
        assert_eq!(Object::from('x'), Object::Char('x'));
        assert_eq!(Object::from("a"), Object::string("a"));
        assert_eq!(Object::from("a".to_string()), Object::string("a"));
        assert_eq!(Object::from(vec![1u8, 2]), Object::bytes(vec![1u8, 2]));
        assert_eq!(
            Object::from(vec![Object::Int(1)]),
            Object::array(vec![Object::Int(1)])
        );
    }

    #[test]
    fn test_object_clone_shares_payload() {
        let original = Object::array(vec![Object::Int(1), Object::Int(2)]);
        let copy = original.clone();
        match (&original, &copy) {
            (Object::Array(a), Object::Array(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod object_display_tests {
    use super::*;

    #[test]
    fn test_undefined_display() {
        assert_eq!(Object::Undefined.to_string(), "<undefined>");
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(Object::Bool(true).to_string(), "true");
        assert_eq!(Object::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_int_display() {
        assert_eq!(Object::Int(-100).to_string(), "-100");
        assert_eq!(Object::Int(0).to_string(), "0");
    }

    #[test]
    fn test_float_display() {
        assert_eq!(Object::Float(42.0).to_string(), "42");
        assert_eq!(Object::Float(12.5).to_string(), "12.5");
        assert_eq!(Object::Float(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn test_float_non_finite_display() {
        assert_eq!(Object::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Object::Float(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(Object::Float(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn test_char_display() {
        assert_eq!(Object::Char('é').to_string(), "é");
    }

    #[test]
    fn test_string_display_quotes() {
        assert_eq!(Object::string("hi").to_string(), "\"hi\"");
        assert_eq!(Object::string("a\nb").to_string(), "\"a\\nb\"");
    }

    #[test]
    fn test_bytes_display() {
        assert_eq!(Object::bytes(b"abc".to_vec()).to_string(), "abc");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Object::error("oops").to_string(), "error: \"oops\"");
    }

    #[test]
    fn test_array_display() {
        let arr = Object::array(vec![Object::Int(1), Object::string("x"), Object::Bool(true)]);
        assert_eq!(arr.to_string(), "[1, \"x\", true]");
        assert_eq!(Object::array(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_map_display_sorted() {
        let mut entries = HashMap::new();
        entries.insert("z".to_string(), Object::Int(26));
        entries.insert("a".to_string(), Object::Int(1));
        entries.insert("m".to_string(), Object::Undefined);
        assert_eq!(
            Object::map(entries).to_string(),
            "{a: 1, m: <undefined>, z: 26}"
        );
        assert_eq!(Object::map(HashMap::new()).to_string(), "{}");
    }
}

#[cfg(test)]
mod object_type_name_tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Object::Undefined.type_name(), "undefined");
        assert_eq!(Object::Bool(true).type_name(), "bool");
        assert_eq!(Object::Int(1).type_name(), "int");
        assert_eq!(Object::Float(1.0).type_name(), "float");
        assert_eq!(Object::Char('a').type_name(), "char");
        assert_eq!(Object::string("").type_name(), "string");
        assert_eq!(Object::bytes(Vec::<u8>::new()).type_name(), "bytes");
        assert_eq!(Object::error("e").type_name(), "error");
        assert_eq!(Object::array(vec![]).type_name(), "array");
        assert_eq!(Object::map(HashMap::new()).type_name(), "map");
    }
}
