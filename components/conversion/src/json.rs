//! Bridging between [`Object`]s and `serde_json` documents.

use std::collections::HashMap;

use object_model::Object;
use serde_json::{Map, Number, Value};

use crate::widen::descend;
use crate::{ConversionResult, WidenOptions};

/// Convert a JSON document into an [`Object`].
///
/// Numbers become `Int` when they fit in an `i64` and `Float` otherwise.
/// `null` becomes `Undefined`. The conversion is unbounded; documents that
/// come from the host go through [`from_native`](crate::from_native), which
/// applies the configured nesting limit.
///
/// # Examples
///
/// ```
/// use conversion::{json, Object};
///
/// let doc = serde_json::json!({"n": 1, "xs": [1.5, null]});
/// let obj = json::from_json(&doc);
/// assert_eq!(obj.to_string(), "{n: 1, xs: [1.5, <undefined>]}");
/// ```
pub fn from_json(value: &Value) -> Object {
    match value {
        Value::Null => Object::Undefined,
        Value::Bool(b) => Object::Bool(*b),
        Value::Number(n) => n
            .as_i64()
            .map(Object::Int)
            .or_else(|| n.as_f64().map(Object::Float))
            .unwrap_or(Object::Undefined),
        Value::String(s) => Object::string(s.as_str()),
        Value::Array(items) => Object::array(items.iter().map(from_json).collect()),
        Value::Object(entries) => {
            let map: HashMap<String, Object> = entries
                .iter()
                .map(|(key, entry)| (key.clone(), from_json(entry)))
                .collect();
            Object::map(map)
        }
    }
}

/// Like [`from_json`], charging one level of `remaining` per array or object.
pub(crate) fn from_json_bounded(
    value: &Value,
    remaining: usize,
    options: &WidenOptions,
) -> ConversionResult<Object> {
    match value {
        Value::Array(items) => {
            let remaining = descend(remaining, options)?;
            let elements = items
                .iter()
                .map(|item| from_json_bounded(item, remaining, options))
                .collect::<ConversionResult<Vec<_>>>()?;
            Ok(Object::array(elements))
        }
        Value::Object(entries) => {
            let remaining = descend(remaining, options)?;
            let mut map = HashMap::with_capacity(entries.len());
            for (key, entry) in entries {
                map.insert(key.clone(), from_json_bounded(entry, remaining, options)?);
            }
            Ok(Object::map(map))
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(from_json(value)),
    }
}

/// Convert an [`Object`] into a JSON document.
///
/// - `Undefined` → `null`
/// - non-finite `Float` → `null`
/// - `Char` → one-character string
/// - `Bytes` → array of byte values
/// - `Error` → `{"error": <payload>}`
///
/// ```
/// use conversion::{json, Object};
///
/// let obj = Object::array(vec![Object::Char('a'), Object::Float(f64::NAN)]);
/// assert_eq!(json::to_json(&obj), serde_json::json!(["a", null]));
/// ```
pub fn to_json(obj: &Object) -> Value {
    match obj {
        Object::Undefined => Value::Null,
        Object::Bool(b) => Value::Bool(*b),
        Object::Int(n) => Value::from(*n),
        Object::Float(n) => Number::from_f64(*n).map(Value::Number).unwrap_or(Value::Null),
        Object::Char(c) => Value::String(c.to_string()),
        Object::String(s) => Value::String(s.to_string()),
        Object::Bytes(b) => Value::Array(b.iter().map(|byte| Value::from(*byte)).collect()),
        Object::Error(inner) => {
            let mut map = Map::new();
            map.insert("error".to_string(), to_json(inner));
            Value::Object(map)
        }
        Object::Array(items) => Value::Array(items.iter().map(to_json).collect()),
        Object::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), to_json(entry)))
                .collect(),
        ),
    }
}
