//! Widening of native host values into [`Object`]s.
//!
//! The accepted host shapes form a closed list:
//!
//! | host type | object |
//! |---|---|
//! | `()`, `Option::<Box<dyn Native>>::None` | `Undefined` |
//! | `String`, `&'static str`, `Box<str>`, `Arc<str>` | `String` |
//! | `i64`, `isize` | `Int` |
//! | `bool` | `Bool` |
//! | `char`, `u8` | `Char` (`i32` is not treated as a code point and is rejected) |
//! | `f64` | `Float` |
//! | `Vec<u8>`, `Box<[u8]>` | `Bytes` |
//! | `io::Error`, `Box<dyn Error>`, `Box<dyn Error + Send + Sync>`, [`ConversionError`] | `Error` holding the message |
//! | `HashMap<String, Object>` | `Map` |
//! | `HashMap<String, Box<dyn Native>>` | `Map`, values widened |
//! | `Vec<Object>` | `Array` |
//! | `Vec<Box<dyn Native>>` | `Array`, elements widened |
//! | `serde_json::Value` | see [`json::from_json`]; nesting counts against the depth limit |
//! | `Box<dyn Native>`, `Some(Box<dyn Native>)` | the boxed value, at any number of layers |
//! | `Object` | itself |
//!
//! Anything else is rejected with [`ConversionError::UnsupportedType`].

use std::any::Any;
use std::collections::HashMap;
use std::error::Error;
use std::io;
use std::sync::Arc;

use log::{debug, trace};
use object_model::Object;

use crate::json;
use crate::{ConversionError, ConversionResult, Native, WidenOptions};

/// Lifts a host value into an [`Object`] using default options.
///
/// # Examples
///
/// ```
/// use conversion::{from_native, Native, Object};
///
/// assert_eq!(from_native(&5i64).unwrap(), Object::Int(5));
/// assert_eq!(from_native(&()).unwrap(), Object::Undefined);
///
/// let row: Vec<Box<dyn Native>> = vec![Box::new(1i64), Box::new("x"), Box::new(true)];
/// let obj = from_native(&row).unwrap();
/// assert_eq!(obj.to_string(), "[1, \"x\", true]");
///
/// assert!(from_native(&1u16).is_err());
/// ```
pub fn from_native(value: &dyn Native) -> ConversionResult<Object> {
    from_native_with(value, &WidenOptions::default())
}

/// Lifts a host value into an [`Object`] with explicit options.
///
/// Fails on the first unsupported value found at any depth; a partially
/// built container is never returned.
pub fn from_native_with(value: &dyn Native, options: &WidenOptions) -> ConversionResult<Object> {
    widen(value, options.max_depth, options)
}

/// Like [`from_native`], treating `None` as an absent value.
///
/// ```
/// use conversion::{from_option, Object};
///
/// assert_eq!(from_option(None).unwrap(), Object::Undefined);
/// assert_eq!(from_option(Some(&'x')).unwrap(), Object::Char('x'));
/// ```
pub fn from_option(value: Option<&dyn Native>) -> ConversionResult<Object> {
    match value {
        Some(value) => from_native(value),
        None => Ok(Object::Undefined),
    }
}

fn widen(value: &dyn Native, remaining: usize, options: &WidenOptions) -> ConversionResult<Object> {
    let value = match unbox(value) {
        Some(value) => value,
        None => return Ok(Object::Undefined),
    };
    let any = value.as_any();

    if let Some(obj) = any.downcast_ref::<Object>() {
        return Ok(obj.clone());
    }
    if let Some(obj) = widen_scalar(any) {
        return Ok(obj);
    }
    if let Some(message) = error_message(any) {
        return Ok(Object::error(message));
    }
    if let Some(doc) = any.downcast_ref::<serde_json::Value>() {
        return json::from_json_bounded(doc, remaining, options);
    }

    if let Some(entries) = any.downcast_ref::<HashMap<String, Object>>() {
        return Ok(Object::map(entries.clone()));
    }
    if let Some(items) = any.downcast_ref::<Vec<Object>>() {
        return Ok(Object::array(items.clone()));
    }

    if let Some(entries) = any.downcast_ref::<HashMap<String, Box<dyn Native>>>() {
        let remaining = descend(remaining, options)?;
        trace!("widening map with {} entries", entries.len());
        let mut map = HashMap::with_capacity(entries.len());
        for (key, entry) in entries {
            map.insert(key.clone(), widen(&**entry, remaining, options)?);
        }
        return Ok(Object::map(map));
    }
    if let Some(items) = any.downcast_ref::<Vec<Box<dyn Native>>>() {
        let remaining = descend(remaining, options)?;
        trace!("widening sequence of {} elements", items.len());
        let elements = items
            .iter()
            .map(|item| widen(&**item, remaining, options))
            .collect::<ConversionResult<Vec<_>>>()?;
        return Ok(Object::array(elements));
    }

    let type_name = value.type_name();
    debug!("cannot widen host value of type {}", type_name);
    Err(ConversionError::UnsupportedType { type_name })
}

/// Strips `Box<dyn Native>` and `Option<Box<dyn Native>>` layers without
/// recursing. Returns `None` when a layer is an empty option.
fn unbox(mut value: &dyn Native) -> Option<&dyn Native> {
    loop {
        let any = value.as_any();
        if let Some(inner) = any.downcast_ref::<Box<dyn Native>>() {
            value = &**inner;
        } else if let Some(inner) = any.downcast_ref::<Option<Box<dyn Native>>>() {
            value = &**inner.as_ref()?;
        } else {
            return Some(value);
        }
    }
}

fn widen_scalar(any: &dyn Any) -> Option<Object> {
    if any.is::<()>() {
        return Some(Object::Undefined);
    }

    any.downcast_ref::<String>()
        .map(|s| Object::string(s.as_str()))
        .or_else(|| any.downcast_ref::<&'static str>().map(|s| Object::string(*s)))
        .or_else(|| any.downcast_ref::<Box<str>>().map(|s| Object::string(&**s)))
        .or_else(|| any.downcast_ref::<Arc<str>>().map(|s| Object::String(s.clone())))
        .or_else(|| any.downcast_ref::<i64>().map(|n| Object::Int(*n)))
        .or_else(|| any.downcast_ref::<isize>().map(|n| Object::Int(*n as i64)))
        .or_else(|| any.downcast_ref::<bool>().map(|b| Object::Bool(*b)))
        .or_else(|| any.downcast_ref::<char>().map(|c| Object::Char(*c)))
        .or_else(|| any.downcast_ref::<u8>().map(|b| Object::Char(char::from(*b))))
        .or_else(|| any.downcast_ref::<f64>().map(|n| Object::Float(*n)))
        .or_else(|| any.downcast_ref::<Vec<u8>>().map(|b| Object::bytes(b.as_slice())))
        .or_else(|| any.downcast_ref::<Box<[u8]>>().map(|b| Object::bytes(&**b)))
}

fn error_message(any: &dyn Any) -> Option<String> {
    any.downcast_ref::<io::Error>()
        .map(ToString::to_string)
        .or_else(|| any.downcast_ref::<Box<dyn Error>>().map(ToString::to_string))
        .or_else(|| {
            any.downcast_ref::<Box<dyn Error + Send + Sync>>()
                .map(ToString::to_string)
        })
        .or_else(|| any.downcast_ref::<ConversionError>().map(ToString::to_string))
}

pub(crate) fn descend(remaining: usize, options: &WidenOptions) -> ConversionResult<usize> {
    match remaining.checked_sub(1) {
        Some(next) => Ok(next),
        None => {
            debug!("host value nesting exceeds {} levels", options.max_depth);
            Err(ConversionError::DepthExceeded {
                limit: options.max_depth,
            })
        }
    }
}
