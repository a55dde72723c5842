//! Narrowing conversions from [`Object`] to native values.
//!
//! Every function here is best-effort: it returns `Some` when the variant
//! has a defined value of the target type and `None` otherwise. A `None` is
//! an ordinary outcome in a dynamically typed program, so callers usually
//! fall back to a default or raise a script-level error of their own.
//!
//! Numeric narrowing truncates toward zero and never rounds. String parsing
//! must consume the whole input.
//!
//! | variant     | string | int/int64 | float64 | bool | char | bytes |
//! |-------------|--------|-----------|---------|------|------|-------|
//! | `Undefined` | -      | -         | -       | yes  | -    | -     |
//! | `Bool`      | yes    | 1 / 0     | -       | yes  | -    | -     |
//! | `Int`       | yes    | yes       | yes     | yes  | yes  | -     |
//! | `Float`     | yes    | truncated | yes     | yes  | -    | -     |
//! | `Char`      | yes    | code point| -       | yes  | yes  | -     |
//! | `String`    | verbatim | parsed  | parsed  | yes  | -    | UTF-8 |
//! | `Bytes`     | yes    | -         | -       | yes  | -    | yes   |
//! | `Error`     | yes    | -         | -       | yes  | -    | -     |
//! | `Array`     | yes    | -         | -       | yes  | -    | -     |
//! | `Map`       | yes    | -         | -       | yes  | -    | -     |

use object_model::Object;

/// Converts `obj` to text.
///
/// A `String` yields its own text without quoting; other defined values
/// yield their canonical rendering. `Undefined` has no string form.
///
/// # Examples
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert_eq!(narrow::to_string(&Object::string("hi")), Some("hi".to_string()));
/// assert_eq!(narrow::to_string(&Object::Int(-3)), Some("-3".to_string()));
/// assert_eq!(narrow::to_string(&Object::Undefined), None);
/// ```
pub fn to_string(obj: &Object) -> Option<String> {
    match obj {
        Object::Undefined => None,
        Object::String(s) => Some(s.to_string()),
        Object::Bool(_)
        | Object::Int(_)
        | Object::Float(_)
        | Object::Char(_)
        | Object::Bytes(_)
        | Object::Error(_)
        | Object::Array(_)
        | Object::Map(_) => Some(obj.to_string()),
    }
}

/// Converts `obj` to a machine-width integer.
///
/// Follows [`to_int64`], then truncates to `isize`.
pub fn to_int(obj: &Object) -> Option<isize> {
    to_int64(obj).map(|n| n as isize)
}

/// Converts `obj` to a 64-bit integer.
///
/// - `Int` passes through
/// - `Float` truncates toward zero, saturating at the `i64` bounds (NaN is 0)
/// - `Char` yields its code point
/// - `Bool` yields 1 or 0
/// - `String` must hold a complete base-10 integer
///
/// # Examples
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert_eq!(narrow::to_int64(&Object::Float(-2.9)), Some(-2));
/// assert_eq!(narrow::to_int64(&Object::Char('A')), Some(65));
/// assert_eq!(narrow::to_int64(&Object::string("-17")), Some(-17));
/// assert_eq!(narrow::to_int64(&Object::string("12.5")), None);
/// assert_eq!(narrow::to_int64(&Object::string("")), None);
/// ```
pub fn to_int64(obj: &Object) -> Option<i64> {
    match obj {
        Object::Int(n) => Some(*n),
        Object::Float(n) => Some(*n as i64),
        Object::Char(c) => Some(i64::from(u32::from(*c))),
        Object::Bool(b) => Some(i64::from(*b)),
        Object::String(s) => s.parse::<i64>().ok(),
        Object::Undefined
        | Object::Bytes(_)
        | Object::Error(_)
        | Object::Array(_)
        | Object::Map(_) => None,
    }
}

/// Converts `obj` to a 64-bit float.
///
/// `Int` widens, `Float` passes through and `String` must hold a complete
/// decimal floating-point literal. Literals too large for an `f64` fail;
/// infinity has to be spelled out (`inf`, `infinity`, either case and sign).
///
/// # Examples
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert_eq!(narrow::to_float64(&Object::string("12.5")), Some(12.5));
/// assert_eq!(narrow::to_float64(&Object::Int(3)), Some(3.0));
/// assert_eq!(narrow::to_float64(&Object::string("1e400")), None);
/// assert_eq!(narrow::to_float64(&Object::Bool(true)), None);
/// ```
pub fn to_float64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Int(n) => Some(*n as f64),
        Object::Float(n) => Some(*n),
        Object::String(s) => parse_float(s),
        Object::Undefined
        | Object::Bool(_)
        | Object::Char(_)
        | Object::Bytes(_)
        | Object::Error(_)
        | Object::Array(_)
        | Object::Map(_) => None,
    }
}

fn parse_float(s: &str) -> Option<f64> {
    let n = s.parse::<f64>().ok()?;
    if n.is_infinite() {
        let spelled = s.trim_start_matches(['+', '-']);
        if !spelled.eq_ignore_ascii_case("inf") && !spelled.eq_ignore_ascii_case("infinity") {
            return None;
        }
    }
    Some(n)
}

/// Converts `obj` to a boolean.
///
/// Never fails: the result is the negation of [`Object::is_falsy`]. The
/// `Option` keeps the signature uniform with the rest of the family; see
/// [`to_bool_total`] for the unwrapped form.
pub fn to_bool(obj: &Object) -> Option<bool> {
    Some(to_bool_total(obj))
}

/// Converts `obj` to a boolean without the `Option` wrapper.
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert!(narrow::to_bool_total(&Object::string("0")));
/// assert!(!narrow::to_bool_total(&Object::Undefined));
/// ```
pub fn to_bool_total(obj: &Object) -> bool {
    !obj.is_falsy()
}

/// Converts `obj` to a single character.
///
/// Only `Int` (when it is a valid Unicode scalar value) and `Char` convert.
/// Strings never do, not even one-character strings.
///
/// # Examples
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert_eq!(narrow::to_char(&Object::Int(97)), Some('a'));
/// assert_eq!(narrow::to_char(&Object::Int(0xD800)), None);
/// assert_eq!(narrow::to_char(&Object::string("a")), None);
/// ```
pub fn to_char(obj: &Object) -> Option<char> {
    match obj {
        Object::Int(n) => u32::try_from(*n).ok().and_then(char::from_u32),
        Object::Char(c) => Some(*c),
        Object::Undefined
        | Object::Bool(_)
        | Object::Float(_)
        | Object::String(_)
        | Object::Bytes(_)
        | Object::Error(_)
        | Object::Array(_)
        | Object::Map(_) => None,
    }
}

/// Borrows the raw bytes of `obj`.
///
/// `Bytes` yields its contents and `String` its UTF-8 encoding.
///
/// ```
/// use conversion::{narrow, Object};
///
/// assert_eq!(narrow::to_bytes(&Object::string("hé")), Some("hé".as_bytes()));
/// assert_eq!(narrow::to_bytes(&Object::Int(1)), None);
/// ```
pub fn to_bytes(obj: &Object) -> Option<&[u8]> {
    match obj {
        Object::Bytes(b) => Some(&**b),
        Object::String(s) => Some(s.as_bytes()),
        Object::Undefined
        | Object::Bool(_)
        | Object::Int(_)
        | Object::Float(_)
        | Object::Char(_)
        | Object::Error(_)
        | Object::Array(_)
        | Object::Map(_) => None,
    }
}
