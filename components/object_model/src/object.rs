//! The runtime's universal dynamic value.
//!
//! Every value a script can observe is an [`Object`]. The variant set is
//! closed: code that inspects objects matches on it exhaustively, so a new
//! variant shows up as a compile error everywhere it needs a decision.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Represents any script value.
///
/// Scalars are stored inline. Text, bytes and containers are shared through
/// [`Arc`], which makes cloning cheap and lets the same value be read from
/// several threads. Objects are never mutated once built.
///
/// # Examples
///
/// ```
/// use object_model::Object;
///
/// let undefined = Object::Undefined;
/// let number = Object::Int(7);
/// let items = Object::array(vec![Object::Int(1), Object::string("x")]);
///
/// assert!(undefined.is_falsy());
/// assert!(!number.is_falsy());
/// assert_eq!(items.to_string(), "[1, \"x\"]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// Absence of a value
    Undefined,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// IEEE 754 double-precision floating point
    Float(f64),
    /// Single Unicode code point
    Char(char),
    /// Immutable text
    String(Arc<str>),
    /// Raw byte sequence
    Bytes(Arc<[u8]>),
    /// Error value wrapping its payload.
    ///
    /// Build it with [`Object::error`], which always wraps a `String`;
    /// conversions and rendering assume that payload shape.
    Error(Arc<Object>),
    /// Ordered sequence of objects
    Array(Arc<Vec<Object>>),
    /// String-keyed mapping; iteration order carries no meaning
    Map(Arc<HashMap<String, Object>>),
}

impl Object {
    /// Creates a `String` object.
    pub fn string(value: impl Into<Arc<str>>) -> Self {
        Object::String(value.into())
    }

    /// Creates a `Bytes` object.
    pub fn bytes(value: impl Into<Arc<[u8]>>) -> Self {
        Object::Bytes(value.into())
    }

    /// Creates an `Error` object wrapping `message` as a `String`.
    ///
    /// ```
    /// use object_model::Object;
    ///
    /// let err = Object::error("file not found");
    /// assert_eq!(err.to_string(), "error: \"file not found\"");
    /// ```
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Object::Error(Arc::new(Object::String(message.into())))
    }

    /// Creates an `Array` object.
    pub fn array(elements: Vec<Object>) -> Self {
        Object::Array(Arc::new(elements))
    }

    /// Creates a `Map` object.
    pub fn map(entries: HashMap<String, Object>) -> Self {
        Object::Map(Arc::new(entries))
    }

    /// Returns whether this value counts as false in a boolean context.
    ///
    /// Falsy values:
    /// - `Undefined`
    /// - `Bool(false)`
    /// - `Int(0)`
    /// - `Float` zero (either sign) or NaN
    /// - `Char('\0')`
    /// - empty `String`, `Bytes`, `Array` and `Map`
    /// - every `Error`
    ///
    /// # Examples
    ///
    /// ```
    /// use object_model::Object;
    ///
    /// assert!(Object::Undefined.is_falsy());
    /// assert!(Object::Int(0).is_falsy());
    /// assert!(Object::string("").is_falsy());
    /// assert!(Object::error("boom").is_falsy());
    ///
    /// assert!(!Object::Int(-1).is_falsy());
    /// assert!(!Object::string("0").is_falsy());
    /// ```
    pub fn is_falsy(&self) -> bool {
        match self {
            Object::Undefined => true,
            Object::Bool(b) => !*b,
            Object::Int(n) => *n == 0,
            Object::Float(n) => *n == 0.0 || n.is_nan(),
            Object::Char(c) => *c == '\0',
            Object::String(s) => s.is_empty(),
            Object::Bytes(b) => b.is_empty(),
            Object::Error(_) => true,
            Object::Array(items) => items.is_empty(),
            Object::Map(entries) => entries.is_empty(),
        }
    }

    /// Negation of [`Object::is_falsy`].
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    /// Returns the script-visible type name of this value.
    ///
    /// ```
    /// use object_model::Object;
    ///
    /// assert_eq!(Object::Undefined.type_name(), "undefined");
    /// assert_eq!(Object::Float(1.5).type_name(), "float");
    /// assert_eq!(Object::bytes(vec![1u8]).type_name(), "bytes");
    /// ```
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Undefined => "undefined",
            Object::Bool(_) => "bool",
            Object::Int(_) => "int",
            Object::Float(_) => "float",
            Object::Char(_) => "char",
            Object::String(_) => "string",
            Object::Bytes(_) => "bytes",
            Object::Error(_) => "error",
            Object::Array(_) => "array",
            Object::Map(_) => "map",
        }
    }
}

/// Canonical string rendering.
///
/// - `Undefined` → `<undefined>`
/// - `Float` → shortest decimal form without exponent; `NaN`, `+Inf`, `-Inf`
/// - `String` → quoted and escaped
/// - `Bytes` → the bytes read as UTF-8 (invalid sequences replaced)
/// - `Error` → `error: ` followed by the wrapped value
/// - `Map` → entries sorted by key
///
/// # Examples
///
/// ```
/// use object_model::Object;
///
/// assert_eq!(Object::Undefined.to_string(), "<undefined>");
/// assert_eq!(Object::Float(2.0).to_string(), "2");
/// assert_eq!(Object::Float(f64::INFINITY).to_string(), "+Inf");
/// assert_eq!(Object::Char('z').to_string(), "z");
/// ```
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Undefined => write!(f, "<undefined>"),
            Object::Bool(b) => write!(f, "{}", b),
            Object::Int(n) => write!(f, "{}", n),
            Object::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "+Inf")
                    } else {
                        write!(f, "-Inf")
                    }
                } else {
                    write!(f, "{}", n)
                }
            }
            Object::Char(c) => write!(f, "{}", c),
            Object::String(s) => write!(f, "{:?}", s),
            Object::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Object::Error(inner) => write!(f, "error: {}", inner),
            Object::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Object::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, entries[key])?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Bool(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Int(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Float(value)
    }
}

impl From<char> for Object {
    fn from(value: char) -> Self {
        Object::Char(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::string(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::string(value)
    }
}

impl From<Vec<u8>> for Object {
    fn from(value: Vec<u8>) -> Self {
        Object::bytes(value)
    }
}

impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::array(value)
    }
}

impl From<HashMap<String, Object>> for Object {
    fn from(value: HashMap<String, Object>) -> Self {
        Object::map(value)
    }
}
