//! Conversions between script [`Object`]s and native host values.
//!
//! Two independent families live here:
//!
//! - [`narrow`] reduces an [`Object`] to a native scalar or byte slice. Each
//!   function returns `Option<T>`; `None` means the variant has no meaningful
//!   value of that type, which callers handle with a fallback.
//! - [`from_native`] lifts a host value of unknown type into an [`Object`],
//!   recursing into maps and sequences. Unsupported host types are reported
//!   through [`ConversionError`].
//!
//! [`json`] bridges `serde_json` documents in both directions.
//!
//! # Examples
//!
//! ```
//! use conversion::{from_native, narrow, Object};
//!
//! let obj = from_native(&"12".to_string()).unwrap();
//! assert_eq!(obj, Object::string("12"));
//! assert_eq!(narrow::to_int64(&obj), Some(12));
//! assert_eq!(narrow::to_char(&obj), None);
//!
//! let err = from_native(&std::sync::mpsc::channel::<i64>().0).unwrap_err();
//! assert!(err.to_string().starts_with("unsupported value type: "));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
pub mod json;
mod native;
pub mod narrow;
mod options;
mod widen;

pub use error::{ConversionError, ConversionResult};
pub use native::Native;
pub use object_model::Object;
pub use options::{WidenOptions, DEFAULT_MAX_DEPTH};
pub use widen::{from_native, from_native_with, from_option};
