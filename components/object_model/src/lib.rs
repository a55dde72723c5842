//! Dynamic values of the script runtime.
//!
//! This crate defines [`Object`], the universal value every script
//! expression evaluates to, together with the two capabilities the rest of
//! the runtime relies on: a canonical string rendering ([`std::fmt::Display`])
//! and a truthiness predicate ([`Object::is_falsy`]).
//!
//! # Examples
//!
//! ```
//! use object_model::Object;
//!
//! let answer = Object::Int(42);
//! assert!(answer.is_truthy());
//! assert_eq!(answer.type_name(), "int");
//! assert_eq!(answer.to_string(), "42");
//!
//! let greeting = Object::string("hi");
//! assert_eq!(greeting.to_string(), "\"hi\"");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod object;

pub use object::Object;
