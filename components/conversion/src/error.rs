//! Errors raised while widening host values.

use thiserror::Error;

/// Failure to lift a host value into an [`Object`](object_model::Object).
///
/// Only widening produces this error. Narrowing failures are reported as
/// `None` by the functions in [`narrow`](crate::narrow).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The host value's type is not one of the supported shapes
    #[error("unsupported value type: {type_name}")]
    UnsupportedType {
        /// Concrete Rust type of the rejected value
        type_name: &'static str,
    },

    /// Host containers are nested deeper than the configured limit
    #[error("value nesting exceeds the limit of {limit} levels")]
    DepthExceeded {
        /// The limit that was in effect
        limit: usize,
    },
}

/// Result type for widening operations
pub type ConversionResult<T> = Result<T, ConversionError>;
