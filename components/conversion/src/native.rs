//! Host values of unknown dynamic type.

use std::any::{self, Any};

/// A native host value handed to the runtime.
///
/// Every `'static` type implements this trait, so any host value can be
/// passed as `&dyn Native`. Heterogeneous host containers hold
/// `Box<dyn Native>`.
///
/// # Examples
///
/// ```
/// use conversion::Native;
///
/// let values: Vec<Box<dyn Native>> = vec![Box::new(1i64), Box::new("x")];
/// assert_eq!((*values[0]).type_name(), "i64");
/// assert!((*values[1]).as_any().is::<&str>());
/// ```
pub trait Native: Any {
    /// Returns `self` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type, used in error reports.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Native for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}
