//! Widening configuration.

/// Default number of nested host containers widening descends into.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling [`from_native_with`](crate::from_native_with).
///
/// # Examples
///
/// ```
/// use conversion::{WidenOptions, DEFAULT_MAX_DEPTH};
///
/// assert_eq!(WidenOptions::default().max_depth, DEFAULT_MAX_DEPTH);
/// assert_eq!(WidenOptions::new().with_max_depth(4).max_depth, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidenOptions {
    /// How many levels of recursively widened containers are accepted.
    /// Containers that already hold `Object`s do not count.
    pub max_depth: usize,
}

impl Default for WidenOptions {
    fn default() -> Self {
        WidenOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl WidenOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
