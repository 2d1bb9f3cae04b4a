//! Error types for collection queries.

use thiserror::Error;

/// Errors returned by collection queries.
///
/// Most queries report a missing result as `None` or an empty `Vec`.
/// Errors are reserved for requests with no meaningful answer at all.
///
/// # Examples
///
/// ```rust
/// use orderly::prelude::*;
///
/// let empty: OrderedSet<i32> = OrderedSet::new();
/// let error = empty.try_reduce(|sum, value, _| sum + value).unwrap_err();
/// assert_eq!(error, CollectionError::EmptyReduce);
/// assert_eq!(
///     error.to_string(),
///     "cannot reduce an empty collection without an initial value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// `try_reduce` was called on an empty collection.
    #[error("cannot reduce an empty collection without an initial value")]
    EmptyReduce,
}
