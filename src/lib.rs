//! # orderly
//!
//! Insertion-ordered collections with a functional query surface.
//!
//! ## Overview
//!
//! The standard library maps and sets either forget insertion order
//! (`HashMap`, `HashSet`) or replace it with key order (`BTreeMap`,
//! `BTreeSet`). Application code that wants "the first three entries",
//! "a random sample of five keys" or "every value matching a predicate"
//! ends up copying into a `Vec` each time. This crate provides:
//!
//! - **`OrderedMap`**: an insertion-ordered key/value map
//! - **`OrderedSet`**: an insertion-ordered unique-value set
//! - **`Collection`**: the shared query trait (positional access, predicates,
//!   folds, slicing and sampling without replacement)
//!
//! ## Feature Flags
//!
//! - `serde`: serialize containers as the sequence of their values
//! - `fxhash`: `FxOrderedMap`/`FxOrderedSet` aliases backed by `rustc-hash`
//! - `ahash`: `AHashOrderedMap`/`AHashOrderedSet` aliases backed by `ahash`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
//!
//! assert_eq!(map.first_many(2), vec![1, 2]);
//! assert_eq!(map.last_key(), Some(&"c"));
//! assert_eq!(map.at(-1), Some(&3));
//! assert_eq!(map.filter(|value, _| *value > 1).array(), vec![2, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the [`Collection`](crate::collection::Collection)
/// trait that carries most of their query methods, and the error type.
///
/// # Usage
///
/// ```rust
/// use orderly::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collection::*;
}

pub mod collection;
