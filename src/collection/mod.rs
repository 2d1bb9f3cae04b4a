//! Insertion-ordered containers.
//!
//! This module provides two containers that remember the order in which
//! entries were first added:
//!
//! - [`OrderedMap`]: key/value map
//! - [`OrderedSet`]: unique-value set
//!
//! Both implement [`Collection`], which supplies positional access
//! ([`at`](Collection::at), [`first_many`](Collection::first_many)),
//! predicates ([`every`](Collection::every), [`find`](Collection::find)),
//! folds ([`reduce`](Collection::reduce)) and sampling without replacement
//! ([`random_many`](Collection::random_many)).
//!
//! # Order
//!
//! Order is insertion order of first appearance. Re-adding a present key or
//! element never moves it. Removal closes the gap without reordering.
//!
//! # Examples
//!
//! ## `OrderedMap`
//!
//! ```rust
//! use orderly::collection::{Collection, OrderedMap};
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("carol", 71);
//! scores.insert("alice", 93);
//! scores.insert("bob", 88);
//!
//! assert_eq!(scores.first_key(), Some(&"carol"));
//! assert_eq!(scores.find_key(|score, _| *score > 90), Some(&"alice"));
//! assert_eq!(scores.reduce(0, |total, score, _| total + score), 252);
//! ```
//!
//! ## `OrderedSet`
//!
//! ```rust
//! use orderly::collection::{Collection, OrderedSet};
//!
//! let tags: OrderedSet<&str> = ["rust", "async", "rust", "io"].into_iter().collect();
//!
//! assert_eq!(tags.array(), vec!["rust", "async", "io"]);
//! assert_eq!(tags.last_many(2), vec!["async", "io"]);
//! ```

mod error;
mod ordered_map;
mod ordered_set;
mod position;
mod query;
mod sample;

pub use error::CollectionError;
pub use ordered_map::OrderedMap;
pub use ordered_set::OrderedSet;
pub use position::Position;
pub use query::Collection;

// =============================================================================
// Fast Hasher Aliases
// =============================================================================

/// [`OrderedMap`] hashed with `rustc-hash`'s `FxHasher`.
///
/// Not resistant to collision attacks; prefer the default hasher for
/// untrusted keys.
#[cfg(feature = "fxhash")]
pub type FxOrderedMap<K, V> = OrderedMap<K, V, rustc_hash::FxBuildHasher>;

/// [`OrderedSet`] hashed with `rustc-hash`'s `FxHasher`.
#[cfg(feature = "fxhash")]
pub type FxOrderedSet<T> = OrderedSet<T, rustc_hash::FxBuildHasher>;

/// [`OrderedMap`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashOrderedMap<K, V> = OrderedMap<K, V, ahash::RandomState>;

/// [`OrderedSet`] hashed with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashOrderedSet<T> = OrderedSet<T, ahash::RandomState>;
