//! Insertion-ordered key/value map.
//!
//! This module provides [`OrderedMap`], a map that remembers the order in
//! which keys were first inserted and answers positional, predicate and
//! sampling queries against that order.
//!
//! # Overview
//!
//! `OrderedMap` owns an [`IndexMap`] and delegates storage to it:
//! - lookups, inserts and removals are average O(1) (removal is O(n) to keep order)
//! - re-inserting an existing key replaces its value in place
//! - removing a key keeps the relative order of the remaining entries
//!
//! Value-side queries come from the [`Collection`] trait; the key-side
//! counterparts (`key_at`, `first_key`, `random_key`, ...) are inherent.
//!
//! # Time Complexity
//!
//! | Operation                    | Complexity |
//! |------------------------------|------------|
//! | `insert`, `get`, `contains_key` | O(1) avg |
//! | `remove`                     | O(n)       |
//! | `at`, `key_at`               | O(1)       |
//! | `first`, `last`              | O(1)       |
//! | `first_many(k)`, `last_many(k)` | O(k)    |
//! | `filter`, `map`, `array`     | O(n)       |
//! | `concat`                     | O(n + m)   |
//! | `random`                     | O(1)       |
//! | `random_many(k)`             | O(n + k)   |
//!
//! # Examples
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let mut map = OrderedMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.insert("c", 3);
//!
//! // Re-inserting keeps the original position
//! map.insert("a", 10);
//! assert_eq!(map.keys_array(), vec!["a", "b", "c"]);
//! assert_eq!(map.first(), Some(&10));
//!
//! // Removing keeps the order of the rest
//! map.remove("b");
//! assert_eq!(map.array(), vec![10, 3]);
//! ```

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use indexmap::{Equivalent, IndexMap};
use rand::Rng;

use super::position::{Position, Span, resolve_index, sample_size};
use super::query::Collection;
use super::sample::{draw_without_replacement, pick_index};

/// An insertion-ordered map with a functional query surface.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups require `Hash + Eq`.
/// * `V` - The value type.
/// * `S` - The hasher builder, `RandomState` by default.
///
/// # Examples
///
/// ```rust
/// use orderly::prelude::*;
///
/// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
///
/// assert_eq!(map.first_many(2), vec![1, 2]);
/// assert_eq!(map.last_key(), Some(&"c"));
/// assert_eq!(map.at(-1), Some(&3));
/// assert_eq!(map.filter(|value, _| *value > 1).array(), vec![2, 3]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V, S = RandomState> {
    inner: IndexMap<K, V, S>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hasher`.
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: IndexMap::with_hasher(hasher),
        }
    }

    /// Creates an empty map with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.inner.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.inner.values()
    }

    /// Returns a mutable iterator over the values in insertion order.
    #[inline]
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, K, V> {
        self.inner.values_mut()
    }

    /// Removes every entry, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns the key at `index` in insertion order.
    ///
    /// Negative indices count from the end and fractional indices are
    /// floored. Out of range yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// assert_eq!(map.key_at(0), Some(&"a"));
    /// assert_eq!(map.key_at(-1), Some(&"b"));
    /// assert_eq!(map.key_at(-3), None);
    /// ```
    pub fn key_at<P>(&self, index: P) -> Option<&K>
    where
        P: Position,
    {
        resolve_index(index.to_offset(), self.inner.len())
            .and_then(|resolved| self.inner.get_index(resolved))
            .map(|(key, _)| key)
    }

    /// Returns the first key, in insertion order, whose entry satisfies
    /// `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("low", 1), ("high", 9)]);
    /// assert_eq!(map.find_key(|value, _| *value > 5), Some(&"high"));
    /// ```
    pub fn find_key<F>(&self, mut predicate: F) -> Option<&K>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.inner
            .iter()
            .find(|&(key, value)| predicate(value, key))
            .map(|(key, _)| key)
    }

    /// Returns the first key, or `None` if empty.
    #[inline]
    pub fn first_key(&self) -> Option<&K> {
        self.inner.first().map(|(key, _)| key)
    }

    /// Returns the last key, or `None` if empty.
    #[inline]
    pub fn last_key(&self) -> Option<&K> {
        self.inner.last().map(|(key, _)| key)
    }

    /// Returns a uniformly chosen key, or `None` if empty.
    #[inline]
    pub fn random_key(&self) -> Option<&K> {
        self.random_key_with(&mut rand::rng())
    }

    /// Returns a key chosen uniformly with `rng`, or `None` if empty.
    pub fn random_key_with<R>(&self, rng: &mut R) -> Option<&K>
    where
        R: Rng + ?Sized,
    {
        pick_index(self.inner.len(), rng)
            .and_then(|index| self.inner.get_index(index))
            .map(|(key, _)| key)
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Clone,
{
    /// Returns a fresh `Vec` holding clones of the keys in insertion order.
    pub fn keys_array(&self) -> Vec<K> {
        self.inner.keys().cloned().collect()
    }

    /// Returns up to `amount` leading keys.
    ///
    /// A negative `amount` returns the trailing `|amount|` keys instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.first_keys(2), vec!["a", "b"]);
    /// assert_eq!(map.first_keys(-2), vec!["b", "c"]);
    /// ```
    pub fn first_keys<P>(&self, amount: P) -> Vec<K>
    where
        P: Position,
    {
        Span::leading(amount.to_offset())
            .apply(self.inner.keys())
            .cloned()
            .collect()
    }

    /// Returns up to `amount` trailing keys, in insertion order.
    ///
    /// A negative `amount` returns the leading `|amount|` keys instead.
    pub fn last_keys<P>(&self, amount: P) -> Vec<K>
    where
        P: Position,
    {
        Span::trailing(amount.to_offset())
            .apply(self.inner.keys())
            .cloned()
            .collect()
    }

    /// Samples up to `amount` distinct keys without replacement, in draw order.
    #[inline]
    pub fn random_keys<P>(&self, amount: P) -> Vec<K>
    where
        P: Position,
    {
        self.random_keys_with(amount, &mut rand::rng())
    }

    /// Like [`random_keys`](Self::random_keys), drawing from `rng`.
    pub fn random_keys_with<P, R>(&self, amount: P, rng: &mut R) -> Vec<K>
    where
        P: Position,
        R: Rng + ?Sized,
    {
        let pool: Vec<&K> = self.inner.keys().collect();
        draw_without_replacement(pool, sample_size(amount.to_offset()), rng)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts a key/value pair, returning the previous value for `key`.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and only its value is replaced.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns a reference to the value stored for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.get_mut(key)
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.contains_key(key)
    }

    /// Removes `key`, returning its value.
    ///
    /// The remaining entries keep their relative order.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.inner.shift_remove(key)
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new map holding the entries that satisfy `predicate`.
    ///
    /// Relative order is preserved and the new map shares this map's hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let odd = map.filter(|value, _| value % 2 == 1);
    /// assert_eq!(odd.keys_array(), vec!["a", "c"]);
    /// assert_eq!(map.len(), 3);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&V, &K) -> bool,
    {
        let mut inner = IndexMap::with_hasher(self.inner.hasher().clone());
        inner.extend(
            self.inner
                .iter()
                .filter(|&(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        Self { inner }
    }

    /// Returns a copy of this map overlaid by each of `others` in turn.
    ///
    /// Keys already present keep their position and take the value of the
    /// last map that contains them; new keys are appended in the order they
    /// are met. None of the inputs is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let base = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let patch = OrderedMap::from([("b", 20), ("c", 30)]);
    /// let more = OrderedMap::from([("c", 300)]);
    ///
    /// let combined = base.concat([&patch, &more]);
    /// assert_eq!(combined.keys_array(), vec!["a", "b", "c"]);
    /// assert_eq!(combined.array(), vec![1, 20, 300]);
    /// assert_eq!(base.array(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        K: 'a,
        V: 'a,
        S: 'a,
    {
        let mut combined = self.clone();
        let mut sources = 0_usize;
        for other in others {
            combined.inner.extend(
                other
                    .inner
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone())),
            );
            sources += 1;
        }
        tracing::trace!(
            sources,
            base = self.inner.len(),
            combined = combined.inner.len(),
            "concatenated ordered maps"
        );
        combined
    }
}

impl<K, V, S> Collection for OrderedMap<K, V, S> {
    type Key = K;
    type Value = V;
    type Entries<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.inner.iter()
    }

    #[inline]
    fn entry_at(&self, index: usize) -> Option<(&K, &V)> {
        self.inner.get_index(index)
    }
}

impl<K, V, S: Default> Default for OrderedMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: IndexMap::default(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for OrderedMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.inner.iter()).finish()
    }
}

/// Content equality: same key/value pairs, regardless of order.
impl<K, V, S> PartialEq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V, S> Eq for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, Q, S> Index<&Q> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
    S: BuildHasher,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &Q) -> &V {
        &self.inner[key]
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V>
where
    K: Hash + Eq,
{
    fn from(entries: [(K, V); N]) -> Self {
        Self {
            inner: IndexMap::from(entries),
        }
    }
}

impl<K, V> From<Vec<(K, V)>> for OrderedMap<K, V>
where
    K: Hash + Eq,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V, S> IntoIterator for OrderedMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a OrderedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes the map as the sequence of its values, the same projection as
/// [`Collection::to_array`]. Keys are not written.
#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for OrderedMap<K, V, S>
where
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.inner.values())
    }
}

// =============================================================================
// Tests
// =============================================================================
