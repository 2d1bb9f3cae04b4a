//! Insertion-ordered unique-value set.
//!
//! This module provides [`OrderedSet`], a set that remembers the order in
//! which elements were first added.
//!
//! # Overview
//!
//! `OrderedSet` owns an [`IndexSet`] and implements [`Collection`] with each
//! element acting as both key and value. Callbacks therefore receive the same
//! element twice, which keeps them interchangeable with [`OrderedMap`]
//! callbacks:
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! fn positive<C: Collection<Value = i32>>(collection: &C) -> bool {
//!     collection.every(|value, _| *value > 0)
//! }
//!
//! assert!(positive(&OrderedSet::from([1, 2, 3])));
//! assert!(!positive(&OrderedMap::from([("a", 1), ("b", -2)])));
//! ```
//!
//! There are no key-side queries (`key_at`, `first_key`, ...) on a set.
//!
//! [`OrderedMap`]: super::OrderedMap
//!
//! # Examples
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! let set: OrderedSet<i32> = [1, 2, 3, 2].into_iter().collect();
//!
//! // Duplicates are ignored and do not move the original
//! assert_eq!(set.len(), 3);
//! assert_eq!(set.array(), vec![1, 2, 3]);
//! assert_eq!(set.last_many(2), vec![2, 3]);
//! ```

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use indexmap::{Equivalent, IndexSet};

use super::query::Collection;

/// An insertion-ordered set with a functional query surface.
///
/// # Type Parameters
///
/// * `T` - The element type. Membership requires `Hash + Eq`.
/// * `S` - The hasher builder, `RandomState` by default.
///
/// # Examples
///
/// ```rust
/// use orderly::prelude::*;
///
/// let mut set = OrderedSet::new();
/// assert!(set.insert("x"));
/// assert!(set.insert("y"));
/// assert!(!set.insert("x"));
///
/// assert_eq!(set.first(), Some(&"x"));
/// assert_eq!(set.at(-1), Some(&"y"));
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, S = RandomState> {
    inner: IndexSet<T, S>,
}

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let set: OrderedSet<u8> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSet::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSet::with_capacity(capacity),
        }
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Creates an empty set that hashes elements with `hasher`.
    #[inline]
    #[must_use]
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: IndexSet::with_hasher(hasher),
        }
    }

    /// Creates an empty set with the given capacity and hasher.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            inner: IndexSet::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds `element`, returning `true` if it was not already present.
    ///
    /// An element that is already present keeps its position.
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Returns `true` if the set contains `element`.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner.contains(element)
    }

    /// Returns a reference to the stored element equal to `element`.
    #[inline]
    pub fn get<Q>(&self, element: &Q) -> Option<&T>
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner.get(element)
    }

    /// Removes `element`, returning `true` if it was present.
    ///
    /// The remaining elements keep their relative order.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.inner.shift_remove(element)
    }
}

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set holding the elements that satisfy `predicate`.
    ///
    /// The predicate receives each element twice. Relative order is
    /// preserved and the new set shares this set's hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let set = OrderedSet::from([5, 10, 15, 20]);
    /// let big = set.filter(|value, _| *value > 10);
    /// assert_eq!(big.array(), vec![15, 20]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut inner = IndexSet::with_hasher(self.inner.hasher().clone());
        inner.extend(
            self.inner
                .iter()
                .filter(|&element| predicate(element, element))
                .cloned(),
        );
        Self { inner }
    }

    /// Returns a copy of this set followed by the new elements of each of
    /// `others`, in argument order.
    ///
    /// Elements already present keep their earlier position. None of the
    /// inputs is modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let first = OrderedSet::from([1, 2]);
    /// let second = OrderedSet::from([2, 3]);
    /// let third = OrderedSet::from([4, 1]);
    ///
    /// let combined = first.concat([&second, &third]);
    /// assert_eq!(combined.array(), vec![1, 2, 3, 4]);
    /// assert_eq!(first.len(), 2);
    /// ```
    #[must_use]
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        S: 'a,
    {
        let mut combined = self.clone();
        let mut sources = 0_usize;
        for other in others {
            combined.inner.extend(other.inner.iter().cloned());
            sources += 1;
        }
        tracing::trace!(
            sources,
            base = self.inner.len(),
            combined = combined.inner.len(),
            "concatenated ordered sets"
        );
        combined
    }

    /// Maps every element into a new set, collapsing duplicate results.
    ///
    /// The callback receives each element twice. A result seen before keeps
    /// the position of its first occurrence. Use
    /// [`Collection::map`] to keep one result per element instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let words = OrderedSet::from(["apple", "avocado", "banana"]);
    /// let initials = words.map_unique(|word, _| word.chars().next());
    /// assert_eq!(initials.array(), vec![Some('a'), Some('b')]);
    /// assert_eq!(words.map(|word, _| word.len()), vec![5, 7, 6]);
    /// ```
    pub fn map_unique<M, F>(&self, mut function: F) -> OrderedSet<M, S>
    where
        M: Hash + Eq,
        F: FnMut(&T, &T) -> M,
    {
        let mut inner =
            IndexSet::with_capacity_and_hasher(self.inner.len(), self.inner.hasher().clone());
        inner.extend(self.inner.iter().map(|element| function(element, element)));
        OrderedSet { inner }
    }
}

impl<T, S> Collection for OrderedSet<T, S> {
    type Key = T;
    type Value = T;
    type Entries<'a>
        = std::iter::Map<indexmap::set::Iter<'a, T>, fn(&'a T) -> (&'a T, &'a T)>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn entries<'a>(&'a self) -> Self::Entries<'a> {
        let twin: fn(&'a T) -> (&'a T, &'a T) = |element| (element, element);
        self.inner.iter().map(twin)
    }

    #[inline]
    fn entry_at(&self, index: usize) -> Option<(&T, &T)> {
        self.inner.get_index(index).map(|element| (element, element))
    }
}

impl<T, S: Default> Default for OrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            inner: IndexSet::default(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

/// Content equality: same elements, regardless of order.
impl<T, S> PartialEq for OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T, S> Eq for OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSet<T>
where
    T: Hash + Eq,
{
    fn from(elements: [T; N]) -> Self {
        Self {
            inner: IndexSet::from(elements),
        }
    }
}

impl<T> From<Vec<T>> for OrderedSet<T>
where
    T: Hash + Eq,
{
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for OrderedSet<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.inner {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<T, S> OrderedSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = OrderedSet::with_hasher(S::default());
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

/// Deserializes from a sequence. Repeated elements collapse onto their first
/// occurrence.
#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for OrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
