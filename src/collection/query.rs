//! The query surface shared by [`OrderedMap`](super::OrderedMap) and
//! [`OrderedSet`](super::OrderedSet).
//!
//! A [`Collection`] is an insertion-ordered sequence of `(key, value)`
//! entries. Maps expose their real keys; sets expose each element as both
//! key and value, so every callback below has the same `(value, key)` shape
//! for both containers.
//!
//! Implementors supply three primitives (`len`, `entries`, `entry_at`) and
//! receive every positional, predicate, folding and sampling query.
//!
//! # Absent Results
//!
//! | Query                          | Nothing to return |
//! |--------------------------------|-------------------|
//! | `at`, `first`, `last`, `find`  | `None`            |
//! | `random`                       | `None`            |
//! | `first_many`, `last_many`      | empty `Vec`       |
//! | `random_many`                  | empty `Vec`       |
//! | `try_reduce`                   | `Err(EmptyReduce)`|
//!
//! # Examples
//!
//! ```rust
//! use orderly::prelude::*;
//!
//! fn describe<C>(collection: &C) -> String
//! where
//!     C: Collection<Value = i32>,
//! {
//!     format!("{:?}..{:?}", collection.first(), collection.last())
//! }
//!
//! let map = OrderedMap::from([("a", 1), ("b", 2)]);
//! let set = OrderedSet::from([7, 8, 9]);
//!
//! assert_eq!(describe(&map), "Some(1)..Some(2)");
//! assert_eq!(describe(&set), "Some(7)..Some(9)");
//! ```

use rand::Rng;

use super::error::CollectionError;
use super::position::{Position, Span, resolve_index, sample_size};
use super::sample::{draw_without_replacement, pick_index};

/// An insertion-ordered collection of `(key, value)` entries.
pub trait Collection {
    /// The key half of an entry.
    type Key;

    /// The value half of an entry.
    type Value;

    /// Iterator over entries in insertion order.
    type Entries<'a>: DoubleEndedIterator<Item = (&'a Self::Key, &'a Self::Value)>
        + ExactSizeIterator
    where
        Self: 'a;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns an iterator over the entries in insertion order.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the entry stored at `index` in insertion order.
    fn entry_at(&self, index: usize) -> Option<(&Self::Key, &Self::Value)>;

    /// Returns `true` if the collection has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a fresh `Vec` holding clones of the values in insertion order.
    ///
    /// The snapshot is independent of the collection: later changes to
    /// either side are not visible to the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("x", 10), ("y", 20)]);
    /// assert_eq!(map.array(), vec![10, 20]);
    /// ```
    fn array(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.entries().map(|(_, value)| value.clone()).collect()
    }

    /// Projection used when handing the collection to a serializer.
    ///
    /// Always equal to [`array`](Self::array).
    #[inline]
    fn to_array(&self) -> Vec<Self::Value>
    where
        Self::Value: Clone,
    {
        self.array()
    }

    /// Returns the value at `index` in insertion order.
    ///
    /// Negative indices count from the end (`-1` is the last value) and
    /// fractional indices are floored. Out of range yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let set = OrderedSet::from(['a', 'b', 'c']);
    /// assert_eq!(set.at(0), Some(&'a'));
    /// assert_eq!(set.at(-1), Some(&'c'));
    /// assert_eq!(set.at(1.8), Some(&'b'));
    /// assert_eq!(set.at(3), None);
    /// ```
    fn at<P>(&self, index: P) -> Option<&Self::Value>
    where
        P: Position,
    {
        resolve_index(index.to_offset(), self.len())
            .and_then(|resolved| self.entry_at(resolved))
            .map(|(_, value)| value)
    }

    /// Returns `true` if `predicate` holds for every entry.
    ///
    /// Stops at the first entry that fails. An empty collection yields `true`.
    fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        self.entries().all(|(key, value)| predicate(value, key))
    }

    /// Returns `true` if `predicate` holds for at least one entry.
    ///
    /// Stops at the first entry that passes.
    fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        self.entries().any(|(key, value)| predicate(value, key))
    }

    /// Returns the first value, in insertion order, that satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.find(|value, _| value % 2 == 1 && *value > 1), Some(&3));
    /// assert_eq!(map.find(|_, key| *key == "z"), None);
    /// ```
    fn find<F>(&self, mut predicate: F) -> Option<&Self::Value>
    where
        F: FnMut(&Self::Value, &Self::Key) -> bool,
    {
        self.entries()
            .find(|&(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }

    /// Calls `function` on every entry in insertion order.
    fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&Self::Value, &Self::Key),
    {
        self.entries().for_each(|(key, value)| function(value, key));
    }

    /// Applies `function` to every entry and collects the results in order.
    ///
    /// The result always has exactly [`len`](Self::len) elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let labels = map.map(|value, key| format!("{key}={value}"));
    /// assert_eq!(labels, vec!["a=1", "b=2"]);
    /// ```
    fn map<M, F>(&self, mut function: F) -> Vec<M>
    where
        F: FnMut(&Self::Value, &Self::Key) -> M,
    {
        self.entries()
            .map(|(key, value)| function(value, key))
            .collect()
    }

    /// Left fold over the entries in insertion order, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let keys = map.reduce(String::new(), |mut keys, _, key| {
    ///     keys.push_str(key);
    ///     keys
    /// });
    /// assert_eq!(keys, "abc");
    /// assert_eq!(map.reduce(0, |sum, value, _| sum + value), 6);
    /// ```
    fn reduce<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &Self::Value, &Self::Key) -> B,
    {
        self.entries()
            .fold(initial, |accumulator, (key, value)| function(accumulator, value, key))
    }

    /// Left fold seeded with the first value.
    ///
    /// `function` is called for every entry after the first.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyReduce`] if the collection is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let set = OrderedSet::from([3, 9, 4]);
    /// assert_eq!(set.try_reduce(|max, value, _| max.max(*value)), Ok(9));
    /// ```
    fn try_reduce<F>(&self, mut function: F) -> Result<Self::Value, CollectionError>
    where
        Self::Value: Clone,
        F: FnMut(Self::Value, &Self::Value, &Self::Key) -> Self::Value,
    {
        let mut entries = self.entries();
        let Some((_, seed)) = entries.next() else {
            tracing::debug!("reduce without an initial value on an empty collection");
            return Err(CollectionError::EmptyReduce);
        };
        Ok(entries.fold(seed.clone(), |accumulator, (key, value)| {
            function(accumulator, value, key)
        }))
    }

    /// Returns the first value, or `None` if empty.
    #[inline]
    fn first(&self) -> Option<&Self::Value> {
        self.entries().next().map(|(_, value)| value)
    }

    /// Returns up to `amount` leading values.
    ///
    /// A negative `amount` returns the trailing `|amount|` values instead,
    /// exactly as [`last_many`](Self::last_many) would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let set = OrderedSet::from([1, 2, 3, 4]);
    /// assert_eq!(set.first_many(2), vec![1, 2]);
    /// assert_eq!(set.first_many(10), vec![1, 2, 3, 4]);
    /// assert_eq!(set.first_many(-1), vec![4]);
    /// ```
    fn first_many<P>(&self, amount: P) -> Vec<Self::Value>
    where
        P: Position,
        Self::Value: Clone,
    {
        Span::leading(amount.to_offset())
            .apply(self.entries())
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Returns the last value, or `None` if empty.
    #[inline]
    fn last(&self) -> Option<&Self::Value> {
        self.entries().next_back().map(|(_, value)| value)
    }

    /// Returns up to `amount` trailing values, in insertion order.
    ///
    /// A negative `amount` returns the leading `|amount|` values instead.
    fn last_many<P>(&self, amount: P) -> Vec<Self::Value>
    where
        P: Position,
        Self::Value: Clone,
    {
        Span::trailing(amount.to_offset())
            .apply(self.entries())
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Returns a uniformly chosen value, or `None` if empty.
    ///
    /// Uses the thread-local generator; see [`random_with`](Self::random_with)
    /// to supply one.
    #[inline]
    fn random(&self) -> Option<&Self::Value> {
        self.random_with(&mut rand::rng())
    }

    /// Returns a value chosen uniformly with `rng`, or `None` if empty.
    fn random_with<R>(&self, rng: &mut R) -> Option<&Self::Value>
    where
        R: Rng + ?Sized,
    {
        pick_index(self.len(), rng)
            .and_then(|index| self.entry_at(index))
            .map(|(_, value)| value)
    }

    /// Samples up to `amount` distinct entries without replacement and
    /// returns their values in draw order.
    ///
    /// A zero or negative `amount` yields an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orderly::prelude::*;
    ///
    /// let map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let mut drawn = map.random_many(10);
    /// drawn.sort_unstable();
    /// assert_eq!(drawn, vec![1, 2, 3]);
    /// assert!(map.random_many(0).is_empty());
    /// ```
    #[inline]
    fn random_many<P>(&self, amount: P) -> Vec<Self::Value>
    where
        P: Position,
        Self::Value: Clone,
    {
        self.random_many_with(amount, &mut rand::rng())
    }

    /// Like [`random_many`](Self::random_many), drawing from `rng`.
    fn random_many_with<P, R>(&self, amount: P, rng: &mut R) -> Vec<Self::Value>
    where
        P: Position,
        R: Rng + ?Sized,
        Self::Value: Clone,
    {
        let pool: Vec<&Self::Value> = self.entries().map(|(_, value)| value).collect();
        draw_without_replacement(pool, sample_size(amount.to_offset()), rng)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    /// Pairs stored in a plain slice, enough to drive the provided methods.
    struct Pairs(Vec<(char, i32)>);

    struct PairIter<'a>(std::slice::Iter<'a, (char, i32)>);

    impl<'a> Iterator for PairIter<'a> {
        type Item = (&'a char, &'a i32);

        fn next(&mut self) -> Option<Self::Item> {
            self.0.next().map(|(key, value)| (key, value))
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.0.size_hint()
        }
    }

    impl DoubleEndedIterator for PairIter<'_> {
        fn next_back(&mut self) -> Option<Self::Item> {
            self.0.next_back().map(|(key, value)| (key, value))
        }
    }

    impl ExactSizeIterator for PairIter<'_> {}

    impl Collection for Pairs {
        type Key = char;
        type Value = i32;
        type Entries<'a> = PairIter<'a>;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn entries(&self) -> Self::Entries<'_> {
            PairIter(self.0.iter())
        }

        fn entry_at(&self, index: usize) -> Option<(&char, &i32)> {
            self.0.get(index).map(|(key, value)| (key, value))
        }
    }

    fn sample() -> Pairs {
        Pairs(vec![('a', 1), ('b', 2), ('c', 3)])
    }

    #[rstest]
    fn test_provided_queries_follow_entry_order() {
        let pairs = sample();

        assert_eq!(pairs.array(), vec![1, 2, 3]);
        assert_eq!(pairs.at(-2), Some(&2));
        assert_eq!(pairs.first(), Some(&1));
        assert_eq!(pairs.last(), Some(&3));
        assert_eq!(pairs.find(|_, key| *key == 'b'), Some(&2));
    }

    #[rstest]
    fn test_callbacks_receive_value_then_key() {
        let pairs = sample();
        let labels = pairs.map(|value, key| format!("{value}{key}"));
        assert_eq!(labels, vec!["1a", "2b", "3c"]);
    }

    #[rstest]
    #[case(0, vec![])]
    #[case(2, vec![1, 2])]
    #[case(-1, vec![3])]
    #[case(5, vec![1, 2, 3])]
    fn test_first_many(#[case] amount: i32, #[case] expected: Vec<i32>) {
        assert_eq!(sample().first_many(amount), expected);
    }

    #[rstest]
    fn test_empty_collection() {
        let empty = Pairs(Vec::new());

        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
        assert_eq!(empty.at(0), None);
        assert!(empty.every(|_, _| false));
        assert_eq!(empty.reduce(7, |total, value, _| total + value), 7);
        assert_eq!(
            empty.try_reduce(|total, value, _| total + value),
            Err(CollectionError::EmptyReduce)
        );
        assert_eq!(empty.random_with(&mut StdRng::seed_from_u64(0)), None);
    }

    #[rstest]
    fn test_random_many_with_nonpositive_amount_is_empty() {
        let pairs = sample();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(pairs.random_many_with(0, &mut rng).is_empty());
        assert!(pairs.random_many_with(-2, &mut rng).is_empty());
        assert!(pairs.random_many_with(f64::NAN, &mut rng).is_empty());
    }
}
