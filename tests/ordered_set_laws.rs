//! Property-based tests for `OrderedSet` laws.
//!
//! These tests verify that `OrderedSet` behaves as a set while keeping the
//! order of first appearance.

use orderly::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dedup_in_order(elements: &[i16]) -> Vec<i16> {
    let mut unique = Vec::new();
    for element in elements {
        if !unique.contains(element) {
            unique.push(*element);
        }
    }
    unique
}

// =============================================================================
// Uniqueness Law
// Description: Each element appears once, at the position of its first
// appearance
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_law(elements in prop::collection::vec(any::<i16>(), 0..80)) {
        let set: OrderedSet<i16> = elements.iter().copied().collect();

        prop_assert_eq!(set.array(), dedup_in_order(&elements));
    }
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted element is contained and appended only if new
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i16>(), 0..50),
        new_element: i16
    ) {
        let mut set: OrderedSet<i16> = elements.iter().copied().collect();
        let was_present = set.contains(&new_element);
        let length = set.len();

        prop_assert_eq!(set.insert(new_element), !was_present);
        prop_assert!(set.contains(&new_element));
        if !was_present {
            prop_assert_eq!(set.len(), length + 1);
            prop_assert_eq!(set.last(), Some(&new_element));
        }
    }
}

// =============================================================================
// Remove-Contains Law
// Description: A removed element is gone and the rest keep their order
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_contains_law(
        elements in prop::collection::vec(any::<i16>(), 0..50),
        element_to_remove: i16
    ) {
        let mut set: OrderedSet<i16> = elements.iter().copied().collect();
        set.remove(&element_to_remove);

        prop_assert!(!set.contains(&element_to_remove));
        let expected: Vec<i16> = dedup_in_order(&elements)
            .into_iter()
            .filter(|element| *element != element_to_remove)
            .collect();
        prop_assert_eq!(set.array(), expected);
    }
}

// =============================================================================
// Twin Argument Law
// Description: Callbacks receive each element as both value and key
// =============================================================================

proptest! {
    #[test]
    fn prop_twin_argument_law(elements in prop::collection::vec(any::<i16>(), 0..50)) {
        let set: OrderedSet<i16> = elements.into_iter().collect();

        prop_assert!(set.every(|value, key| value == key));
        prop_assert_eq!(set.map(|_, key| *key), set.array());
    }
}

// =============================================================================
// Positional Law
// Description: at(i) and at(i - len) address the same element
// =============================================================================

proptest! {
    #[test]
    fn prop_positional_law(
        elements in prop::collection::vec(any::<i16>(), 1..50),
        index in 0_usize..50
    ) {
        let set: OrderedSet<i16> = elements.into_iter().collect();
        let array = set.array();

        prop_assert_eq!(set.at(index), array.get(index));
        if index < set.len() {
            let from_back = isize::try_from(index).unwrap_or(0) - isize::try_from(set.len()).unwrap_or(0);
            prop_assert_eq!(set.at(from_back), set.at(index));
        }
    }
}

// =============================================================================
// Slicing Law
// Description: first_many and last_many are a prefix and suffix of array()
// =============================================================================

proptest! {
    #[test]
    fn prop_slicing_law(
        elements in prop::collection::vec(any::<i16>(), 0..50),
        amount in -60_i32..60
    ) {
        let set: OrderedSet<i16> = elements.into_iter().collect();
        let array = set.array();
        let count = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX).min(array.len());
        let prefix = array[..count].to_vec();
        let suffix = array[array.len() - count..].to_vec();

        if amount >= 0 {
            prop_assert_eq!(set.first_many(amount), prefix);
            prop_assert_eq!(set.last_many(amount), suffix);
        } else {
            prop_assert_eq!(set.first_many(amount), suffix);
            prop_assert_eq!(set.last_many(amount), prefix);
        }
    }
}

// =============================================================================
// Concat Law
// Description: concat is the order-preserving union, left operand first
// =============================================================================

proptest! {
    #[test]
    fn prop_concat_law(
        left in prop::collection::vec(any::<i16>(), 0..30),
        right in prop::collection::vec(any::<i16>(), 0..30)
    ) {
        let left_set: OrderedSet<i16> = left.iter().copied().collect();
        let right_set: OrderedSet<i16> = right.iter().copied().collect();

        let combined = left_set.concat([&right_set]);
        let all: Vec<i16> = left.iter().chain(right.iter()).copied().collect();

        prop_assert_eq!(combined.array(), dedup_in_order(&all));
        prop_assert_eq!(combined, right_set.concat([&left_set]));
    }
}

// =============================================================================
// Filter Law
// Description: filter(p) followed by filter(q) equals filter(p && q)
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_composition_law(elements in prop::collection::vec(any::<i16>(), 0..50)) {
        let set: OrderedSet<i16> = elements.into_iter().collect();

        let chained = set
            .filter(|value, _| *value > -100)
            .filter(|value, _| value % 3 == 0);
        let combined = set.filter(|value, _| *value > -100 && value % 3 == 0);

        prop_assert_eq!(chained.array(), combined.array());
    }
}

// =============================================================================
// Map Unique Law
// Description: map_unique equals map followed by order-preserving dedup
// =============================================================================

proptest! {
    #[test]
    fn prop_map_unique_law(elements in prop::collection::vec(any::<i16>(), 0..50)) {
        let set: OrderedSet<i16> = elements.into_iter().collect();

        let unique = set.map_unique(|value, _| value / 8);
        let mapped = set.map(|value, _| value / 8);

        prop_assert_eq!(unique.array(), dedup_in_order(&mapped));
    }
}

// =============================================================================
// Sampling Law
// Description: random_many draws distinct members and never more than len()
// =============================================================================

proptest! {
    #[test]
    fn prop_sampling_law(
        elements in prop::collection::vec(any::<i16>(), 0..50),
        amount in 0_usize..60,
        seed: u64
    ) {
        let set: OrderedSet<i16> = elements.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let drawn = set.random_many_with(amount, &mut rng);
        prop_assert_eq!(drawn.len(), amount.min(set.len()));
        prop_assert!(drawn.iter().all(|element| set.contains(element)));
        prop_assert_eq!(dedup_in_order(&drawn).len(), drawn.len());

        let single = set.random_with(&mut rng);
        prop_assert_eq!(single.is_some(), !set.is_empty());
    }
}
