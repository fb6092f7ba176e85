//! Assertion functions for testing stream outputs.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_collections_equal;
///
/// assert_collections_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections hold the same elements with the same multiplicities,
/// ignoring order.
///
/// # Panics
///
/// Panics if the multisets differ.
///
/// ```
/// use ironstream::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&["b", "a", "a"], &["a", "b", "a"]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    fn tally<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut counts = HashMap::new();
        for item in items {
            *counts.entry(item).or_insert(0) += 1;
        }
        counts
    }

    let (a, e) = (tally(actual), tally(expected));
    if a != e {
        let keys: HashSet<_> = a.keys().chain(e.keys()).copied().collect();
        let missing: Vec<_> = keys
            .iter()
            .filter(|k| a.get(*k).copied().unwrap_or(0) < e.get(*k).copied().unwrap_or(0))
            .collect();
        let extra: Vec<_> = keys
            .iter()
            .filter(|k| a.get(*k).copied().unwrap_or(0) > e.get(*k).copied().unwrap_or(0))
            .collect();
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that two groupings have the same keys and, per key, the same members in
/// the same order.
///
/// # Panics
///
/// Panics on a missing key, an unexpected key, or a differing group.
pub fn assert_groups_equal<K, V, S1, S2>(actual: &HashMap<K, V, S1>, expected: &HashMap<K, V, S2>)
where
    K: Debug + Eq + Hash,
    V: Debug + PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    for (k, ev) in expected {
        match actual.get(k) {
            Some(av) => assert_eq!(av, ev, "Group {k:?} differs"),
            None => panic!("Missing group {k:?}; actual groups: {actual:?}"),
        }
    }
    for k in actual.keys() {
        assert!(expected.contains_key(k), "Unexpected group {k:?}");
    }
}

/// Assert that every element satisfies `pred`.
///
/// # Panics
///
/// Panics with the index of the first element that fails.
pub fn assert_all<T: Debug, F: Fn(&T) -> bool>(items: &[T], pred: F) {
    if let Some((i, item)) = items.iter().enumerate().find(|(_, item)| !pred(item)) {
        panic!("Element at index {i} failed the predicate: {item:?}");
    }
}
