//! Composable orderings over derived keys.
//!
//! An [`OrderingKey<T>`] is a comparator built from key extractors. Keys compose
//! lexicographically with [`then_by`](OrderingKey::then_by) and flip with
//! [`reversed`](OrderingKey::reversed):
//!
//! ```
//! use ironstream::OrderingKey;
//! use ironstream::testing::{Person, people};
//!
//! let by_age_then_name = OrderingKey::by(|p: &Person| p.age).then_by(|p: &Person| p.name.clone());
//! let mut sorted = people();
//! sorted.sort_by(|a, b| by_age_then_name.compare(a, b));
//! let names: Vec<_> = sorted.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["John", "Jane", "Sara", "Greg"]);
//! ```
//!
//! [`max_by`] and [`min_by`] turn an ordering into a binary "pick one" combiner,
//! suitable for [`Stream::reduce`](crate::Stream::reduce) and
//! [`Stream::group_by_reduce`](crate::Stream::group_by_reduce).

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::sync::Arc;

type Comparator<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A total ordering on `T`, usually derived from one or more keys.
pub struct OrderingKey<T> {
    cmp: Comparator<T>,
}

impl<T> Clone for OrderingKey<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Arc::clone(&self.cmp),
        }
    }
}

impl<T> Debug for OrderingKey<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str("OrderingKey")
    }
}

impl<T: 'static> OrderingKey<T> {
    /// Order by the key `f` extracts.
    pub fn by<K, F>(f: F) -> Self
    where
        K: Ord,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        Self::from_fn(move |a, b| f(a).cmp(&f(b)))
    }

    /// Order by a floating-point key. NaN sorts above every other value.
    pub fn by_float<F>(f: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> f64,
    {
        Self::by(move |t| OrderedFloat(f(t)))
    }

    /// Wrap a raw comparator such as `|a, b| a.age.cmp(&b.age)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T, &T) -> Ordering,
    {
        Self { cmp: Arc::new(f) }
    }

    /// Break ties with `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self::from_fn(move |a, b| (self.cmp)(a, b).then_with(|| (next.cmp)(a, b)))
    }

    /// Break ties with the key `f` extracts.
    #[must_use]
    pub fn then_by<K, F>(self, f: F) -> Self
    where
        K: Ord,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.then(Self::by(f))
    }

    /// The same ordering, descending.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::from_fn(move |a, b| (self.cmp)(b, a))
    }

    /// Compare two elements.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}

impl<T: Ord + 'static> OrderingKey<T> {
    /// `T`'s own `Ord`.
    #[must_use]
    pub fn natural() -> Self {
        Self::from_fn(T::cmp)
    }
}

/// Combiner keeping the greater of two elements; on a tie the first one wins.
pub fn max_by<T: 'static>(key: OrderingKey<T>) -> impl Fn(T, T) -> T + Send + Sync + Clone {
    move |a: T, b: T| if key.compare(&a, &b) == Ordering::Less { b } else { a }
}

/// Combiner keeping the lesser of two elements; on a tie the first one wins.
pub fn min_by<T: 'static>(key: OrderingKey<T>) -> impl Fn(T, T) -> T + Send + Sync + Clone {
    move |a: T, b: T| if key.compare(&a, &b) == Ordering::Greater { b } else { a }
}
