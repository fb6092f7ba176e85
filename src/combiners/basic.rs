//! Counting, summing and generic reduction.

use super::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/* ===================== Count ===================== */

/// Number of values.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }

    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

/* ===================== Sum<T> ===================== */

/// Sum of values.
///
/// Requires `T: Add<Output = T> + Default`; an empty sequence sums to `T::default()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);

impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Reducing<F> ===================== */

/// Fold a binary operator over the values, with no seed.
///
/// The output is `None` only for an empty sequence. Pair it with
/// [`max_by`](crate::ordering::max_by) or [`min_by`](crate::ordering::min_by) to
/// pick an extreme element.
#[derive(Clone, Copy, Debug)]
pub struct Reducing<F>(pub F);

impl<V, F> CombineFn<V, Option<V>, Option<V>> for Reducing<F>
where
    F: Fn(V, V) -> V,
{
    fn create(&self) -> Option<V> {
        None
    }

    fn add_input(&self, acc: &mut Option<V>, v: V) {
        *acc = Some(match acc.take() {
            Some(prev) => (self.0)(prev, v),
            None => v,
        });
    }

    fn finish(&self, acc: Option<V>) -> Option<V> {
        acc
    }
}
