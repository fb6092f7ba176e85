//! Terminal operations that fold a stream down to one value.
//!
//! Empty input is a normal outcome here, not an error:
//!
//! | operation              | empty input        |
//! |------------------------|--------------------|
//! | `reduce`               | `None`             |
//! | `fold`                 | the seed           |
//! | `min_by` / `max_by`    | `None`             |
//! | `average`              | `0.0`              |
//! | `summary_statistics`   | count 0, no min/max|
//! | `join`                 | `""`               |

use crate::combiners::{AverageF64, CombineFn, Joining, Mapping, Summarize};
use crate::error::Result;
use crate::ordering::{OrderingKey, max_by, min_by};
use crate::runner::check_cap;
use crate::stats::SummaryStatistics;
use crate::stream::{Element, Stream};
use std::ops::{Add, ControlFlow};

impl<T: Element> Stream<T> {
    /// Left-fold with no seed. `None` when the stream is empty.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn reduce<F>(&self, combiner: F) -> Result<Option<T>>
    where
        F: Fn(T, T) -> T,
    {
        self.runner().run(self, "reduce", None, |acc, t| {
            Ok(ControlFlow::Continue(Some(match acc {
                Some(prev) => combiner(prev, t),
                None => t,
            })))
        })
    }

    /// Left-fold starting from `seed`; returns `seed` unchanged for an empty stream.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn fold<F>(&self, seed: T, combiner: F) -> Result<T>
    where
        F: Fn(T, T) -> T,
    {
        self.runner()
            .run(self, "fold", seed, |acc, t| Ok(ControlFlow::Continue(combiner(acc, t))))
    }

    /// Greatest element under `key`; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn max_by(&self, key: OrderingKey<T>) -> Result<Option<T>> {
        self.reduce(max_by(key))
    }

    /// Least element under `key`; the first one wins a tie.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn min_by(&self, key: OrderingKey<T>) -> Result<Option<T>> {
        self.reduce(min_by(key))
    }

    /// Sum of a projection, starting from `S::default()`.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn sum_by<S, F>(&self, f: F) -> Result<S>
    where
        S: Add<Output = S> + Default,
        F: Fn(&T) -> S,
    {
        self.runner()
            .run(self, "sum_by", S::default(), |acc, t| Ok(ControlFlow::Continue(acc + f(&t))))
    }

    /// Feed every element to `comb` and return its output.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure. Combiners that keep their inputs
    /// (see [`CombineFn::buffers_input`]) fail with
    /// [`Error::CapacityExceeded`](crate::Error::CapacityExceeded) past the cap.
    pub fn combine<C, A, O>(&self, comb: C) -> Result<O>
    where
        C: CombineFn<T, A, O>,
    {
        let cap = self.pipeline.options().max_materialized.filter(|_| comb.buffers_input());
        let mut buffered = 0usize;
        let acc = self.runner().run(self, "combine", comb.create(), |mut acc, t| {
            buffered += 1;
            check_cap("combine", buffered, cap)?;
            comb.add_input(&mut acc, t);
            Ok(ControlFlow::Continue(acc))
        })?;
        Ok(comb.finish(acc))
    }

    /// Arithmetic mean of a numeric projection; `0.0` for an empty stream.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn average<F>(&self, f: F) -> Result<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.combine(Mapping::new(|t: T| f(&t), AverageF64))
    }

    /// Count, sum, average, min and max of a numeric projection.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn summary_statistics<F>(&self, f: F) -> Result<SummaryStatistics>
    where
        F: Fn(&T) -> f64,
    {
        self.combine(Mapping::new(|t: T| f(&t), Summarize))
    }

    /// Render every element with `to_string` and join them with `separator`.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn join<F>(&self, separator: &str, to_string: F) -> Result<String>
    where
        F: Fn(&T) -> String,
    {
        self.combine(Mapping::new(|t: T| to_string(&t), Joining::new(separator)))
    }
}
