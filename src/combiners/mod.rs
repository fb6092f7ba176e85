//! Reusable aggregations for [`Stream::combine`](crate::Stream::combine) and
//! [`Stream::combine_by`](crate::Stream::combine_by).
//!
//! A combiner folds values into an accumulator (`A`) and turns the accumulator
//! into an output (`O`) at the end:
//!
//! - [`Count`] -- number of values.
//! - [`Sum<T>`] -- sum of values.
//! - [`AverageF64`] -- arithmetic mean, `0.0` for no values.
//! - [`Summarize`] -- full [`SummaryStatistics`](crate::SummaryStatistics).
//! - [`ToVec`] -- the values themselves, in order.
//! - [`Joining`] -- strings joined with a separator.
//! - [`Reducing`] -- a binary operator folded over the values.
//! - [`Mapping`] -- project each value, then feed another combiner.
//!
//! # Examples
//! ```
//! use ironstream::*;
//! use ironstream::combiners::{Mapping, ToVec};
//! use ironstream::testing::{Person, people};
//!
//! let p = Pipeline::default();
//! let names_by_age = from_vec(&p, people())
//!     .combine_by(|person: &Person| person.age, Mapping::new(|person: Person| person.name, ToVec))?;
//! assert_eq!(names_by_age[&22], vec!["Sara".to_string(), "Jane".to_string()]);
//! # Ok::<(), ironstream::Error>(())
//! ```

mod basic;
mod collecting;
mod statistical;

pub use basic::{Count, Reducing, Sum};
pub use collecting::{Joining, Mapping, ToVec};
pub use statistical::{AverageF64, Summarize};

/// An aggregation over a sequence of `V`, accumulated in `A`, producing `O`.
pub trait CombineFn<V, A, O> {
    /// Fresh accumulator for an empty sequence.
    fn create(&self) -> A;
    /// Fold one value into the accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Produce the final output.
    fn finish(&self, acc: A) -> O;

    /// Whether the accumulator grows with every input.
    ///
    /// Terminals hold such combiners to the pipeline's materialization cap.
    fn buffers_input(&self) -> bool {
        false
    }
}
