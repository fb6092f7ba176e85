//! Grouping terminals.
//!
//! Every variant partitions the stream by a key function: each element lands in
//! exactly one group, and within a group elements keep their encounter order.
//! The order in which groups appear in the returned `HashMap` is unspecified.

use crate::combiners::CombineFn;
use crate::error::Result;
use crate::runner::check_cap;
use crate::stream::{Element, Stream};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::ControlFlow;

impl<T: Element> Stream<T> {
    /// Group elements by `key`, keeping every element.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure, or [`Error::CapacityExceeded`](crate::Error::CapacityExceeded)
    /// when more elements than the configured cap would be buffered.
    pub fn group_by<K, F>(&self, key: F) -> Result<HashMap<K, Vec<T>>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        let cap = self.pipeline.options().max_materialized;
        let mut buffered = 0usize;
        self.runner().run(self, "group_by", HashMap::new(), |mut groups: HashMap<K, Vec<T>>, t| {
            buffered += 1;
            check_cap("group_by", buffered, cap)?;
            groups.entry(key(&t)).or_default().push(t);
            Ok(ControlFlow::Continue(groups))
        })
    }

    /// Group elements by `key`, then turn each group's elements into a value with `finish`.
    ///
    /// # Errors
    ///
    /// Same as [`group_by`](Self::group_by).
    pub fn group_by_with<K, V, F, G>(&self, key: F, finish: G) -> Result<HashMap<K, V>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
        G: Fn(Vec<T>) -> V,
    {
        Ok(self
            .group_by(key)?
            .into_iter()
            .map(|(k, members)| (k, finish(members)))
            .collect())
    }

    /// Group by `key` and fold each group with `combiner` as elements arrive.
    ///
    /// Every key in the result was produced by at least one element, so each value
    /// is present; there is no empty-group case to represent.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn group_by_reduce<K, F, R>(&self, key: F, combiner: R) -> Result<HashMap<K, T>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
        R: Fn(T, T) -> T,
    {
        self.runner().run(self, "group_by_reduce", HashMap::new(), |mut groups: HashMap<K, T>, t| {
            let k = key(&t);
            let merged = match groups.remove(&k) {
                Some(prev) => combiner(prev, t),
                None => t,
            };
            groups.insert(k, merged);
            Ok(ControlFlow::Continue(groups))
        })
    }

    /// Group by `key` and feed each group to its own accumulator of `comb`.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure. When `comb` keeps its inputs, the
    /// elements held across all groups count against the materialization cap.
    pub fn combine_by<K, F, C, A, O>(&self, key: F, comb: C) -> Result<HashMap<K, O>>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
        C: CombineFn<T, A, O>,
    {
        let cap = self.pipeline.options().max_materialized.filter(|_| comb.buffers_input());
        let mut buffered = 0usize;
        let accs = self.runner().run(self, "combine_by", HashMap::new(), |mut accs: HashMap<K, A>, t| {
            buffered += 1;
            check_cap("combine_by", buffered, cap)?;
            let acc = accs.entry(key(&t)).or_insert_with(|| comb.create());
            comb.add_input(acc, t);
            Ok(ControlFlow::Continue(accs))
        })?;
        Ok(accs.into_iter().map(|(k, acc)| (k, comb.finish(acc))).collect())
    }
}
