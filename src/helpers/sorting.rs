//! Stable sorting stages.
//!
//! Sorting is the only barrier in the crate: the first pull drains the whole
//! upstream into a buffer, sorts it with `slice::sort_by` (stable), and then
//! replays it. Equal keys keep their input order, so "sort by name, then sort by
//! age" gives the same result as one composite `age, then name` key.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKind};
use crate::ordering::OrderingKey;
use crate::runner::check_cap;
use crate::stream::{Element, Pull, Stream};
use std::sync::Arc;
use tracing::trace;

impl<T: Element> Stream<T> {
    /// Stable sort by `key`.
    #[must_use]
    pub fn sort_by(&self, key: OrderingKey<T>) -> Self {
        self.sort_stage("sort_by", key)
    }

    /// Stable sort by the key `f` extracts.
    #[must_use]
    pub fn sort_by_key<K, F>(&self, f: F) -> Self
    where
        K: Ord,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.sort_stage("sort_by_key", OrderingKey::by(f))
    }

    fn sort_stage(&self, label: &'static str, key: OrderingKey<T>) -> Self {
        let upstream = Arc::clone(&self.stage);
        let cap = self.pipeline.options().max_materialized;
        self.chain(
            Node::new(NodeKind::Sort, label),
            Arc::new(move || -> Result<Pull<T>> {
                let mut buf = Vec::new();
                for item in upstream()? {
                    buf.push(item?);
                    check_cap(label, buf.len(), cap)?;
                }
                buf.sort_by(|a, b| key.compare(a, b));
                trace!(buffered = buf.len(), stage = label, "sort barrier drained upstream");
                Ok(Box::new(buf.into_iter().map(Ok::<T, Error>)))
            }),
        )
    }
}

impl<T: Element + Ord> Stream<T> {
    /// Stable sort in `T`'s natural order.
    #[must_use]
    pub fn sorted(&self) -> Self {
        self.sort_stage("sorted", OrderingKey::natural())
    }
}
