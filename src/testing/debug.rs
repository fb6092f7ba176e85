//! Debug utilities for inspecting streams while a terminal runs.
//!
//! Output goes through `tracing` at `debug` level, so it only appears when a
//! subscriber is installed.

use crate::node::{Node, NodeKind};
use crate::stream::{Element, Pull, Stream};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Extension methods for debugging streams.
pub trait StreamDebugExt<T> {
    /// Log the first `inspect_limit` elements (from the pipeline options) of each run.
    #[must_use]
    fn debug_inspect(&self, label: &str) -> Stream<T>;

    /// Log how many elements passed once upstream is exhausted.
    #[must_use]
    fn debug_count(&self, label: &str) -> Stream<T>;
}

impl<T: Element + Debug> StreamDebugExt<T> for Stream<T> {
    fn debug_inspect(&self, label: &str) -> Self {
        let label: Arc<str> = Arc::from(label);
        let limit = self.pipeline().options().inspect_limit;
        self.then(Node::new(NodeKind::Inspect, format!("debug_inspect({label})")), move |up| {
            let label = Arc::clone(&label);
            let mut index = 0usize;
            Box::new(up.inspect(move |r| {
                if let Ok(item) = r {
                    if index < limit {
                        debug!(label = %label, index, ?item, "element");
                    } else if index == limit {
                        debug!(label = %label, "further elements not logged");
                    }
                    index += 1;
                }
            }))
        })
    }

    fn debug_count(&self, label: &str) -> Self {
        let label: Arc<str> = Arc::from(label);
        self.then(Node::new(NodeKind::Inspect, format!("debug_count({label})")), move |up| {
            Box::new(CountOnExhaust {
                inner: up,
                label: Arc::clone(&label),
                seen: 0,
            }) as Pull<T>
        })
    }
}

struct CountOnExhaust<T> {
    inner: Pull<T>,
    label: Arc<str>,
    seen: usize,
}

impl<T> Iterator for CountOnExhaust<T> {
    type Item = crate::Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.inner.next();
        match &next {
            Some(Ok(_)) => self.seen += 1,
            Some(Err(_)) => {}
            None => debug!(label = %self.label, count = self.seen, "upstream exhausted"),
        }
        next
    }
}
