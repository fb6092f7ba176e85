//! Basic terminal operations: materialize, iterate, find, count.

use crate::error::Result;
use crate::stream::{Element, Stream};
use std::ops::ControlFlow;

impl<T: Element> Stream<T> {
    /// Evaluate the chain and return every element in order.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure; nothing is returned in that case.
    pub fn collect_seq(&self) -> Result<Vec<T>> {
        self.runner().run_collect(self)
    }

    /// Run `action` on every element, in order, on the calling thread.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure. Elements before it have already
    /// been handed to `action`.
    pub fn for_each<F>(&self, mut action: F) -> Result<()>
    where
        F: FnMut(T),
    {
        self.runner().run(self, "for_each", (), |(), t| {
            action(t);
            Ok(ControlFlow::Continue(()))
        })
    }

    /// The first element, if any. Stops pulling as soon as one is found.
    ///
    /// # Errors
    ///
    /// Propagates a source failure raised before the first element.
    pub fn find_first(&self) -> Result<Option<T>> {
        self.runner()
            .run(self, "find_first", None, |_, t| Ok(ControlFlow::Break(Some(t))))
    }

    /// Number of elements.
    ///
    /// # Errors
    ///
    /// Propagates the first source failure.
    pub fn count(&self) -> Result<usize> {
        self.runner()
            .run(self, "count", 0usize, |n, _| Ok(ControlFlow::Continue(n + 1)))
    }
}
