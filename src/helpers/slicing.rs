//! Positional and prefix-based truncation: `skip`, `limit`, `drop_while`, `take_while`.
//!
//! All four are lazy. `limit` and `take_while` stop pulling from upstream as soon
//! as they are satisfied, which is what makes them safe on unbounded sources such
//! as [`iterate`](crate::iterate) or a large directory listing.
//!
//! Counts are `usize`, so a negative count is unrepresentable at the typed entry
//! points. Counts that arrive as signed integers (from config files, user input)
//! go through [`Stream::try_skip`] / [`Stream::try_limit`], which reject negatives
//! before any stage is recorded.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKind};
use crate::stream::{Element, Stream};
use std::sync::Arc;

fn non_negative(op: &'static str, n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| Error::invalid(op, format!("count must be non-negative, got {n}")))
}

impl<T: Element> Stream<T> {
    /// Drop the first `n` elements. A shorter stream simply ends up empty.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        self.then(Node::new(NodeKind::Skip(n), "skip"), move |up| {
            let mut remaining = n;
            // Errors are never counted as skipped elements; they must reach the terminal.
            Box::new(up.filter(move |r| {
                if remaining > 0 && r.is_ok() {
                    remaining -= 1;
                    false
                } else {
                    true
                }
            }))
        })
    }

    /// Keep at most the first `n` elements. `limit(0)` never pulls from upstream.
    #[must_use]
    pub fn limit(&self, n: usize) -> Self {
        self.then(Node::new(NodeKind::Limit(n), "limit"), move |up| Box::new(up.take(n)))
    }

    /// [`skip`](Self::skip) with a signed count.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` is negative.
    pub fn try_skip(&self, n: i64) -> Result<Self> {
        Ok(self.skip(non_negative("skip", n)?))
    }

    /// [`limit`](Self::limit) with a signed count.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` is negative.
    pub fn try_limit(&self, n: i64) -> Result<Self> {
        Ok(self.limit(non_negative("limit", n)?))
    }

    /// Drop the longest prefix whose elements satisfy `pred`, then keep everything.
    ///
    /// `pred` is not consulted again after the first element that fails it:
    /// `[5, 5, 1, 5]` with `v > 4` yields `[1, 5]`.
    #[must_use]
    pub fn drop_while<F>(&self, pred: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        let pred = Arc::new(pred);
        self.then(Node::new(NodeKind::DropWhile, "drop_while"), move |up| {
            let pred = Arc::clone(&pred);
            Box::new(up.skip_while(move |r| matches!(r, Ok(t) if pred(t))))
        })
    }

    /// Keep the longest prefix whose elements satisfy `pred` and stop at the first failure.
    ///
    /// Nothing past the first failing element is pulled.
    #[must_use]
    pub fn take_while<F>(&self, pred: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        let pred = Arc::new(pred);
        self.then(Node::new(NodeKind::TakeWhile, "take_while"), move |up| {
            let pred = Arc::clone(&pred);
            Box::new(up.take_while(move |r| r.as_ref().map_or(true, |t| pred(t))))
        })
    }
}
