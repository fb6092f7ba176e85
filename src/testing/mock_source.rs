//! Sources for exercising failure paths and laziness in tests.

use crate::helpers::from_supplier;
use crate::pipeline::Pipeline;
use crate::stream::{Element, Stream};
use anyhow::anyhow;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A source that yields some elements and then fails, or fails before yielding anything.
///
/// ```
/// use ironstream::Error;
/// use ironstream::testing::{FailingSource, TestPipeline};
///
/// let p = TestPipeline::new();
/// let s = FailingSource::after(vec![1, 2], "disk unplugged").stream(&p);
/// assert!(matches!(s.collect_seq(), Err(Error::Source(_))));
/// ```
#[derive(Clone, Debug)]
pub struct FailingSource<T> {
    items: Vec<T>,
    message: String,
    on_open: bool,
}

impl<T: Element + Clone> FailingSource<T> {
    /// Yield `items` in order, then fail with `message`.
    #[must_use]
    pub fn after(items: Vec<T>, message: impl Into<String>) -> Self {
        Self {
            items,
            message: message.into(),
            on_open: false,
        }
    }

    /// Fail as soon as a terminal opens the source.
    #[must_use]
    pub fn on_open(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            message: message.into(),
            on_open: true,
        }
    }

    /// Attach the source to `p`.
    #[must_use]
    pub fn stream(&self, p: &Pipeline) -> Stream<T> {
        let Self {
            items,
            message,
            on_open,
        } = self.clone();
        from_supplier(p, "failing", move || {
            if on_open {
                return Err(anyhow!(message.clone()));
            }
            let failure = std::iter::once(Err(anyhow!(message.clone())));
            Ok(items.clone().into_iter().map(Ok).chain(failure))
        })
    }
}

/// Counts how many elements have been pulled through a point in a chain.
///
/// ```
/// use ironstream::*;
/// use ironstream::testing::PullCounter;
///
/// let p = Pipeline::default();
/// let pulls = PullCounter::new();
/// let first = iterate(&p, 1, |x| x + 1).inspect(pulls.tap()).find_first()?;
/// assert_eq!(first, Some(1));
/// assert_eq!(pulls.get(), 1);
/// # Ok::<(), ironstream::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PullCounter(Arc<AtomicUsize>);

impl PullCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A closure for [`Stream::inspect`] that bumps this counter.
    #[must_use]
    pub fn tap<T: 'static>(&self) -> impl Fn(&T) + Send + Sync + use<T> {
        let counter = Arc::clone(&self.0);
        move |_: &T| {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Pulls recorded so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Reset to zero.
    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}
