//! In-memory and generated sources.
//!
//! Every source records a `Source` node in the pipeline graph and returns a
//! [`Stream`] over it. Nothing is read until a terminal operation runs, and each
//! terminal re-opens the source from the start.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKind};
use crate::pipeline::Pipeline;
use crate::stream::{Element, Pull, Stream};
use std::sync::Arc;

/// Create a [`Stream<T>`] over an owned vector.
///
/// The vector is shared between terminal runs; each run clones elements out of it
/// one at a time as they are pulled.
///
/// # Example
/// ```
/// use ironstream::*;
///
/// let p = Pipeline::default();
/// let evens = from_vec(&p, vec![1, 2, 3, 4]).filter(|x: &i32| x % 2 == 0).collect_seq()?;
/// assert_eq!(evens, vec![2, 4]);
/// # Ok::<(), ironstream::Error>(())
/// ```
pub fn from_vec<T>(p: &Pipeline, data: Vec<T>) -> Stream<T>
where
    T: Element + Clone,
{
    let node = Node::new(NodeKind::Source { bounded: true }, format!("vec[{}]", data.len()));
    let data = Arc::new(data);
    Stream::source(
        p,
        node,
        Arc::new(move || -> Result<Pull<T>> {
            let data = Arc::clone(&data);
            Ok(Box::new((0..data.len()).map(move |i| Ok::<T, Error>(data[i].clone()))))
        }),
    )
}

/// Create a [`Stream<T>`] from anything iterable. The input is collected up front.
pub fn from_iter<T, I>(p: &Pipeline, iter: I) -> Stream<T>
where
    T: Element + Clone,
    I: IntoIterator<Item = T>,
{
    from_vec(p, iter.into_iter().collect())
}

/// The characters of `text`, in order.
pub fn from_chars(p: &Pipeline, text: &str) -> Stream<char> {
    from_vec(p, text.chars().collect())
}

/// Unbounded source: `seed`, `next(&seed)`, `next(&next(&seed))`, ...
///
/// Only safe to terminate after a short-circuiting stage such as
/// [`limit`](Stream::limit) or [`take_while`](Stream::take_while), or with
/// [`find_first`](Stream::find_first).
///
/// # Example
/// ```
/// use ironstream::*;
///
/// let p = Pipeline::default();
/// let powers = iterate(&p, 1u64, |x| x * 2).limit(5).collect_seq()?;
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// # Ok::<(), ironstream::Error>(())
/// ```
pub fn iterate<T, F>(p: &Pipeline, seed: T, next: F) -> Stream<T>
where
    T: Element + Clone,
    F: 'static + Send + Sync + Fn(&T) -> T,
{
    let next = Arc::new(next);
    Stream::source(
        p,
        Node::new(NodeKind::Source { bounded: false }, "iterate"),
        Arc::new(move || -> Result<Pull<T>> {
            let next = Arc::clone(&next);
            let seq = std::iter::successors(Some(seed.clone()), move |prev| Some(next(prev)));
            Ok(Box::new(seq.map(Ok::<T, Error>)))
        }),
    )
}

/// Generic fallible source.
///
/// `open` is called once per terminal run and returns an iterator of
/// `anyhow::Result<T>`. A failure to open, or an `Err` item, surfaces from the
/// terminal as [`Error::Source`] and aborts the run.
///
/// # Example
/// ```
/// use ironstream::*;
///
/// let p = Pipeline::default();
/// let s = from_supplier(&p, "numbers", || Ok(vec![Ok(1), Ok(2), Err(anyhow::anyhow!("disk gone"))].into_iter()));
/// assert!(matches!(s.collect_seq(), Err(Error::Source(_))));
/// assert_eq!(s.limit(2).collect_seq()?, vec![1, 2]);
/// # Ok::<(), ironstream::Error>(())
/// ```
pub fn from_supplier<T, I, F>(p: &Pipeline, label: &str, open: F) -> Stream<T>
where
    T: Element,
    I: Iterator<Item = anyhow::Result<T>> + 'static,
    F: 'static + Send + Sync + Fn() -> anyhow::Result<I>,
{
    Stream::source(
        p,
        Node::new(NodeKind::Source { bounded: true }, label),
        Arc::new(move || -> Result<Pull<T>> {
            let items = open()?;
            Ok(Box::new(items.map(|r| r.map_err(Error::Source))))
        }),
    )
}
