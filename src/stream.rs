//! The lazy [`Stream`] type and its element-wise stages.
//!
//! A `Stream<T>` is an immutable handle: its node in the [`Pipeline`] graph plus a
//! typed closure that, when a terminal operation runs, opens a fresh pull-based
//! iterator over the chain. Intermediate operations borrow `self` and return a new
//! stream, so one base stream can feed any number of independent terminals.
//!
//! Elements travel through the chain as `Result<T>`. An `Err` produced by a source
//! is passed through every stage untouched until the terminal sees it and aborts.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKind};
use crate::node_id::NodeId;
use crate::pipeline::{GraphNode, Pipeline};
use crate::runner::Runner;
use std::sync::Arc;

/// Bound shared by every element type a stream can carry.
pub trait Element: 'static + Send + Sync {}
impl<T> Element for T where T: 'static + Send + Sync {}

/// A pull-based iterator over one run of a chain.
pub(crate) type Pull<T> = Box<dyn Iterator<Item = Result<T>>>;

/// Opens a fresh [`Pull`] for every terminal evaluation.
pub(crate) type Stage<T> = Arc<dyn Fn() -> Result<Pull<T>> + Send + Sync>;

/// A lazily evaluated, ordered sequence of `T`.
pub struct Stream<T> {
    pub(crate) pipeline: Pipeline,
    pub(crate) node: Arc<GraphNode>,
    pub(crate) stage: Stage<T>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            node: Arc::clone(&self.node),
            stage: Arc::clone(&self.stage),
        }
    }
}

impl<T: Element> Stream<T> {
    pub(crate) fn source(p: &Pipeline, node: Node, stage: Stage<T>) -> Self {
        Self {
            pipeline: p.clone(),
            node: p.insert_node(node, None),
            stage,
        }
    }

    /// Record `node` downstream of `self` and attach the stage that implements it.
    pub(crate) fn chain<O: Element>(&self, node: Node, stage: Stage<O>) -> Stream<O> {
        Stream {
            pipeline: self.pipeline.clone(),
            node: self.pipeline.insert_node(node, Some(Arc::clone(&self.node))),
            stage,
        }
    }

    /// Like [`chain`](Self::chain) for stages that only wrap the upstream iterator.
    pub(crate) fn then<O, W>(&self, node: Node, wrap: W) -> Stream<O>
    where
        O: Element,
        W: 'static + Send + Sync + Fn(Pull<T>) -> Pull<O>,
    {
        let upstream = Arc::clone(&self.stage);
        self.chain(node, Arc::new(move || -> Result<Pull<O>> { Ok(wrap(upstream()?)) }))
    }

    pub(crate) fn runner(&self) -> Runner {
        Runner::for_pipeline(&self.pipeline)
    }

    /// Id of this stream's node in the pipeline graph.
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        self.node.id
    }

    /// The pipeline this stream belongs to.
    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Keep elements for which `pred` holds.
    #[must_use]
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        let pred = Arc::new(pred);
        self.then(Node::new(NodeKind::Filter, "filter"), move |up| {
            let pred = Arc::clone(&pred);
            Box::new(up.filter(move |r| r.as_ref().map_or(true, |t| pred(t))))
        })
    }

    /// Transform every element, one to one, preserving order.
    #[must_use]
    pub fn map<O, F>(&self, f: F) -> Stream<O>
    where
        O: Element,
        F: 'static + Send + Sync + Fn(&T) -> O,
    {
        let f = Arc::new(f);
        self.then(Node::new(NodeKind::Map, "map"), move |up| {
            let f = Arc::clone(&f);
            Box::new(up.map(move |r| r.map(|t| f(&t))))
        })
    }

    /// Expand every element into zero or more outputs, concatenated in source order.
    ///
    /// The expansion is pulled lazily, so a `limit` downstream stops it midway.
    #[must_use]
    pub fn flat_map<O, I, F>(&self, f: F) -> Stream<O>
    where
        O: Element,
        I: IntoIterator<Item = O>,
        I::IntoIter: 'static,
        F: 'static + Send + Sync + Fn(&T) -> I,
    {
        let f = Arc::new(f);
        self.then(Node::new(NodeKind::FlatMap, "flat_map"), move |up| {
            let f = Arc::clone(&f);
            Box::new(up.flat_map(move |r| -> Pull<O> {
                match r {
                    Ok(t) => Box::new(f(&t).into_iter().map(Ok::<O, Error>)),
                    Err(e) => Box::new(std::iter::once(Err(e))),
                }
            }))
        })
    }

    /// Call `f` on every element as it flows past, without changing the stream.
    #[must_use]
    pub fn inspect<F>(&self, f: F) -> Self
    where
        F: 'static + Send + Sync + Fn(&T),
    {
        let f = Arc::new(f);
        self.then(Node::new(NodeKind::Inspect, "inspect"), move |up| {
            let f = Arc::clone(&f);
            Box::new(up.inspect(move |r| {
                if let Ok(t) = r {
                    f(t);
                }
            }))
        })
    }
}
