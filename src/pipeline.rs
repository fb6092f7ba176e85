use crate::error::Result;
use crate::node::Node;
use crate::node_id::NodeId;
use crate::options::PipelineOptions;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Container for a family of streams.
///
/// Every source and intermediate stage created from a pipeline is recorded as a
/// node in a small graph for as long as some stream still reaches it. Clones
/// share the same graph and options, so a `Pipeline` can be passed around by
/// value like a handle.
pub struct Pipeline {
    pub(crate) inner: Arc<Mutex<PipelineInner>>,
    options: Arc<PipelineOptions>,
}

/// Registry of live nodes.
///
/// Streams own their nodes; the registry only holds weak handles, so a node
/// disappears from the graph once the last stream reaching it is dropped.
pub struct PipelineInner {
    pub next_id: u64,
    pub nodes: HashMap<NodeId, Weak<GraphNode>>,
}

/// A recorded stage plus the stage it reads from.
#[derive(Debug)]
pub struct GraphNode {
    pub id: NodeId,
    pub node: Node,
    pub parent: Option<Arc<GraphNode>>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_parts(PipelineOptions::default())
    }
}

impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            options: Arc::clone(&self.options),
        }
    }
}

impl Pipeline {
    /// Create a pipeline with explicit options.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if the options fail validation.
    pub fn with_options(options: PipelineOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::from_parts(options))
    }

    pub(crate) fn from_parts(options: PipelineOptions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PipelineInner {
                next_id: 0,
                nodes: HashMap::new(),
            })),
            options: Arc::new(options),
        }
    }

    /// Options this pipeline was created with.
    #[must_use]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    // Graph edits never leave the map half-updated, so a poisoned lock is still usable.
    fn graph(&self) -> MutexGuard<'_, PipelineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record `node` downstream of `parent` and hand ownership to the caller.
    pub(crate) fn insert_node(&self, node: Node, parent: Option<Arc<GraphNode>>) -> Arc<GraphNode> {
        let mut g = self.graph();
        g.nodes.retain(|_, entry| entry.strong_count() > 0);
        let id = NodeId::new(g.next_id);
        g.next_id += 1;
        let entry = Arc::new(GraphNode { id, node, parent });
        g.nodes.insert(id, Arc::downgrade(&entry));
        entry
    }

    pub(crate) fn entry(&self, id: NodeId) -> Option<Arc<GraphNode>> {
        self.graph().nodes.get(&id).and_then(Weak::upgrade)
    }

    /// Look up a single live node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<Node> {
        self.entry(id).map(|entry| entry.node.clone())
    }

    /// Copy of the live graph: every node some stream still reaches, and the
    /// `(parent, child)` edges between them.
    #[must_use]
    pub fn snapshot(&self) -> (HashMap<NodeId, Node>, Vec<(NodeId, NodeId)>) {
        let live: Vec<Arc<GraphNode>> = self.graph().nodes.values().filter_map(Weak::upgrade).collect();
        let mut edges: Vec<(NodeId, NodeId)> = live
            .iter()
            .filter_map(|entry| entry.parent.as_ref().map(|parent| (parent.id, entry.id)))
            .collect();
        edges.sort_by_key(|&(_, to)| to);
        let nodes = live.iter().map(|entry| (entry.id, entry.node.clone())).collect();
        (nodes, edges)
    }
}
