//! Handles for stages recorded in a [`Pipeline`](crate::pipeline::Pipeline).
//!
//! Every source and intermediate operation registers a [`Node`](crate::node::Node)
//! and receives the next `NodeId`. Ids are only meaningful within the pipeline that
//! issued them; the planner uses them to walk from a terminal back to its source.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Sequential identifier of a node in a pipeline graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) const fn new(v: u64) -> Self {
        Self(v)
    }

    /// The raw sequence number, mostly for log fields.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "#{}", self.0)
    }
}
