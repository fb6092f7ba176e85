//! Testing utilities for ironstream pipelines.
//!
//! - **Assertions**: compare stream output with expected results.
//! - **Fixtures**: the people, name lists and assets used throughout the docs.
//! - **Mock sources**: sources that fail on demand and counters that record pulls.
//! - **Debug utilities**: log elements as they flow through a chain.
//!
//! # Quick Start
//!
//! ```no_run
//! use ironstream::*;
//! use ironstream::testing::*;
//!
//! #[test]
//! fn doubles() -> anyhow::Result<()> {
//!     let p = TestPipeline::new();
//!
//!     let result = from_vec(&p, vec![1, 2, 3])
//!         .map(|x: &i32| x * 2)
//!         .collect_seq()?;
//!
//!     assert_collections_equal(&result, &[2, 4, 6]);
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod debug;
pub mod fixtures;
pub mod mock_source;

pub use assertions::*;
pub use debug::*;
pub use fixtures::*;
pub use mock_source::*;

use crate::{Pipeline, PipelineOptions, Result};

/// A test-focused wrapper around [`Pipeline`] with graph inspection helpers.
///
/// Derefs to [`Pipeline`], so it can be passed anywhere a `&Pipeline` is expected.
///
/// ```
/// use ironstream::testing::TestPipeline;
/// use ironstream::from_vec;
///
/// let p = TestPipeline::new();
/// let tail = from_vec(&p, vec![1, 2, 3]).skip(1);
/// assert_eq!(p.node_count(), 2);
/// assert_eq!(p.edge_count(), 1);
///
/// drop(tail);
/// assert_eq!(p.node_count(), 0);
/// ```
#[derive(Clone)]
pub struct TestPipeline {
    pipeline: Pipeline,
}

impl TestPipeline {
    /// Create a new test pipeline named `"test"`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline::from_parts(PipelineOptions::default().with_name("test")),
        }
    }

    /// Create a test pipeline that refuses to buffer more than `cap` elements.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `cap` is zero.
    pub fn with_cap(cap: usize) -> Result<Self> {
        let options = PipelineOptions::default()
            .with_name("test")
            .with_max_materialized(cap);
        Ok(Self {
            pipeline: Pipeline::with_options(options)?,
        })
    }

    /// Number of nodes some live stream still reaches.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let (nodes, _) = self.pipeline.snapshot();
        nodes.len()
    }

    /// Number of edges between live nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (_, edges) = self.pipeline.snapshot();
        edges.len()
    }

    /// Print every node and edge to stderr.
    pub fn debug_print_graph(&self) {
        let (nodes, edges) = self.pipeline.snapshot();
        let mut ids: Vec<_> = nodes.keys().copied().collect();
        ids.sort();
        eprintln!("Pipeline graph ({}):", self.pipeline.options().name);
        for id in ids {
            if let Some(node) = nodes.get(&id) {
                eprintln!("  {id} {node}");
            }
        }
        for (from, to) in &edges {
            eprintln!("  {from} -> {to}");
        }
    }
}

impl Default for TestPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestPipeline {
    type Target = Pipeline;

    fn deref(&self) -> &Self::Target {
        &self.pipeline
    }
}

impl AsRef<Pipeline> for TestPipeline {
    fn as_ref(&self) -> &Pipeline {
        &self.pipeline
    }
}
