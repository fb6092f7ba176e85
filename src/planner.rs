//! Plan inspection.
//!
//! The planner walks back from a stream's node to its source and produces a
//! linear [`Plan`]. Execution never consults the plan; it exists
//! so a chain can be explained and sanity-checked before a terminal runs:
//!
//! - barriers (sorts) that must buffer the whole upstream,
//! - short-circuiting stages (`limit`, `take_while`) that stop pulling early,
//! - unbounded sources that reach a barrier before anything bounds them.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKind};
use crate::node_id::NodeId;
use crate::pipeline::{GraphNode, Pipeline};
use crate::stream::{Element, Stream};
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::Arc;

/// A linearized chain, source first.
#[derive(Clone, Debug)]
pub struct Plan {
    pub chain: Vec<(NodeId, Node)>,
}

/// Detailed explanation of a plan.
#[derive(Debug, Clone)]
pub struct ExecutionExplanation {
    /// One entry per stage, source first.
    pub steps: Vec<ExplainStep>,
    /// Number of stages that buffer their whole upstream.
    pub barriers: usize,
    /// Number of stages that can stop pulling early.
    pub short_circuits: usize,
    /// Problems worth knowing about before running a terminal.
    pub warnings: Vec<String>,
}

/// A single step in an explained plan.
#[derive(Debug, Clone)]
pub struct ExplainStep {
    /// Position in the chain, starting at 0 for the source.
    pub step: usize,
    pub node: NodeId,
    /// Operator name, e.g. `"Filter"`.
    pub node_type: &'static str,
    pub description: String,
    pub is_barrier: bool,
    pub short_circuits: bool,
}

impl Plan {
    /// Number of stages, source included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Summarize the plan.
    #[must_use]
    pub fn explain(&self) -> ExecutionExplanation {
        let mut steps = Vec::with_capacity(self.chain.len());
        let mut barriers = 0;
        let mut short_circuits = 0;
        let mut warnings = Vec::new();
        let mut unbounded = false;

        for (idx, (id, node)) in self.chain.iter().enumerate() {
            let is_barrier = node.kind.is_barrier();
            let short = node.kind.short_circuits();
            match node.kind {
                NodeKind::Source { bounded: false } => unbounded = true,
                _ if short => {
                    short_circuits += 1;
                    unbounded = false;
                }
                _ if is_barrier => {
                    barriers += 1;
                    if unbounded {
                        warnings.push(format!(
                            "step {idx} ({}) buffers an unbounded upstream and will never finish",
                            node.kind.name()
                        ));
                    }
                }
                _ => {}
            }
            steps.push(ExplainStep {
                step: idx,
                node: *id,
                node_type: node.kind.name(),
                description: node.describe(),
                is_barrier,
                short_circuits: short,
            });
        }

        if unbounded && warnings.is_empty() {
            warnings.push(
                "source is unbounded and nothing limits it; only find_first will terminate"
                    .to_string(),
            );
        }

        ExecutionExplanation {
            steps,
            barriers,
            short_circuits,
            warnings,
        }
    }
}

impl Display for ExecutionExplanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "┌─ EXECUTION STEPS ────────────────────────────────────────────┐")?;
        for step in &self.steps {
            let marker = if step.is_barrier {
                " [BARRIER]"
            } else if step.short_circuits {
                " [SHORT-CIRCUIT]"
            } else {
                ""
            };
            writeln!(f, "│ Step {} {}: {}{}", step.step, step.node, step.node_type, marker)?;
            writeln!(f, "│   {}", step.description)?;
        }
        writeln!(f, "├──────────────────────────────────────────────────────────────┤")?;
        writeln!(f, "│ Stages:            {:>10}", self.steps.len())?;
        writeln!(f, "│ Barriers:          {:>10}", self.barriers)?;
        writeln!(f, "│ Short-circuits:    {:>10}", self.short_circuits)?;
        writeln!(f, "└──────────────────────────────────────────────────────────────┘")?;
        for w in &self.warnings {
            writeln!(f, "⚠ {w}")?;
        }
        Ok(())
    }
}

/// Build the linear plan that ends at `terminal`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `terminal` is not a live node of `p`.
pub fn build_plan(p: &Pipeline, terminal: NodeId) -> Result<Plan> {
    let entry = p
        .entry(terminal)
        .ok_or_else(|| Error::invalid("build_plan", format!("missing node {terminal}")))?;
    Ok(Plan {
        chain: backwalk_linear(&entry),
    })
}

fn backwalk_linear(terminal: &Arc<GraphNode>) -> Vec<(NodeId, Node)> {
    let mut chain = Vec::new();
    let mut cur = Some(terminal);
    while let Some(entry) = cur {
        chain.push((entry.id, entry.node.clone()));
        cur = entry.parent.as_ref();
    }
    chain.reverse();
    chain
}

impl<T: Element> Stream<T> {
    /// Plan for the chain ending at this stream.
    #[must_use]
    pub fn plan(&self) -> Plan {
        Plan {
            chain: backwalk_linear(&self.node),
        }
    }

    /// Shorthand for `self.plan().explain()`.
    #[must_use]
    pub fn explain(&self) -> ExecutionExplanation {
        self.plan().explain()
    }
}
