//! Stage descriptors recorded in the pipeline graph.
//!
//! A [`Node`] describes *what* a stage does; the typed closure held by the
//! [`Stream`](crate::Stream) does the work. Keeping the description separate lets
//! the planner explain a chain without knowing its element types.

use std::fmt::{Display, Formatter, Result as FormatResult};

/// The kind of stage a node represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Origin of a chain. `bounded` is `false` for generators such as `iterate`.
    Source { bounded: bool },
    Filter,
    Map,
    FlatMap,
    Skip(usize),
    Limit(usize),
    DropWhile,
    TakeWhile,
    Inspect,
    /// Stable sort; must buffer the whole upstream before emitting.
    Sort,
}

impl NodeKind {
    /// Short operator name used in plans and log fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Source { .. } => "Source",
            Self::Filter => "Filter",
            Self::Map => "Map",
            Self::FlatMap => "FlatMap",
            Self::Skip(_) => "Skip",
            Self::Limit(_) => "Limit",
            Self::DropWhile => "DropWhile",
            Self::TakeWhile => "TakeWhile",
            Self::Inspect => "Inspect",
            Self::Sort => "Sort",
        }
    }

    /// Barriers consume their entire upstream before yielding anything.
    #[must_use]
    pub const fn is_barrier(&self) -> bool {
        matches!(self, Self::Sort)
    }

    /// Stages that may stop pulling from upstream before it is exhausted.
    #[must_use]
    pub const fn short_circuits(&self) -> bool {
        matches!(self, Self::Limit(_) | Self::TakeWhile)
    }
}

/// A recorded stage: its kind plus a label for humans.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub label: String,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }

    /// One-line description for plan output.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.kind {
            NodeKind::Source { bounded: true } => format!("read from {}", self.label),
            NodeKind::Source { bounded: false } => {
                format!("read from {} (unbounded)", self.label)
            }
            NodeKind::Skip(n) => format!("drop the first {n} elements"),
            NodeKind::Limit(n) => format!("keep at most {n} elements"),
            NodeKind::DropWhile => "drop the leading prefix matching a predicate".to_string(),
            NodeKind::TakeWhile => "keep the leading prefix matching a predicate".to_string(),
            NodeKind::Sort => format!("stable sort ({})", self.label),
            _ => self.label.clone(),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "{}: {}", self.kind.name(), self.describe())
    }
}
