//! # ironstream
//!
//! Lazy, composable sequence pipelines for Rust.
//!
//! A [`Stream<T>`] describes a chain of stages over a source. Nothing runs while the
//! chain is being built; a terminal operation pulls elements through the chain one
//! at a time, and short-circuiting stages stop pulling as soon as they are
//! satisfied, so unbounded sources are fine as long as something bounds them.
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::*;
//! use ironstream::testing::{Person, people};
//!
//! let p = Pipeline::default();
//! let base = from_vec(&p, people());
//!
//! // Same base, two independent terminals.
//! let adults = base.filter(|person: &Person| person.age > 20).map(|person: &Person| person.name.clone());
//! assert_eq!(adults.join(", ", |name: &String| name.clone())?, "Sara, Jane, Greg");
//!
//! let oldest = base.max_by(OrderingKey::by(|person: &Person| person.age))?;
//! assert_eq!(oldest.map(|person| person.name), Some("Greg".to_string()));
//! # Ok::<(), ironstream::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline`] records the sources and stages created from it as nodes in a
//! small graph, and carries the [`PipelineOptions`] shared by its streams. A
//! node leaves the graph when the last stream reaching it is dropped.
//!
//! ### Stream
//!
//! A [`Stream<T>`] is an immutable handle. Intermediate operations borrow it and
//! return a new stream, so a base stream can feed any number of terminals.
//!
//! #### Intermediate (lazy)
//! - [`filter`](Stream::filter), [`map`](Stream::map), [`flat_map`](Stream::flat_map)
//! - [`skip`](Stream::skip), [`limit`](Stream::limit), [`drop_while`](Stream::drop_while),
//!   [`take_while`](Stream::take_while)
//! - [`sort_by`](Stream::sort_by), [`sort_by_key`](Stream::sort_by_key), [`sorted`](Stream::sorted)
//!   (the only barrier)
//! - [`inspect`](Stream::inspect)
//!
//! #### Terminal (eager)
//! - [`collect_seq`](Stream::collect_seq), [`for_each`](Stream::for_each),
//!   [`find_first`](Stream::find_first), [`count`](Stream::count)
//! - [`reduce`](Stream::reduce), [`fold`](Stream::fold), [`min_by`](Stream::min_by),
//!   [`max_by`](Stream::max_by), [`sum_by`](Stream::sum_by)
//! - [`average`](Stream::average), [`summary_statistics`](Stream::summary_statistics),
//!   [`join`](Stream::join), [`combine`](Stream::combine)
//! - [`group_by`](Stream::group_by), [`group_by_with`](Stream::group_by_with),
//!   [`group_by_reduce`](Stream::group_by_reduce), [`combine_by`](Stream::combine_by)
//!
//! ### Errors
//!
//! Source failures travel down the chain as values and abort the terminal that
//! meets them; nothing partial is returned. See [`Error`].
//!
//! ## Feature flags
//!
//! - `io-fs` (default): [`io::fs`] directory and line sources.
//! - `io-glob` (default): [`io::glob`] glob-pattern file source.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod combiners;
pub mod error;
pub mod func;
pub mod io;
pub mod node;
pub mod node_id;
pub mod options;
pub mod ordering;
pub mod pipeline;
pub mod planner;
pub mod runner;
pub mod stats;
pub mod stream;
pub mod testing;
mod helpers;

pub use combiners::CombineFn;
pub use error::{Error, Result};
pub use helpers::*;
pub use node::{Node, NodeKind};
pub use node_id::NodeId;
pub use options::PipelineOptions;
pub use ordering::OrderingKey;
pub use pipeline::Pipeline;
pub use planner::{ExecutionExplanation, ExplainStep, Plan, build_plan};
pub use runner::Runner;
pub use stats::SummaryStatistics;
pub use stream::{Element, Stream};
