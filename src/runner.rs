//! Drives terminal evaluation.
//!
//! Every terminal operation funnels through [`Runner::run`]: open the chain, pull
//! one element at a time, fold it into the terminal's state, and stop early when
//! the terminal says it has seen enough. The first `Err` pulled aborts the run and
//! is returned as-is; state accumulated so far is dropped.

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::stream::{Element, Stream};
use std::ops::ControlFlow;
use std::sync::Arc;
use tracing::debug;

/// Executes terminal operations for streams of one pipeline.
#[derive(Clone, Debug)]
pub struct Runner {
    pub name: Arc<str>,
    pub max_materialized: Option<usize>,
}

impl Runner {
    /// Runner configured from a pipeline's options.
    #[must_use]
    pub fn for_pipeline(p: &Pipeline) -> Self {
        let opts = p.options();
        Self {
            name: Arc::from(opts.name.as_str()),
            max_materialized: opts.max_materialized,
        }
    }

    /// Pull `stream` to completion (or until `step` breaks), threading `init` through `step`.
    ///
    /// # Errors
    ///
    /// The first error raised by the source, by a stage, or by `step` itself.
    pub fn run<T, S, F>(&self, stream: &Stream<T>, op: &'static str, init: S, mut step: F) -> Result<S>
    where
        T: Element,
        F: FnMut(S, T) -> Result<ControlFlow<S, S>>,
    {
        let span = tracing::debug_span!("terminal", pipeline = %self.name, node = stream.node_id().raw(), op);
        let _enter = span.enter();

        let mut state = init;
        let mut pulled = 0usize;
        let mut short_circuited = false;
        for item in (stream.stage)()? {
            let item = item?;
            pulled += 1;
            match step(state, item)? {
                ControlFlow::Continue(s) => state = s,
                ControlFlow::Break(s) => {
                    state = s;
                    short_circuited = true;
                    break;
                }
            }
        }

        debug!(pulled, short_circuited, "terminal finished");
        Ok(state)
    }

    /// Materialize every element into a `Vec`, honouring the materialization cap.
    ///
    /// # Errors
    ///
    /// Source failures, or [`Error::CapacityExceeded`] when the cap is hit.
    pub fn run_collect<T: Element>(&self, stream: &Stream<T>) -> Result<Vec<T>> {
        let cap = self.max_materialized;
        self.run(stream, "collect_seq", Vec::new(), |mut out, t| {
            out.push(t);
            check_cap("collect_seq", out.len(), cap)?;
            Ok(ControlFlow::Continue(out))
        })
    }
}

pub(crate) fn check_cap(stage: &str, buffered: usize, cap: Option<usize>) -> Result<()> {
    match cap {
        Some(cap) if buffered > cap => Err(Error::CapacityExceeded {
            stage: stage.to_string(),
            cap,
        }),
        _ => Ok(()),
    }
}
