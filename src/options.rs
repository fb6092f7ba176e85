//! Pipeline configuration.
//!
//! [`PipelineOptions`] are attached to a [`Pipeline`](crate::Pipeline) when it is
//! created and shared by every stream built from it. They can be built in code or
//! loaded from JSON:
//!
//! ```
//! use ironstream::{Pipeline, PipelineOptions};
//!
//! let opts = PipelineOptions::from_json(r#"{ "name": "friends", "max_materialized": 1000 }"#)?;
//! let p = Pipeline::with_options(opts)?;
//! assert_eq!(p.options().name, "friends");
//! assert_eq!(p.options().inspect_limit, 10);
//! # Ok::<(), ironstream::Error>(())
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every stream of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Name recorded on every `tracing` span emitted by terminal operations.
    pub name: String,
    /// How many elements `debug_inspect` logs per run before going quiet.
    pub inspect_limit: usize,
    /// Upper bound on elements a materializing step (collect, sort, group) may buffer.
    /// `None` disables the guard.
    pub max_materialized: Option<usize>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            name: "pipeline".to_string(),
            inspect_limit: 10,
            max_materialized: None,
        }
    }
}

impl PipelineOptions {
    /// Parse options from a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the document is malformed, [`Error::InvalidArgument`]
    /// if it parses but fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Set the pipeline name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the materialization cap.
    #[must_use]
    pub const fn with_max_materialized(mut self, cap: usize) -> Self {
        self.max_materialized = Some(cap);
        self
    }

    /// Check the options for values no pipeline can run with.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for an empty name or a zero materialization cap.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid("PipelineOptions", "name must not be empty"));
        }
        if self.max_materialized == Some(0) {
            return Err(Error::invalid(
                "PipelineOptions",
                "max_materialized must be at least 1 when set",
            ));
        }
        Ok(())
    }
}
