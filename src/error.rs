//! Error taxonomy for pipeline construction and evaluation.
//!
//! Two kinds of failure matter to callers:
//!
//! - **Caller bugs** ([`Error::InvalidArgument`]) are reported by the call that
//!   receives the bad argument, before any stage has run.
//! - **Environmental failures** ([`Error::Source`]) come from a source supplier
//!   (a directory that vanished, an unreadable file, ...). They surface from the
//!   terminal operation that was pulling elements and abort the whole chain; no
//!   partial result is ever returned.
//!
//! Empty input is *not* an error. `reduce` and `find_first` return `None`,
//! `average` returns `0.0`, `summary_statistics` reports a zero count.

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building or evaluating a [`Stream`](crate::Stream).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was rejected by the operation that received it.
    #[error("invalid argument to `{op}`: {reason}")]
    InvalidArgument {
        /// Operation that rejected the argument.
        op: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// The source supplier failed while opening or while being pulled.
    #[error("source failed: {0:#}")]
    Source(#[from] anyhow::Error),

    /// A materializing step buffered more elements than the configured cap.
    #[error("`{stage}` exceeded the materialization cap of {cap} elements")]
    CapacityExceeded {
        /// Stage that hit the cap.
        stage: String,
        /// Configured cap.
        cap: usize,
    },

    /// Pipeline options could not be parsed.
    #[error("invalid pipeline options: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    /// `true` for errors caused by the caller (bad arguments or options).
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::Config(_))
    }
}
