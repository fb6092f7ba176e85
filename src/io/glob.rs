//! Glob-pattern file sources.

use crate::error::{Error, Result};
use crate::helpers::from_supplier;
use crate::pipeline::Pipeline;
use crate::stream::Stream;
use anyhow::Context;
use glob::{Pattern, glob};
use std::path::PathBuf;

/// Regular files matching `pattern`, in the lexicographic order `glob` yields them.
///
/// Directories that match are skipped. Supports `*`, `?`, `**`, `[abc]` and `[!abc]`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `pattern` does not parse. Filesystem failures
/// while walking surface later, from the terminal, as [`Error::Source`].
///
/// ```no_run
/// use ironstream::*;
/// use ironstream::io::glob::glob_paths;
///
/// let p = Pipeline::default();
/// let logs = glob_paths(&p, "logs/**/*.log")?.count()?;
/// # Ok::<(), ironstream::Error>(())
/// ```
pub fn glob_paths(p: &Pipeline, pattern: &str) -> Result<Stream<PathBuf>> {
    Pattern::new(pattern).map_err(|e| Error::invalid("glob_paths", format!("{pattern}: {e}")))?;

    let pattern = pattern.to_string();
    let label = format!("glob {pattern}");
    Ok(from_supplier(p, &label, move || {
        let paths = glob(&pattern).with_context(|| format!("invalid glob pattern: {pattern}"))?;
        let shown = pattern.clone();
        Ok(paths
            .map(move |entry| {
                entry.with_context(|| format!("error reading glob entry for pattern: {shown}"))
            })
            .filter(|entry| entry.as_ref().map_or(true, |path| path.is_file())))
    }))
}
