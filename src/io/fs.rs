//! Directory listings and line-oriented text files.
//!
//! ```no_run
//! use ironstream::*;
//! use ironstream::io::fs::read_dir;
//!
//! let p = Pipeline::default();
//! let first_rs = read_dir(&p, "src")
//!     .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
//!     .find_first()?;
//! # Ok::<(), ironstream::Error>(())
//! ```

use crate::helpers::from_supplier;
use crate::pipeline::Pipeline;
use crate::stream::Stream;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Paths of the entries of `dir`, pulled one at a time.
///
/// Entry order is whatever the platform returns; sort downstream if it matters.
pub fn read_dir(p: &Pipeline, dir: impl AsRef<Path>) -> Stream<PathBuf> {
    let dir = dir.as_ref().to_path_buf();
    let label = format!("dir {}", dir.display());
    from_supplier(p, &label, move || {
        let entries = std::fs::read_dir(&dir)
            .with_context(|| format!("listing directory {}", dir.display()))?;
        let shown = dir.display().to_string();
        Ok(entries.map(move |entry| {
            entry
                .map(|e| e.path())
                .with_context(|| format!("reading entry of {shown}"))
        }))
    })
}

/// Lines of the text file at `path`, without line terminators.
pub fn read_lines(p: &Pipeline, path: impl AsRef<Path>) -> Stream<String> {
    let path = path.as_ref().to_path_buf();
    let label = format!("lines {}", path.display());
    from_supplier(p, &label, move || {
        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let shown = path.display().to_string();
        Ok(BufReader::new(file)
            .lines()
            .map(move |line| line.with_context(|| format!("reading {shown}"))))
    })
}
