pub(crate) mod grouping;
pub(crate) mod reduce;
pub(crate) mod slicing;
pub(crate) mod sorting;
pub(crate) mod stdlib;
pub(crate) mod terminal;

// Only re-export files with top-level functions
pub use stdlib::*;
