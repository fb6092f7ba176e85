//! Filesystem-backed sources.
//!
//! These are conveniences around [`from_supplier`](crate::from_supplier): each
//! one re-opens its file or directory on every terminal run and reports failures
//! as [`Error::Source`](crate::Error::Source).

#[cfg_attr(docsrs, doc(cfg(feature = "io-fs")))]
#[cfg(feature = "io-fs")]
pub mod fs;

#[cfg_attr(docsrs, doc(cfg(feature = "io-glob")))]
#[cfg(feature = "io-glob")]
pub mod glob;
