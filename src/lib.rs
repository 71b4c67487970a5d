//! `mcpost` is a small toolkit of libraries for post-processing MCNP output
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use mcpost_utils as utils;

#[cfg(feature = "outp")]
#[cfg_attr(docsrs, doc(cfg(feature = "outp")))]
#[doc(inline)]
pub use mcpost_outp as outp;
