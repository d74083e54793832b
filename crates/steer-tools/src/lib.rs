//! Tooling primitives for steering behaviours.
//!
//! This crate is intentionally lightweight and engine-agnostic. It records what
//! a behaviour decided each tick so paths can be replayed, plotted or diffed.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, SteeringSample, TraceError, TraceLog, TraceSink, VecTraceSink};

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub use trace::JsonLinesSink;
