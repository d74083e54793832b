//! Deterministic, engine-agnostic steering primitives.
//!
//! Everything a steering behaviour needs from its host that is not the agent
//! itself: stable agent identifiers, the per-tick context, seeded randomness and
//! a few vector helpers on top of [`glam::Vec3`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod math;
pub mod rng;
pub mod tick;

pub use agent::AgentId;
pub use glam::Vec3;
pub use math::{direction_or, truncate, NORMALIZE_EPSILON};
pub use rng::{derive_seed, mix64, random_unit_circle, seeded_rng, STREAM_START, STREAM_UPDATE};
pub use tick::TickContext;
