//! Steering behaviours for autonomous agents.
//!
//! Each behaviour turns an agent's current kinematic state into a steering
//! velocity for one simulation step:
//! - [`Wander`]: smooth, non-repeating exploration driven by a wander circle
//! - [`Seek`]: head straight for a point
//! - [`Flee`]: head straight away from a point
//!
//! ## Usage
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use steer::{SteeringAgent, SteeringBehaviour, Wander, WanderConfig};
//!
//! let mut agent = SteeringAgent::new(50.0, 100.0);
//! let mut wander = Wander::new(WanderConfig::default()).unwrap();
//! let mut rng = SmallRng::seed_from_u64(1);
//!
//! wander.start(&mut agent, &mut rng);
//! let out = wander.update(&agent, &mut rng);
//! agent.apply_force(out.steering_velocity, 1.0 / 60.0);
//! agent.integrate(1.0 / 60.0);
//! ```
//!
//! Behaviours are engine-agnostic; `steer-bevy` wires them into Bevy and
//! [`SteeringRunner`] drives them headlessly.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod behaviour;
pub mod debug;
pub mod error;
pub mod runner;
pub mod seek;
pub mod wander;

pub use agent::SteeringAgent;
pub use behaviour::{SteeringBehaviour, SteeringOutput};
pub use debug::{DebugDraw, DebugShape, NullDebugDraw, RecordingDebugDraw};
pub use error::{SteerError, SteerResult};
pub use runner::{RunnerEntry, SteeringRunner};
pub use seek::{Flee, Seek};
pub use wander::{Wander, WanderConfig};

pub use steer_core::{TickContext, Vec3};
