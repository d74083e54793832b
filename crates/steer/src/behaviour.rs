use glam::Vec3;
use rand::RngCore;

use crate::{DebugDraw, SteeringAgent};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one behaviour update.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteeringOutput {
    /// Velocity the behaviour would like the agent to have.
    pub desired_velocity: Vec3,
    /// `desired_velocity - agent.velocity`; feed this to the motion integrator.
    pub steering_velocity: Vec3,
}

impl SteeringOutput {
    pub fn new(desired_velocity: Vec3, current_velocity: Vec3) -> Self {
        Self {
            desired_velocity,
            steering_velocity: desired_velocity - current_velocity,
        }
    }
}

/// A pluggable steering behaviour.
///
/// The host calls [`start`](Self::start) once when the behaviour attaches to an
/// agent, then [`update`](Self::update) once per simulation tick. Randomness is
/// always supplied by the caller so runs stay reproducible.
///
/// Behaviours with per-attachment state report it through
/// [`is_started`](Self::is_started); hosts skip `start` for a behaviour that
/// already ran it.
pub trait SteeringBehaviour {
    fn start(&mut self, _agent: &mut SteeringAgent, _rng: &mut dyn RngCore) {}

    fn is_started(&self) -> bool {
        false
    }

    fn update(&mut self, agent: &SteeringAgent, rng: &mut dyn RngCore) -> SteeringOutput;

    fn debug_draw(&self, agent: &SteeringAgent, draw: &mut dyn DebugDraw);
}

impl<B: SteeringBehaviour + ?Sized> SteeringBehaviour for Box<B> {
    fn start(&mut self, agent: &mut SteeringAgent, rng: &mut dyn RngCore) {
        (**self).start(agent, rng)
    }

    fn is_started(&self) -> bool {
        (**self).is_started()
    }

    fn update(&mut self, agent: &SteeringAgent, rng: &mut dyn RngCore) -> SteeringOutput {
        (**self).update(agent, rng)
    }

    fn debug_draw(&self, agent: &SteeringAgent, draw: &mut dyn DebugDraw) {
        (**self).debug_draw(agent, draw)
    }
}

/// Lines every behaviour contributes to debug output: desired and steering
/// velocity, both anchored at the agent.
pub fn draw_velocities(agent: &SteeringAgent, output: &SteeringOutput, draw: &mut dyn DebugDraw) {
    draw.line(agent.position, agent.position + output.desired_velocity);
    draw.line(agent.position, agent.position + output.steering_velocity);
}
