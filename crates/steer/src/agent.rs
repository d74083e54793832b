use glam::Vec3;
use steer_core::{direction_or, truncate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kinematic state of a steered agent.
///
/// This is the slice of the host's agent that behaviours read: where it is,
/// which way it faces, how fast it moves and how fast it may move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SteeringAgent {
    /// World position.
    pub position: Vec3,
    /// Facing direction (unit vector). Wander offsets its circle along this.
    pub forward: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Maximum movement speed.
    pub max_speed: f32,
    /// Maximum steering force.
    pub max_force: f32,
    /// Mass (affects acceleration).
    pub mass: f32,
}

impl Default for SteeringAgent {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Y,
            velocity: Vec3::ZERO,
            max_speed: 5.0,
            max_force: 10.0,
            mass: 1.0,
        }
    }
}

impl SteeringAgent {
    pub fn new(max_speed: f32, max_force: f32) -> Self {
        Self {
            max_speed,
            max_force,
            ..Default::default()
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Point the agent along `direction`. Zero or non-finite input is ignored.
    pub fn set_forward(&mut self, direction: Vec3) {
        self.forward = direction_or(direction, self.forward);
    }

    /// Apply a steering force and return the new velocity.
    pub fn apply_force(&mut self, force: Vec3, dt: f32) -> Vec3 {
        let force = truncate(force, self.max_force);
        // a = F / m
        let acceleration = force / self.mass.max(0.001);
        self.velocity = truncate(self.velocity + acceleration * dt, self.max_speed);
        self.velocity
    }

    /// Move by the current velocity; forward follows the direction of travel.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        if self.velocity.length() > 0.001 {
            self.set_forward(self.velocity);
        }
    }
}
