//! Wander: smooth random exploration.
//!
//! An imaginary circle sits `circle_distance` ahead of the agent. Each tick the
//! previous target on that circle is nudged by a small random displacement and
//! then projected back onto the circumference; the agent seeks the result.
//! Because the noise accumulates on the circle instead of being drawn fresh
//! every frame, heading changes stay small and the path looks organic.

use glam::Vec3;
use rand::RngCore;
use steer_core::{direction_or, random_unit_circle, NORMALIZE_EPSILON};

use crate::behaviour::draw_velocities;
use crate::error::{require_non_negative, require_positive};
use crate::{DebugDraw, SteerResult, SteeringAgent, SteeringBehaviour, SteeringOutput};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for [`Wander`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Radius of the wander circle.
    pub circle_radius: f32,
    /// Distance from the agent to the centre of the circle, along its forward.
    pub circle_distance: f32,
    /// Largest random displacement applied to the target per tick.
    pub max_random_displacement: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            circle_radius: 150.0,
            circle_distance: 250.0,
            max_random_displacement: 25.0,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> SteerResult<()> {
        require_positive("circle_radius", self.circle_radius)?;
        require_non_negative("circle_distance", self.circle_distance)?;
        require_non_negative("max_random_displacement", self.max_random_displacement)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wander {
    config: WanderConfig,
    previous_target: Vec3,
    started: bool,
    last_output: SteeringOutput,
}

impl Wander {
    pub fn new(config: WanderConfig) -> SteerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            previous_target: Vec3::ZERO,
            started: false,
            last_output: SteeringOutput::default(),
        })
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Target chosen by the most recent update (or seeded by `start`).
    pub fn previous_target(&self) -> Vec3 {
        self.previous_target
    }

    pub fn last_output(&self) -> SteeringOutput {
        self.last_output
    }

    /// Centre of the wander circle for the agent's current pose.
    pub fn circle_center(&self, agent: &SteeringAgent) -> Vec3 {
        agent.position + agent.forward * self.config.circle_distance
    }

    /// Map `tentative` back onto the circle around `center`.
    ///
    /// When `tentative` sits on the centre the direction is undefined; the
    /// previous heading on the circle is kept, then the agent's forward.
    fn project_onto_circle(&self, agent: &SteeringAgent, center: Vec3, tentative: Vec3) -> Vec3 {
        let offset = tentative - center;
        let direction = if offset.is_finite() && offset.length() > NORMALIZE_EPSILON {
            offset.normalize()
        } else {
            tracing::debug!(
                ?tentative,
                ?center,
                "wander target collapsed onto circle centre, keeping previous heading"
            );
            direction_or(self.previous_target - center, agent.forward)
        };
        center + direction * self.config.circle_radius
    }
}

impl SteeringBehaviour for Wander {
    fn start(&mut self, agent: &mut SteeringAgent, rng: &mut dyn RngCore) {
        // Random initial heading.
        let heading = random_unit_circle(rng);
        agent.set_forward(heading);

        // Seed the target at the far side of the circle so the first update
        // does not snap.
        let reach = self.config.circle_distance + self.config.circle_radius;
        self.previous_target = agent.position + heading * reach;
        self.started = true;
        self.last_output = SteeringOutput::default();
    }

    fn is_started(&self) -> bool {
        self.started
    }

    fn update(&mut self, agent: &SteeringAgent, rng: &mut dyn RngCore) -> SteeringOutput {
        if !self.started {
            // `update` cannot turn the agent, so an unstarted wander seeds its
            // target along the current forward instead of a random heading.
            let reach = self.config.circle_distance + self.config.circle_radius;
            self.previous_target = agent.position + agent.forward * reach;
            self.started = true;
        }

        let displacement = random_unit_circle(rng) * self.config.max_random_displacement;
        let tentative = self.previous_target + displacement;

        let center = self.circle_center(agent);
        let target = self.project_onto_circle(agent, center, tentative);
        self.previous_target = target;

        let to_target = target - agent.position;
        let heading = if to_target.is_finite() && to_target.length() > NORMALIZE_EPSILON {
            to_target.normalize()
        } else {
            tracing::debug!(?target, "wander target coincides with agent, steering along forward");
            agent.forward
        };

        let output = SteeringOutput::new(heading * agent.max_speed, agent.velocity);
        tracing::trace!(?center, ?target, steering = ?output.steering_velocity, "wander update");
        self.last_output = output;
        output
    }

    fn debug_draw(&self, agent: &SteeringAgent, draw: &mut dyn DebugDraw) {
        draw_velocities(agent, &self.last_output, draw);
        draw.circle(self.circle_center(agent), self.config.circle_radius);
    }
}
