use glam::Vec3;
use rand::RngCore;

use crate::behaviour::draw_velocities;
use crate::{DebugDraw, SteeringAgent, SteeringBehaviour, SteeringOutput};

/// Head straight for `target` at full speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Seek {
    pub target: Vec3,
    last_output: SteeringOutput,
}

impl Seek {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            last_output: SteeringOutput::default(),
        }
    }
}

impl SteeringBehaviour for Seek {
    fn update(&mut self, agent: &SteeringAgent, _rng: &mut dyn RngCore) -> SteeringOutput {
        let desired = (self.target - agent.position).normalize_or_zero() * agent.max_speed;
        self.last_output = SteeringOutput::new(desired, agent.velocity);
        self.last_output
    }

    fn debug_draw(&self, agent: &SteeringAgent, draw: &mut dyn DebugDraw) {
        draw_velocities(agent, &self.last_output, draw);
    }
}

/// Head straight away from `target` at full speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flee {
    pub target: Vec3,
    last_output: SteeringOutput,
}

impl Flee {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            last_output: SteeringOutput::default(),
        }
    }
}

impl SteeringBehaviour for Flee {
    fn update(&mut self, agent: &SteeringAgent, _rng: &mut dyn RngCore) -> SteeringOutput {
        let desired = (agent.position - self.target).normalize_or_zero() * agent.max_speed;
        self.last_output = SteeringOutput::new(desired, agent.velocity);
        self.last_output
    }

    fn debug_draw(&self, agent: &SteeringAgent, draw: &mut dyn DebugDraw) {
        draw_velocities(agent, &self.last_output, draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steer_core::seeded_rng;

    #[test]
    fn test_seek() {
        let agent = SteeringAgent::new(5.0, 10.0);
        let mut seek = Seek::new(Vec3::new(10.0, 0.0, 0.0));

        let out = seek.update(&agent, &mut seeded_rng(0));
        assert!(out.steering_velocity.x > 0.0);
        assert!((out.steering_velocity.length() - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_flee() {
        let agent = SteeringAgent::new(5.0, 10.0);
        let mut flee = Flee::new(Vec3::new(10.0, 0.0, 0.0));

        let out = flee.update(&agent, &mut seeded_rng(0));
        assert!(out.steering_velocity.x < 0.0);
    }

    #[test]
    fn seek_at_target_wants_to_stop() {
        let mut agent = SteeringAgent::new(5.0, 10.0);
        agent.velocity = Vec3::new(1.0, 2.0, 0.0);
        let mut seek = Seek::new(Vec3::ZERO);

        let out = seek.update(&agent, &mut seeded_rng(0));
        assert_eq!(out.desired_velocity, Vec3::ZERO);
        assert_eq!(out.steering_velocity, Vec3::new(-1.0, -2.0, 0.0));
    }
}
