//! Simulation configuration, loaded from a YAML file.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use steer::{SteeringAgent, WanderConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Wander circle tunables
    pub wander: WanderConfig,

    /// Kinematic limits shared by every spawned agent
    pub agent: AgentConfig,

    /// Population and run length
    pub sim: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub max_speed: f32,
    pub max_force: f32,
    pub mass: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_speed: 100.0,
            max_force: 200.0,
            mass: 1.0,
        }
    }
}

impl AgentConfig {
    pub fn to_agent(&self) -> SteeringAgent {
        SteeringAgent {
            mass: self.mass,
            ..SteeringAgent::new(self.max_speed, self.max_force)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of agents to spawn
    pub agents: u64,

    /// Ticks to simulate
    pub ticks: u64,

    /// Fixed timestep in seconds
    pub dt_seconds: f32,

    /// Global seed; every agent's random stream derives from it
    pub seed: u64,

    /// Distance between neighbouring spawn points along +X
    pub spawn_spacing: f32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            agents: 8,
            ticks: 600,
            dt_seconds: 1.0 / 60.0,
            seed: 0,
            spawn_spacing: 50.0,
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.wander.validate().context("invalid wander config")?;

        let agent = &self.agent;
        ensure!(
            agent.max_speed.is_finite() && agent.max_speed > 0.0,
            "agent.max_speed must be positive, got {}",
            agent.max_speed
        );
        ensure!(
            agent.max_force.is_finite() && agent.max_force > 0.0,
            "agent.max_force must be positive, got {}",
            agent.max_force
        );
        ensure!(
            agent.mass.is_finite() && agent.mass > 0.0,
            "agent.mass must be positive, got {}",
            agent.mass
        );

        let sim = &self.sim;
        ensure!(
            sim.dt_seconds.is_finite() && sim.dt_seconds > 0.0,
            "sim.dt_seconds must be positive, got {}",
            sim.dt_seconds
        );
        ensure!(
            sim.spawn_spacing.is_finite(),
            "sim.spawn_spacing must be finite, got {}",
            sim.spawn_spacing
        );
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }
}
