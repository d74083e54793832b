use rand::rngs::SmallRng;

use crate::{rng, AgentId};

/// Per-tick context handed to every steering update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl Default for TickContext {
    fn default() -> Self {
        Self {
            tick: 0,
            dt_seconds: 1.0 / 60.0,
            seed: 0,
        }
    }
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, seed: u64) -> Self {
        Self {
            tick,
            dt_seconds,
            seed,
        }
    }

    /// Generator unique to this tick, agent and stream.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SmallRng {
        let tick_seed = self.seed ^ rng::mix64(self.tick);
        rng::seeded_rng(agent.stream_seed(tick_seed, stream))
    }

    /// Context for the following tick with the same seed and timestep.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..self
        }
    }
}
