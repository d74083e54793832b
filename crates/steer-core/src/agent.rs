use core::fmt::Debug;

use crate::rng::derive_seed;

/// Key for an agent's wander streams.
///
/// Two agents with the same `stable_id` share every random draw, so ids must be
/// unique within a run. Hosts iterate agents in `Ord` order when they need a
/// stable visiting order (logs, traces).
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;

    /// Seed for this agent's `stream` under `tick_seed`.
    fn stream_seed(self, tick_seed: u64, stream: u64) -> u64 {
        derive_seed(tick_seed, self.stable_id(), stream)
    }
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        u64::from(self)
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
