//! Headless host loop.
//!
//! Plays the role of the engine's per-frame scheduler: owns a set of agents and
//! their behaviours and advances them one tick at a time in stable id order.

use steer_core::{TickContext, STREAM_START, STREAM_UPDATE};

use crate::{DebugDraw, SteerError, SteerResult, SteeringAgent, SteeringBehaviour, SteeringOutput};

#[derive(Debug, Clone)]
pub struct RunnerEntry<B> {
    pub id: u64,
    pub agent: SteeringAgent,
    pub behaviour: B,
    started: bool,
}

impl<B> RunnerEntry<B> {
    pub fn is_started(&self) -> bool {
        self.started
    }
}

#[derive(Debug, Clone)]
pub struct SteeringRunner<B> {
    entries: Vec<RunnerEntry<B>>,
}

impl<B> Default for SteeringRunner<B> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<B: SteeringBehaviour> SteeringRunner<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent. Its behaviour starts on the next `step` unless it was
    /// already started by the caller.
    pub fn insert(&mut self, id: u64, agent: SteeringAgent, behaviour: B) -> SteerResult<()> {
        let index = match self.entries.binary_search_by_key(&id, |e| e.id) {
            Ok(_) => return Err(SteerError::DuplicateAgent(id)),
            Err(index) => index,
        };
        self.entries.insert(
            index,
            RunnerEntry {
                id,
                agent,
                started: behaviour.is_started(),
                behaviour,
            },
        );
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Option<(SteeringAgent, B)> {
        let index = self.entries.binary_search_by_key(&id, |e| e.id).ok()?;
        let entry = self.entries.remove(index);
        Some((entry.agent, entry.behaviour))
    }

    pub fn get(&self, id: u64) -> Option<&RunnerEntry<B>> {
        let index = self.entries.binary_search_by_key(&id, |e| e.id).ok()?;
        self.entries.get(index)
    }

    /// Entries in ascending id order.
    pub fn agents(&self) -> impl Iterator<Item = &RunnerEntry<B>> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every agent by one tick and return each agent's steering output.
    pub fn step(&mut self, ctx: &TickContext) -> Vec<(u64, SteeringOutput)> {
        self.step_observed(ctx, |_, _| {})
    }

    /// Like [`step`](Self::step), but hands each entry to `observe` after its
    /// update and before it moves, so the observer sees the pose the decision
    /// was made from.
    pub fn step_observed<F>(&mut self, ctx: &TickContext, mut observe: F) -> Vec<(u64, SteeringOutput)>
    where
        F: FnMut(&RunnerEntry<B>, SteeringOutput),
    {
        let dt = ctx.dt_seconds.max(0.0);
        let mut outputs = Vec::with_capacity(self.entries.len());

        for entry in self.entries.iter_mut() {
            if !entry.started {
                let mut rng = ctx.rng_for_agent(entry.id, STREAM_START);
                entry.behaviour.start(&mut entry.agent, &mut rng);
                entry.started = true;
                tracing::debug!(agent = entry.id, tick = ctx.tick, "steering behaviour started");
            }

            let mut rng = ctx.rng_for_agent(entry.id, STREAM_UPDATE);
            let output = entry.behaviour.update(&entry.agent, &mut rng);
            observe(entry, output);

            entry.agent.apply_force(output.steering_velocity, dt);
            entry.agent.integrate(dt);

            outputs.push((entry.id, output));
        }

        outputs
    }

    pub fn debug_draw(&self, draw: &mut dyn DebugDraw) {
        for entry in &self.entries {
            entry.behaviour.debug_draw(&entry.agent, draw);
        }
    }
}
