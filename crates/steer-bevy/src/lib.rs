//! Bevy adapter for the `steer` crates.
//!
//! This crate provides a minimal integration layer that:
//! - keeps `steer` engine-agnostic,
//! - preserves determinism via stable agent IDs and per-tick seeded randomness,
//! - and runs wander in three chained sets: start, think, integrate.
//!
//! ## Scheduling
//!
//! Steering is simulation logic and belongs in [`bevy_app::FixedUpdate`] when the
//! app has Bevy's time plugins. Minimal apps without time can keep the default
//! [`bevy_app::Update`] schedule and drive `SteerTick.dt_seconds` themselves.
//!
//! ## Features
//!
//! - `time`: `SteerTick.dt_seconds` follows `bevy_time::Time::delta_secs()`.
//! - `transform-sync`: writes each body's position and facing into its `Transform`.
//! - `debug-gizmos`: [`SteerDebugPlugin`] draws wander circles and steering lines.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use bevy_app::{App, FixedUpdate, Plugin, Update};
use bevy_ecs::prelude::{Added, Bundle, Component, Query, Res, ResMut, Resource, SystemSet};
use bevy_ecs::schedule::IntoScheduleConfigs;
use steer::{SteerResult, SteeringAgent, SteeringBehaviour, SteeringOutput, Wander, WanderConfig};
use steer_core::{AgentId, TickContext, STREAM_START, STREAM_UPDATE};

#[cfg(feature = "time")]
use bevy_time::Time;

#[cfg(feature = "transform-sync")]
use bevy_transform::components::Transform;

#[cfg(feature = "debug-gizmos")]
#[cfg_attr(docsrs, doc(cfg(feature = "debug-gizmos")))]
pub mod debug;

#[cfg(feature = "debug-gizmos")]
#[cfg_attr(docsrs, doc(cfg(feature = "debug-gizmos")))]
pub use debug::{draw_wander_gizmos, SteerDebugPlugin, SteeringDebugConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BevyAgentId(pub u64);

impl AgentId for BevyAgentId {
    fn stable_id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Component)]
pub struct SteerAgent(pub BevyAgentId);

/// Kinematic body moved by the steering integrator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(Component)]
pub struct SteerBody(pub SteeringAgent);

#[derive(Debug, Clone, PartialEq)]
#[derive(Component)]
pub struct SteerWander(pub Wander);

/// Last steering decision, kept for integration and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(Component)]
pub struct SteerOutput(pub SteeringOutput);

/// Everything a wandering entity needs.
#[derive(Bundle)]
pub struct WanderAgentBundle {
    pub agent: SteerAgent,
    pub body: SteerBody,
    pub wander: SteerWander,
    pub output: SteerOutput,
}

impl WanderAgentBundle {
    pub fn new(id: u64, body: SteeringAgent, config: WanderConfig) -> SteerResult<Self> {
        Ok(Self {
            agent: SteerAgent(BevyAgentId(id)),
            body: SteerBody(body),
            wander: SteerWander(Wander::new(config)?),
            output: SteerOutput::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[derive(Resource)]
pub struct SteerTick {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl Default for SteerTick {
    fn default() -> Self {
        Self {
            tick: 0,
            dt_seconds: 1.0 / 60.0,
            seed: 0,
        }
    }
}

impl SteerTick {
    pub fn context(&self) -> TickContext {
        TickContext::new(self.tick, self.dt_seconds, self.seed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteerSchedule {
    Update,
    FixedUpdate,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SteerSet {
    Start,
    Think,
    Integrate,
}

#[cfg(feature = "time")]
pub fn sync_tick_dt_from_bevy_time(time: Option<Res<Time>>, mut tick: ResMut<SteerTick>) {
    let Some(time) = time else {
        return;
    };

    let dt = time.delta_secs();
    if dt.is_finite() && dt.is_sign_positive() {
        tick.dt_seconds = dt;
    }
}

/// Picks a random initial heading for every wanderer spawned since the last run.
pub fn start_wander(
    tick: Res<SteerTick>,
    mut query: Query<(&SteerAgent, &mut SteerBody, &mut SteerWander), Added<SteerWander>>,
) {
    let ctx = tick.context();
    for (agent, mut body, mut wander) in query.iter_mut() {
        if wander.0.is_started() {
            continue;
        }
        let mut rng = ctx.rng_for_agent(agent.0, STREAM_START);
        wander.0.start(&mut body.0, &mut rng);
        tracing::debug!(agent = agent.0 .0, heading = ?body.0.forward, "wander started");
    }
}

pub fn update_wander(
    tick: Res<SteerTick>,
    mut query: Query<(&SteerAgent, &SteerBody, &mut SteerWander, &mut SteerOutput)>,
) {
    let ctx = tick.context();
    let mut seen = BTreeSet::new();
    for (agent, body, mut wander, mut output) in query.iter_mut() {
        if !seen.insert(agent.0) {
            panic!(
                "duplicate SteerAgent id {} detected; stable IDs must be unique for deterministic steering",
                agent.0 .0
            );
        }

        let mut rng = ctx.rng_for_agent(agent.0, STREAM_UPDATE);
        output.0 = wander.0.update(&body.0, &mut rng);
    }
}

pub fn integrate_bodies(tick: Res<SteerTick>, mut query: Query<(&mut SteerBody, &SteerOutput)>) {
    let dt = tick.dt_seconds.max(0.0);
    for (mut body, output) in query.iter_mut() {
        body.0.apply_force(output.0.steering_velocity, dt);
        body.0.integrate(dt);
    }
}

pub fn advance_tick(mut tick: ResMut<SteerTick>) {
    tick.tick = tick.tick.wrapping_add(1);
}

/// Writes body position into `Transform.translation` and turns the transform's
/// local up axis toward the body's forward.
#[cfg(feature = "transform-sync")]
pub fn sync_transforms(mut query: Query<(&SteerBody, &mut Transform)>) {
    for (body, mut transform) in query.iter_mut() {
        transform.translation = body.0.position;
        transform.rotation = glam::Quat::from_rotation_arc(glam::Vec3::Y, body.0.forward);
    }
}

pub struct SteerPlugin {
    schedule: SteerSchedule,
}

impl Default for SteerPlugin {
    fn default() -> Self {
        Self {
            schedule: SteerSchedule::Update,
        }
    }
}

impl SteerPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_fixed_update(mut self) -> Self {
        self.schedule = SteerSchedule::FixedUpdate;
        self
    }

    pub fn schedule(&self) -> SteerSchedule {
        self.schedule
    }
}

impl Plugin for SteerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SteerTick>();

        let systems = (
            #[cfg(feature = "time")]
            sync_tick_dt_from_bevy_time
                .in_set(SteerSet::Start)
                .before(start_wander),
            start_wander.in_set(SteerSet::Start),
            update_wander.in_set(SteerSet::Think),
            integrate_bodies.in_set(SteerSet::Integrate),
            #[cfg(feature = "transform-sync")]
            sync_transforms
                .in_set(SteerSet::Integrate)
                .after(integrate_bodies),
            advance_tick
                .in_set(SteerSet::Integrate)
                .after(integrate_bodies),
        );

        match self.schedule {
            SteerSchedule::Update => {
                app.configure_sets(
                    Update,
                    (SteerSet::Start, SteerSet::Think, SteerSet::Integrate).chain(),
                );
                app.add_systems(Update, systems);
            }
            SteerSchedule::FixedUpdate => {
                app.configure_sets(
                    FixedUpdate,
                    (SteerSet::Start, SteerSet::Think, SteerSet::Integrate).chain(),
                );
                app.add_systems(FixedUpdate, systems);
            }
        }
    }
}
