//! Deterministic randomness for steering.
//!
//! Behaviours never own a generator. The host hands them one per call, seeded
//! from `(global seed, tick, agent, stream)`, so a replay with the same seed
//! reproduces every wander path exactly. Not cryptographic.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Stream used when a behaviour picks its initial heading.
pub const STREAM_START: u64 = 0x5743_4152_5453;
/// Stream used for per-tick steering noise.
pub const STREAM_UPDATE: u64 = 0x5743_5044_5055;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finaliser.
pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

pub fn derive_seed(global_seed: u64, agent_id: u64, stream: u64) -> u64 {
    let x = global_seed ^ mix64(agent_id.wrapping_add(GOLDEN_GAMMA)) ^ mix64(stream);
    mix64(x)
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Uniformly random point on the unit circle in the XY plane.
///
/// The angle is drawn from `[0, 2π)`; the returned vector always has unit
/// length and `z == 0`.
pub fn random_unit_circle<R: RngCore + ?Sized>(rng: &mut R) -> Vec3 {
    let angle = rng.gen::<f32>() * TAU;
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos, sin, 0.0)
}
