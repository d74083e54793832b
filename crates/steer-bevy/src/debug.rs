//! Gizmo rendering for steering debug output.
//!
//! Behaviours emit shapes through [`steer::DebugDraw`]; this module forwards them
//! to Bevy gizmos. Circles are drawn as line segments in the XY plane, which is
//! the plane wander picks its headings in.

use bevy_app::{App, Plugin, PostUpdate};
use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_gizmos::gizmos::Gizmos;
use bevy_math::Vec3;
use steer::{DebugDraw, SteeringBehaviour};

use crate::{SteerBody, SteerWander};

#[derive(Resource, Debug, Clone)]
pub struct SteeringDebugConfig {
    pub enabled: bool,
    /// Wander circle color (RGBA).
    pub circle_color: [f32; 4],
    /// Desired and steering velocity color (RGBA).
    pub velocity_color: [f32; 4],
    pub circle_segments: usize,
}

impl Default for SteeringDebugConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            circle_color: [1.0, 1.0, 1.0, 0.4],
            velocity_color: [0.0, 1.0, 1.0, 1.0],
            circle_segments: 32,
        }
    }
}

fn color_from_rgba(rgba: [f32; 4]) -> Color {
    Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// [`DebugDraw`] sink backed by a gizmo buffer.
pub struct GizmoDebugDraw<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    circle_color: Color,
    line_color: Color,
    segments: usize,
}

impl<'a, 'w, 's> GizmoDebugDraw<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, config: &SteeringDebugConfig) -> Self {
        Self {
            gizmos,
            circle_color: color_from_rgba(config.circle_color),
            line_color: color_from_rgba(config.velocity_color),
            segments: config.circle_segments.max(3),
        }
    }
}

impl DebugDraw for GizmoDebugDraw<'_, '_, '_> {
    fn circle(&mut self, center: Vec3, radius: f32) {
        for i in 0..self.segments {
            let angle1 = (i as f32 / self.segments as f32) * std::f32::consts::TAU;
            let angle2 = ((i + 1) as f32 / self.segments as f32) * std::f32::consts::TAU;

            let p1 = center + Vec3::new(angle1.cos() * radius, angle1.sin() * radius, 0.0);
            let p2 = center + Vec3::new(angle2.cos() * radius, angle2.sin() * radius, 0.0);

            self.gizmos.line(p1, p2, self.circle_color);
        }
    }

    fn line(&mut self, from: Vec3, to: Vec3) {
        self.gizmos.line(from, to, self.line_color);
    }
}

/// Draws every wanderer's circle plus its desired and steering velocities.
pub fn draw_wander_gizmos(
    config: Option<Res<SteeringDebugConfig>>,
    mut gizmos: Gizmos,
    query: Query<(&SteerBody, &SteerWander)>,
) {
    let config = config.map(|c| c.clone()).unwrap_or_default();
    if !config.enabled {
        return;
    }

    let mut draw = GizmoDebugDraw::new(&mut gizmos, &config);
    for (body, wander) in query.iter() {
        wander.0.debug_draw(&body.0, &mut draw);
    }
}

/// Adds [`draw_wander_gizmos`] to `PostUpdate`. Requires Bevy's gizmo plugin.
#[derive(Default)]
pub struct SteerDebugPlugin;

impl Plugin for SteerDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SteeringDebugConfig>();
        app.add_systems(PostUpdate, draw_wander_gizmos);
    }
}
