//! Debug-draw sink.
//!
//! Behaviours describe what they would like drawn; the host decides how (gizmos,
//! a recorder for tests, nothing at all).

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub trait DebugDraw {
    fn circle(&mut self, center: Vec3, radius: f32);

    fn line(&mut self, from: Vec3, to: Vec3);
}

#[derive(Debug, Default)]
pub struct NullDebugDraw;

impl DebugDraw for NullDebugDraw {
    fn circle(&mut self, _center: Vec3, _radius: f32) {}

    fn line(&mut self, _from: Vec3, _to: Vec3) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DebugShape {
    Circle { center: Vec3, radius: f32 },
    Line { from: Vec3, to: Vec3 },
}

#[derive(Debug, Default)]
pub struct RecordingDebugDraw {
    pub shapes: Vec<DebugShape>,
}

impl RecordingDebugDraw {
    pub fn circles(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.shapes.iter().filter_map(|shape| match *shape {
            DebugShape::Circle { center, radius } => Some((center, radius)),
            DebugShape::Line { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

impl DebugDraw for RecordingDebugDraw {
    fn circle(&mut self, center: Vec3, radius: f32) {
        self.shapes.push(DebugShape::Circle { center, radius });
    }

    fn line(&mut self, from: Vec3, to: Vec3) {
        self.shapes.push(DebugShape::Line { from, to });
    }
}
