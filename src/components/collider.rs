//! Visibility and overlap components.
//!
//! - [`Renderable`] – whether the host should draw the entity
//! - [`SphereCollider`] – sphere volume used by
//!   [`crate::systems::collision::collision_detector`]

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Visible state of an entity as seen by the host renderer.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderable {
    pub visible: bool,
}

impl Default for Renderable {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Renderable {
    pub fn hidden() -> Self {
        Self { visible: false }
    }
}

/// Sphere overlap volume centred on the entity's position.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct SphereCollider {
    pub radius: f32,
    /// Disabled colliders never take part in overlap tests.
    pub enabled: bool,
}

impl SphereCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            enabled: true,
        }
    }

    /// Sphere vs sphere overlap at the given centres. Touching is not overlapping.
    pub fn overlaps(&self, position: Vec3, other: &Self, other_position: Vec3) -> bool {
        let reach = self.radius + other.radius;
        position.distance_squared(other_position) < reach * reach
    }
}
