//! Follow-camera component.
//!
//! A [`FollowCamera`] keeps its entity at a clamped offset from a target
//! entity, easing towards that spot every frame. Orientation is never touched.
//! See [`crate::systems::camera::follow_camera_system`].

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

/// Whether the camera has been placed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraState {
    /// Not placed yet; the next update snaps to the desired spot.
    #[default]
    Detached,
    /// Placed; updates ease towards the desired spot.
    Following,
}

#[derive(Component, Clone, Debug)]
pub struct FollowCamera {
    /// Entity to follow. `None` makes the controller a no-op.
    pub target: Option<Entity>,
    /// Offset from the target's position.
    pub offset: Vec3,
    /// Maximum allowed distance from the target.
    pub max_distance: f32,
    /// Smoothing rate; the lerp factor each frame is `speed * dt`.
    pub speed: f32,
    pub state: CameraState,
}

impl FollowCamera {
    pub fn new(target: Option<Entity>, offset: Vec3) -> Self {
        Self {
            target,
            offset,
            max_distance: 10.0,
            speed: 5.0,
            state: CameraState::Detached,
        }
    }

    pub fn with_max_distance(mut self, max_distance: f32) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Spot the camera wants to occupy for a given target position.
    ///
    /// `target + offset`, pulled in along the offset direction when it lies
    /// farther than `max_distance` from the target.
    pub fn desired_position(&self, target: Vec3) -> Vec3 {
        let desired = target + self.offset;
        let reach = desired - target;
        if reach.length() > self.max_distance {
            target + reach.normalize_or_zero() * self.max_distance
        } else {
            desired
        }
    }
}
