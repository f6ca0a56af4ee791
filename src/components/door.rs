//! Proximity sliding door component.
//!
//! A [`SlidingDoor`] is open exactly while its player is within `radius`.
//! There is no hysteresis: a player hovering on the boundary flips the state
//! every time the distance crosses it.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    /// Open iff `distance <= radius`.
    pub fn evaluate(distance: f32, radius: f32) -> DoorState {
        if distance <= radius {
            DoorState::Open
        } else {
            DoorState::Closed
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct SlidingDoor {
    pub player: Option<Entity>,
    pub radius: f32,
    /// Easing rate; the lerp factor each frame is `speed * dt`.
    pub speed: f32,
    pub closed_pos: Vec3,
    pub open_pos: Vec3,
    pub state: DoorState,
}

impl SlidingDoor {
    /// Door resting at `closed_pos` that slides by `open_offset` when open.
    pub fn new(player: Option<Entity>, closed_pos: Vec3, open_offset: Vec3) -> Self {
        Self {
            player,
            radius: 3.0,
            speed: 2.0,
            closed_pos,
            open_pos: closed_pos + open_offset,
            state: DoorState::Closed,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn target(&self) -> Vec3 {
        match self.state {
            DoorState::Open => self.open_pos,
            DoorState::Closed => self.closed_pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_inclusive_radius() {
        assert_eq!(DoorState::evaluate(2.0, 2.0), DoorState::Open);
        assert_eq!(DoorState::evaluate(1.0, 2.0), DoorState::Open);
        assert_eq!(DoorState::evaluate(2.0001, 2.0), DoorState::Closed);
    }

    #[test]
    fn test_target_follows_state() {
        let mut door = SlidingDoor::new(None, Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(door.target(), Vec3::ZERO);
        door.state = DoorState::Open;
        assert_eq!(door.target(), Vec3::new(0.0, 3.0, 0.0));
    }
}
