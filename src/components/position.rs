//! World-space position component.
//!
//! Every controller reads and writes positions through [`Position`]. Only one
//! controller mutates a given entity's position per frame; others read it by
//! handle.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct Position {
    pub pos: Vec3,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        self.pos.distance(other.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(4.0, 6.0, 3.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
        assert!((b.distance(&a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Position::default().pos, Vec3::ZERO);
    }
}
