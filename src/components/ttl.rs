//! Time-to-live component for automatic entity despawning.
//!
//! Used for short-lived entities such as the effect spawned when a coin is
//! collected. [`crate::systems::ttl::ttl_system`] counts it down and despawns
//! the entity once it reaches zero.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}
