use bevy_ecs::prelude::*;
use glam::Vec3;

/// Fired exactly once per coin, when it is collected.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CoinCollected {
    pub coin: Entity,
    /// Where the coin was when collected.
    pub position: Vec3,
}
