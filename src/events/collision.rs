//! Collision event type.
//!
//! The collision system emits [`CollisionEvent`] whenever two entities with
//! enabled sphere colliders overlap. Observers subscribe to it to react in a
//! decoupled manner; the coin's overlap trigger is one of them.
use bevy_ecs::prelude::*;

/// Event fired when two entities with `SphereCollider` overlap.
///
/// No ordering guarantees are provided for `a` and `b`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
