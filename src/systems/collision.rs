//! Sphere overlap detection.
//!
//! [`collision_detector`] tests every pair of enabled [`SphereCollider`]s and
//! triggers a [`CollisionEvent`] for each overlapping pair. Observers run when
//! the schedule applies its deferred commands.
use bevy_ecs::prelude::*;

use crate::components::collider::SphereCollider;
use crate::components::position::Position;
use crate::events::collision::CollisionEvent;

pub fn collision_detector(
    query: Query<(Entity, &Position, &SphereCollider)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if !collider_a.enabled || !collider_b.enabled {
            continue;
        }
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
