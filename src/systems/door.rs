//! Sliding door system.
//!
//! Re-evaluates every [`SlidingDoor`]'s state from the current player
//! distance and eases the door towards the position of that state. A state
//! change triggers [`DoorStateChanged`].
use bevy_ecs::prelude::*;
use log::info;

use crate::components::door::{DoorState, SlidingDoor};
use crate::components::position::Position;
use crate::events::door::DoorStateChanged;
use crate::resources::worldtime::WorldTime;
use crate::systems::proximity::ease_towards;

pub fn sliding_door_system(
    mut doors: Query<(Entity, &mut SlidingDoor, &mut Position)>,
    players: Query<&Position, Without<SlidingDoor>>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut door, mut position) in doors.iter_mut() {
        let Some(player) = door.player else {
            continue;
        };
        let Ok(player_pos) = players.get(player) else {
            continue;
        };

        let state = DoorState::evaluate(position.distance(player_pos), door.radius);
        if state != door.state {
            info!("door {:?} -> {:?}", entity, state);
            door.state = state;
            commands.trigger(DoorStateChanged {
                door: entity,
                state,
            });
        }

        position.pos = ease_towards(position.pos, door.target(), door.speed, time.delta);
    }
}
