use bevy_ecs::prelude::*;

use crate::components::door::DoorState;

/// Fired when a sliding door switches between open and closed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DoorStateChanged {
    pub door: Entity,
    pub state: DoorState,
}
