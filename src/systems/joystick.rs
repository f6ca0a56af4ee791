//! Joystick movement system.
//!
//! Integrates [`JoystickControlled`] axes into [`Position`] on the configured
//! plane, then applies the optional per-axis clamps.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::{JoystickControlled, MovementPlane};
use crate::components::position::Position;
use crate::resources::worldtime::WorldTime;

/// `position += axis * speed * dt` on the joystick's plane, then clamp.
pub fn joystick_movement_system(
    mut query: Query<(&JoystickControlled, &mut Position)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (joystick, mut position) in query.iter_mut() {
        let step = joystick.axes * joystick.speed * dt;
        let pos = &mut position.pos;
        pos.x = joystick.clamp_a.apply(pos.x + step.x);
        match joystick.plane {
            MovementPlane::XY => pos.y = joystick.clamp_b.apply(pos.y + step.y),
            MovementPlane::XZ => pos.z = joystick.clamp_b.apply(pos.z + step.y),
        }
    }
}
