//! Follow-camera system.
//!
//! Runs in the late-update schedule so it sees the target's position after
//! every movement system of the frame.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::followcamera::{CameraState, FollowCamera};
use crate::components::position::Position;
use crate::resources::worldtime::WorldTime;
use crate::systems::proximity::ease_towards;

/// Move each camera towards its clamped desired spot.
///
/// The first update snaps straight to the spot so the target is in view
/// immediately; later updates ease with `lerp(current, desired, speed * dt)`.
/// Cameras without a resolvable target are left alone.
pub fn follow_camera_system(
    mut cameras: Query<(&mut FollowCamera, &mut Position)>,
    targets: Query<&Position, Without<FollowCamera>>,
    time: Res<WorldTime>,
) {
    for (mut camera, mut position) in cameras.iter_mut() {
        let Some(target) = camera.target else {
            continue;
        };
        let Ok(target_pos) = targets.get(target) else {
            continue;
        };

        let desired = camera.desired_position(target_pos.pos);
        match camera.state {
            CameraState::Detached => {
                position.pos = desired;
                camera.state = CameraState::Following;
                debug!("camera placed at {:?}", desired);
            }
            CameraState::Following => {
                position.pos = ease_towards(position.pos, desired, camera.speed, time.delta);
            }
        }
    }
}
