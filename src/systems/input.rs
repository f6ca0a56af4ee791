//! Joystick input system.
//!
//! [`joystick_input_system`] picks the input source for every
//! [`JoystickControlled`] entity and writes its axes:
//!
//! - while a [`SerialBridge`] is present and connected, the latest valid
//!   serial sample (drained from the reader thread this frame, or kept from an
//!   earlier frame) is normalized with the entity's [`SerialFormat`];
//! - otherwise the directional keys in [`InputState`] give discrete ±1 axes.
//!
//! The dead zone is applied last, whatever the source.
//!
//! [`SerialFormat`]: crate::components::inputcontrolled::SerialFormat
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::inputcontrolled::{JoystickControlled, apply_dead_zone};
use crate::events::serial::SerialMessage;
use crate::resources::input::InputState;
use crate::resources::serial::SerialBridge;
use crate::resources::worldsignals::{SERIAL_CONNECTED, WorldSignals};
use crate::systems::serial::parse_joystick_line;

/// Drain the serial bridge into its latest sample.
///
/// Returns whether serial input is usable this frame.
fn drain_serial(bridge: &mut SerialBridge) -> bool {
    let msgs: Vec<SerialMessage> = bridge.rx_msg.try_iter().collect();
    for msg in msgs {
        match msg {
            SerialMessage::Line(line) => match parse_joystick_line(&line) {
                Some(sample) => bridge.last_sample = Some(sample),
                None => debug!("[serial] dropped line '{}'", line),
            },
            SerialMessage::Disconnected { reason } => {
                if bridge.connected {
                    warn!("[serial] disconnected ({}); using keyboard input", reason);
                }
                bridge.connected = false;
            }
        }
    }
    bridge.connected
}

/// Update each joystick's axes from serial or keyboard input.
pub fn joystick_input_system(
    bridge: Option<ResMut<SerialBridge>>,
    input: Res<InputState>,
    signals: Option<ResMut<WorldSignals>>,
    mut query: Query<&mut JoystickControlled>,
) {
    let serial_sample =
        bridge.and_then(|mut bridge| drain_serial(&mut bridge).then(|| bridge.last_sample));

    if let Some(mut signals) = signals {
        if serial_sample.is_some() {
            signals.set_flag(SERIAL_CONNECTED);
        } else {
            signals.clear_flag(SERIAL_CONNECTED);
        }
    }

    for mut joystick in query.iter_mut() {
        let raw = match serial_sample {
            Some(Some(sample)) => joystick.serial_format.normalize(sample),
            // Connected but nothing valid received yet.
            Some(None) => Vec2::ZERO,
            None => input.keyboard_axes(),
        };
        joystick.axes = apply_dead_zone(raw, joystick.dead_zone);
    }
}
