//! Audio command plumbing.
//!
//! Controllers write [`AudioCmd`] messages; playing them is up to the host.
//! - [`update_bevy_audio_cmds`] advances the message queue once per frame.
//! - [`log_audio_cmds`] is the sink used by the headless binary: it only
//!   reports what a real backend would do.

use bevy_ecs::prelude::{MessageReader, Messages, ResMut};
use log::{debug, info};

use crate::events::audio::AudioCmd;

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report every audio command written since the last run.
pub fn log_audio_cmds(mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        match cmd {
            AudioCmd::Play { id, looped } => info!("[audio] play id='{}' looped={}", id, looped),
            AudioCmd::Stop { id } => info!("[audio] stop id='{}'", id),
            AudioCmd::Volume { id, vol } => debug!("[audio] volume id='{}' vol={:.2}", id, vol),
        }
    }
}
