//! Emergency alarm systems and observers.
//!
//! - [`alarm_system`] recomputes each alarm's transition factor from the
//!   distance between its tracked entity and its reference, animates its
//!   lights and starts/stops/adjusts its sound.
//! - [`play_alarm_observer`] and [`stop_alarm_observer`] implement the
//!   external [`PlayAlarm`] / [`StopAlarm`] triggers.
//!
//! Sound is expressed as [`AudioCmd`] messages for the host.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::alarm::{
    AlarmSound, EmergencyAlarm, LightOutput, SoundChange, alarm_volume,
};
use crate::components::light::AlarmLight;
use crate::components::position::Position;
use crate::events::alarm::{PlayAlarm, StopAlarm};
use crate::events::audio::AudioCmd;
use crate::resources::worldsignals::{ALARM_FACTOR, WorldSignals};
use crate::resources::worldtime::WorldTime;
use crate::systems::proximity::proximity_factor;

/// Smallest volume change worth telling the host about.
const VOLUME_EPSILON: f32 = 1e-3;

fn apply_lights(alarm: &EmergencyAlarm, output: LightOutput, lights: &mut Query<&mut AlarmLight>) {
    for &light in &alarm.lights {
        let Ok(mut light) = lights.get_mut(light) else {
            continue;
        };
        match output {
            LightOutput::Lit(color) => light.light_up(color),
            LightOutput::Dark => light.enabled = false,
        }
    }
}

fn send_volume(alarm: &mut EmergencyAlarm, audio: &mut MessageWriter<AudioCmd>) {
    let Some(clip) = alarm.clip.clone() else {
        return;
    };
    let vol = alarm_volume(alarm.factor);
    let changed = alarm
        .last_volume
        .is_none_or(|last| (last - vol).abs() > VOLUME_EPSILON);
    if changed {
        alarm.last_volume = Some(vol);
        audio.write(AudioCmd::Volume { id: clip, vol });
    }
}

/// Drive every running alarm from the current proximity of its two entities.
pub fn alarm_system(
    mut alarms: Query<(Entity, &mut EmergencyAlarm)>,
    positions: Query<&Position>,
    mut lights: Query<&mut AlarmLight>,
    time: Res<WorldTime>,
    mut audio: MessageWriter<AudioCmd>,
    mut signals: Option<ResMut<WorldSignals>>,
) {
    for (entity, mut alarm) in alarms.iter_mut() {
        let (Some(tracked), Some(reference)) = (alarm.tracked, alarm.reference) else {
            continue;
        };
        let (Ok(a), Ok(b)) = (positions.get(tracked), positions.get(reference)) else {
            continue;
        };

        let factor = proximity_factor(a.distance(b), alarm.radius);
        alarm.factor = factor;
        if let Some(signals) = signals.as_deref_mut() {
            signals.set_scalar(ALARM_FACTOR, factor);
        }

        if alarm.stopped {
            continue;
        }

        let output = alarm.step_lights(factor, time.delta);
        apply_lights(&alarm, output, &mut lights);

        match alarm.step_sound(factor) {
            Some(SoundChange::Start) => {
                info!("alarm {:?} sounding (factor {:.2})", entity, factor);
                if let Some(clip) = alarm.clip.clone() {
                    audio.write(AudioCmd::Play {
                        id: clip,
                        looped: true,
                    });
                }
            }
            Some(SoundChange::Stop) => {
                info!("alarm {:?} silenced (factor {:.2})", entity, factor);
                if let Some(clip) = alarm.clip.clone() {
                    audio.write(AudioCmd::Stop { id: clip });
                }
            }
            None => {}
        }

        if alarm.sound == AlarmSound::Playing {
            send_volume(&mut alarm, &mut audio);
        }
    }
}

/// Arm an alarm and start its sound if it is not already playing.
pub fn play_alarm_observer(
    trigger: On<PlayAlarm>,
    mut alarms: Query<&mut EmergencyAlarm>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let entity = trigger.event().alarm;
    let Ok(mut alarm) = alarms.get_mut(entity) else {
        warn!("PlayAlarm: {:?} is not an alarm", entity);
        return;
    };

    if alarm.play() {
        info!("alarm {:?} started", entity);
        if let Some(clip) = alarm.clip.clone() {
            audio.write(AudioCmd::Play {
                id: clip,
                looped: true,
            });
        }
        send_volume(&mut alarm, &mut audio);
    } else {
        debug!("alarm {:?} armed; sound unchanged", entity);
    }
}

/// Disarm an alarm, stop its sound and restore its lights.
pub fn stop_alarm_observer(
    trigger: On<StopAlarm>,
    mut alarms: Query<&mut EmergencyAlarm>,
    mut lights: Query<&mut AlarmLight>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let entity = trigger.event().alarm;
    let Ok(mut alarm) = alarms.get_mut(entity) else {
        warn!("StopAlarm: {:?} is not an alarm", entity);
        return;
    };

    if alarm.stop() {
        if let Some(clip) = alarm.clip.clone() {
            audio.write(AudioCmd::Stop { id: clip });
        }
    }
    for &light in &alarm.lights {
        if let Ok(mut light) = lights.get_mut(light) {
            light.restore();
        }
    }
    info!("alarm {:?} stopped", entity);
}
