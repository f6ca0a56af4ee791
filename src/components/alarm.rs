//! Emergency light/alarm controller component.
//!
//! An [`EmergencyAlarm`] owns a handful of [`AlarmLight`] entities and an
//! optional sound clip. Every frame the distance between two tracked entities
//! is turned into a transition factor in `[0, 1]` (1 when they coincide, 0 at
//! or beyond `radius`) which drives:
//!
//! - light colour, blended from `emergency_color` to `clear_color`
//! - flicker: lights toggle on a timer while the factor is at or below
//!   [`STEADY_THRESHOLD`], slowing down as the factor grows
//! - alarm volume `1 - factor`, silenced at [`SILENT_THRESHOLD`]
//!
//! The alarm can be started and stopped from outside through the
//! [`PlayAlarm`](crate::events::alarm::PlayAlarm) and
//! [`StopAlarm`](crate::events::alarm::StopAlarm) events. `play_on_start`
//! only decides whether the sound may start on its own; the lights animate
//! regardless until a `StopAlarm` arrives.
//!
//! [`AlarmLight`]: crate::components::light::AlarmLight

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use crate::components::light::Rgba;

/// Above this factor the lights burn steadily.
pub const STEADY_THRESHOLD: f32 = 0.6;
/// At or above this factor the alarm sound is stopped.
pub const SILENT_THRESHOLD: f32 = 0.99;

/// Light animation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlickerState {
    /// Solid light, no timer running.
    #[default]
    Steady,
    /// Flickering, currently lit.
    On,
    /// Flickering, currently dark.
    Off,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlarmSound {
    #[default]
    Stopped,
    Playing,
}

/// What the alarm's lights should show this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightOutput {
    /// Enabled with this colour at original intensity.
    Lit(Rgba),
    /// Disabled.
    Dark,
}

/// Change to the alarm sound requested by a state update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundChange {
    Start,
    Stop,
}

#[derive(Component, Clone, Debug)]
pub struct EmergencyAlarm {
    /// Entity whose approach clears the alarm (usually the player).
    pub tracked: Option<Entity>,
    /// Point of safety the tracked entity approaches.
    pub reference: Option<Entity>,
    /// Lights animated by this alarm.
    pub lights: SmallVec<[Entity; 4]>,
    pub radius: f32,
    /// Flicker half-period at factor 0, in seconds.
    pub base_interval: f32,
    pub emergency_color: Rgba,
    pub clear_color: Rgba,
    pub play_on_start: bool,
    /// Sound clip id. `None` disables every sound feature.
    pub clip: Option<String>,

    pub factor: f32,
    pub flicker: FlickerState,
    pub flicker_timer: f32,
    pub sound: AlarmSound,
    /// Whether the sound may (re)start on its own when the factor drops.
    pub armed: bool,
    /// Set by `StopAlarm`: lights and sound are frozen until `PlayAlarm`.
    pub stopped: bool,
    /// Last volume sent to the host.
    pub last_volume: Option<f32>,
}

impl EmergencyAlarm {
    pub fn new(tracked: Option<Entity>, reference: Option<Entity>, radius: f32) -> Self {
        Self {
            tracked,
            reference,
            lights: SmallVec::new(),
            radius,
            base_interval: 0.2,
            emergency_color: Rgba::RED,
            clear_color: Rgba::GREEN,
            play_on_start: true,
            clip: None,
            factor: 0.0,
            flicker: FlickerState::Steady,
            flicker_timer: 0.0,
            sound: AlarmSound::Stopped,
            armed: true,
            stopped: false,
            last_volume: None,
        }
    }

    pub fn with_lights(mut self, lights: impl IntoIterator<Item = Entity>) -> Self {
        self.lights = lights.into_iter().collect();
        self
    }

    pub fn with_colors(mut self, emergency: Rgba, clear: Rgba) -> Self {
        self.emergency_color = emergency;
        self.clear_color = clear;
        self
    }

    pub fn with_base_interval(mut self, seconds: f32) -> Self {
        self.base_interval = seconds;
        self
    }

    pub fn with_clip(mut self, clip: Option<String>) -> Self {
        self.clip = clip;
        self
    }

    pub fn with_play_on_start(mut self, play_on_start: bool) -> Self {
        self.play_on_start = play_on_start;
        self.armed = play_on_start;
        self
    }

    pub fn has_sound(&self) -> bool {
        self.clip.is_some()
    }

    /// Light colour for a given factor.
    pub fn blended_color(&self, factor: f32) -> Rgba {
        self.emergency_color.lerp(self.clear_color, factor)
    }

    /// Flicker toggle period; slows from `base_interval` to four times that.
    pub fn flicker_period(&self, factor: f32) -> f32 {
        let f = factor.clamp(0.0, 1.0);
        self.base_interval + (self.base_interval * 4.0 - self.base_interval) * f
    }

    /// Advance the light animation by `dt` at the given factor.
    pub fn step_lights(&mut self, factor: f32, dt: f32) -> LightOutput {
        self.factor = factor;
        let color = self.blended_color(factor);

        if factor > STEADY_THRESHOLD {
            self.flicker = FlickerState::Steady;
            self.flicker_timer = 0.0;
            return LightOutput::Lit(color);
        }

        if self.flicker == FlickerState::Steady {
            self.flicker = FlickerState::On;
            self.flicker_timer = 0.0;
        }

        self.flicker_timer += dt;
        let period = self.flicker_period(factor);
        if self.flicker_timer >= period {
            // Keep the overshoot so uneven frames do not stretch the period.
            self.flicker_timer = if period > 0.0 {
                self.flicker_timer % period
            } else {
                0.0
            };
            self.flicker = match self.flicker {
                FlickerState::On => FlickerState::Off,
                _ => FlickerState::On,
            };
        }

        match self.flicker {
            FlickerState::Off => LightOutput::Dark,
            _ => LightOutput::Lit(color),
        }
    }

    /// Decide whether the sound starts or stops at the given factor.
    pub fn step_sound(&mut self, factor: f32) -> Option<SoundChange> {
        if !self.has_sound() {
            return None;
        }
        match self.sound {
            AlarmSound::Playing if factor >= SILENT_THRESHOLD => {
                self.sound = AlarmSound::Stopped;
                self.last_volume = None;
                Some(SoundChange::Stop)
            }
            AlarmSound::Stopped if factor < SILENT_THRESHOLD && self.armed => {
                self.sound = AlarmSound::Playing;
                Some(SoundChange::Start)
            }
            _ => None,
        }
    }

    /// Arm the alarm and start the sound unless already playing.
    ///
    /// Returns `true` when playback actually started.
    pub fn play(&mut self) -> bool {
        self.armed = true;
        self.stopped = false;
        if self.has_sound() && self.sound == AlarmSound::Stopped && self.factor < SILENT_THRESHOLD
        {
            self.sound = AlarmSound::Playing;
            return true;
        }
        false
    }

    /// Disarm the alarm, freeze the lights and reset their animation.
    ///
    /// Returns `true` when the sound was playing.
    pub fn stop(&mut self) -> bool {
        self.armed = false;
        self.stopped = true;
        self.flicker = FlickerState::Steady;
        self.flicker_timer = 0.0;
        self.last_volume = None;
        if self.sound == AlarmSound::Playing {
            self.sound = AlarmSound::Stopped;
            return true;
        }
        false
    }
}

/// Alarm volume for a given factor.
pub fn alarm_volume(factor: f32) -> f32 {
    (1.0 - factor).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    fn alarm() -> EmergencyAlarm {
        EmergencyAlarm::new(None, None, 10.0)
            .with_base_interval(0.5)
            .with_clip(Some("siren".into()))
    }

    #[test]
    fn test_flicker_period_slows_with_factor() {
        let a = alarm();
        assert!(approx_eq(a.flicker_period(0.0), 0.5));
        assert!(approx_eq(a.flicker_period(1.0), 2.0));
        assert!(approx_eq(a.flicker_period(0.5), 1.25));
    }

    #[test]
    fn test_steady_band_never_toggles() {
        let mut a = alarm();
        for _ in 0..100 {
            let out = a.step_lights(0.8, 0.25);
            assert!(matches!(out, LightOutput::Lit(_)));
            assert_eq!(a.flicker, FlickerState::Steady);
        }
    }

    #[test]
    fn test_threshold_itself_flickers() {
        let mut a = alarm();
        a.step_lights(STEADY_THRESHOLD, 0.0);
        assert_eq!(a.flicker, FlickerState::On);
    }

    #[test]
    fn test_flicker_toggles_after_period() {
        let mut a = alarm();
        assert!(matches!(a.step_lights(0.0, 0.1), LightOutput::Lit(_)));
        assert!(matches!(a.step_lights(0.0, 0.1), LightOutput::Lit(_)));
        // timer passes 0.5
        assert!(matches!(a.step_lights(0.0, 0.35), LightOutput::Dark));
        assert!(matches!(a.step_lights(0.0, 0.5), LightOutput::Lit(_)));
    }

    #[test]
    fn test_flicker_keeps_overshoot_across_toggles() {
        let mut a = alarm();
        assert!(matches!(a.step_lights(0.0, 0.3), LightOutput::Lit(_)));
        // 0.6 of a 0.5 period: toggles with 0.1 carried over
        assert!(matches!(a.step_lights(0.0, 0.3), LightOutput::Dark));
        assert!(matches!(a.step_lights(0.0, 0.45), LightOutput::Lit(_)));
    }

    #[test]
    fn test_lit_color_blends() {
        let mut a = alarm();
        match a.step_lights(0.8, 0.0) {
            LightOutput::Lit(c) => {
                assert!(approx_eq(c.r, 0.2));
                assert!(approx_eq(c.g, 0.8));
            }
            LightOutput::Dark => panic!("steady band must be lit"),
        }
    }

    #[test]
    fn test_volume_is_inverse_factor() {
        assert!(approx_eq(alarm_volume(0.0), 1.0));
        assert!(approx_eq(alarm_volume(0.25), 0.75));
        assert!(approx_eq(alarm_volume(1.5), 0.0));
    }

    #[test]
    fn test_sound_stops_near_clear_and_resumes() {
        let mut a = alarm();
        assert_eq!(a.step_sound(0.1), Some(SoundChange::Start));
        assert_eq!(a.step_sound(0.5), None);
        assert_eq!(a.step_sound(0.995), Some(SoundChange::Stop));
        assert_eq!(a.step_sound(0.995), None);
        assert_eq!(a.step_sound(0.9), Some(SoundChange::Start));
    }

    #[test]
    fn test_disarmed_alarm_does_not_resume() {
        let mut a = alarm().with_play_on_start(false);
        assert_eq!(a.step_sound(0.1), None);
        assert!(a.play());
        assert_eq!(a.sound, AlarmSound::Playing);
    }

    #[test]
    fn test_play_is_idempotent() {
        let mut a = alarm();
        assert!(a.play());
        assert!(!a.play());
        assert_eq!(a.sound, AlarmSound::Playing);
    }

    #[test]
    fn test_play_on_start_off_only_holds_sound() {
        let a = alarm().with_play_on_start(false);
        assert!(!a.armed);
        assert!(!a.stopped);
    }

    #[test]
    fn test_stop_disarms() {
        let mut a = alarm();
        a.play();
        assert!(a.stop());
        assert!(!a.armed);
        assert!(a.stopped);
        assert_eq!(a.step_sound(0.0), None);
        assert!(!a.stop());
    }

    #[test]
    fn test_no_clip_means_no_sound() {
        let mut a = EmergencyAlarm::new(None, None, 1.0);
        assert_eq!(a.step_sound(0.0), None);
        assert!(!a.play());
    }
}
