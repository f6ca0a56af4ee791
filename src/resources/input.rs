//! Per-frame keyboard input resource.
//!
//! Captures the directional keys the joystick fallback cares about and exposes
//! them to systems via the [`InputState`] resource. WASD are the main
//! directions, arrow keys the secondary ones; either set moves the joystick
//! axes by a discrete ±1.
//!
//! The host (or the scenario runner in the binary) writes key state through
//! [`InputState::set_key`] once per frame before the update schedule runs.
use bevy_ecs::prelude::*;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys relevant to the joystick fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default)]
/// Boolean key state.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame keyboard state relevant to the scene.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub maindirection_up: BoolState,
    pub maindirection_left: BoolState,
    pub maindirection_down: BoolState,
    pub maindirection_right: BoolState,
    // Arrow keys
    pub secondarydirection_up: BoolState,
    pub secondarydirection_down: BoolState,
    pub secondarydirection_left: BoolState,
    pub secondarydirection_right: BoolState,
}

impl InputState {
    fn slot(&mut self, key: Key) -> &mut BoolState {
        match key {
            Key::W => &mut self.maindirection_up,
            Key::A => &mut self.maindirection_left,
            Key::S => &mut self.maindirection_down,
            Key::D => &mut self.maindirection_right,
            Key::Up => &mut self.secondarydirection_up,
            Key::Down => &mut self.secondarydirection_down,
            Key::Left => &mut self.secondarydirection_left,
            Key::Right => &mut self.secondarydirection_right,
        }
    }

    /// Record whether `key` is held this frame.
    pub fn set_key(&mut self, key: Key, down: bool) {
        self.slot(key).set(down);
    }

    /// Record exactly `held` as the set of keys down this frame.
    pub fn set_held(&mut self, held: &[Key]) {
        for key in [
            Key::W,
            Key::A,
            Key::S,
            Key::D,
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
        ] {
            self.set_key(key, held.contains(&key));
        }
    }

    /// Discrete joystick axes from the directional keys.
    ///
    /// x is right minus left, y is up minus down; each in `{-1, 0, 1}`.
    pub fn keyboard_axes(&self) -> Vec2 {
        let right = self.maindirection_right.active || self.secondarydirection_right.active;
        let left = self.maindirection_left.active || self.secondarydirection_left.active;
        let up = self.maindirection_up.active || self.secondarydirection_up.active;
        let down = self.maindirection_down.active || self.secondarydirection_down.active;
        let axis = |pos: bool, neg: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(right, left), axis(up, down))
    }
}
