//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource publishes scene-wide values that the host (or
//! the demo binary) may want to inspect without querying entities:
//!
//! - `alarm_factor` scalar – current alarm transition factor
//! - `coins_collected` integer – number of coins collected so far
//! - `serial_connected` flag – joystick input currently comes from serial

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

pub const ALARM_FACTOR: &str = "alarm_factor";
pub const COINS_COLLECTED: &str = "coins_collected";
pub const SERIAL_CONNECTED: &str = "serial_connected";

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set a floating-point signal value.
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    /// Get a floating-point signal by key.
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Add one to an integer signal, starting from zero if absent.
    pub fn increment_integer(&mut self, key: impl Into<String>) -> i32 {
        let slot = self.integers.entry(key.into()).or_insert(0);
        *slot += 1;
        *slot
    }
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Remove a flag (make it false/absent).
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
