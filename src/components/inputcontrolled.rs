//! Joystick-driven movement component.
//!
//! [`JoystickControlled`] describes how an entity responds to a two-axis
//! joystick fed either by the serial line protocol or by the keyboard
//! fallback. The input system in [`crate::systems::input`] writes the current
//! axes; [`crate::systems::joystick`] integrates them into the position.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Centre of a raw 10-bit analog reading.
pub const RAW_CENTER: f32 = 512.0;
/// Half range of a raw 10-bit analog reading.
pub const RAW_HALF_RANGE: f32 = 512.0;

/// Plane the two joystick axes move the entity in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementPlane {
    /// Axis 0 → x, axis 1 → y.
    XY,
    /// Axis 0 → x, axis 1 → z.
    #[default]
    XZ,
}

impl MovementPlane {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xy" => Some(MovementPlane::XY),
            "xz" => Some(MovementPlane::XZ),
            _ => None,
        }
    }
}

/// One `x,y` record from the serial line, still in wire units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickSample {
    pub values: Vec2,
    /// Both fields were written as plain integers.
    pub integral: bool,
}

impl JoystickSample {
    pub fn new(values: Vec2, integral: bool) -> Self {
        Self { values, integral }
    }
}

/// How numbers received on the serial line are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SerialFormat {
    /// Raw for integer records or values outside `[-1, 1]`, normalized for
    /// fractional records.
    #[default]
    Auto,
    /// 0–1023 analog readings centred at 512.
    Raw,
    /// Values already in `[-1, 1]`.
    Normalized,
}

impl SerialFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(SerialFormat::Auto),
            "raw" => Some(SerialFormat::Raw),
            "normalized" => Some(SerialFormat::Normalized),
            _ => None,
        }
    }

    /// Map a parsed `x,y` sample into `[-1, 1]` on both axes.
    ///
    /// Integer records such as `0,0` or `1,1023` are analog readings even
    /// though they fit in `[-1, 1]`.
    pub fn normalize(self, sample: JoystickSample) -> Vec2 {
        let Vec2 { x, y } = sample.values;
        let raw = match self {
            SerialFormat::Raw => true,
            SerialFormat::Normalized => false,
            SerialFormat::Auto => sample.integral || x.abs() > 1.0 || y.abs() > 1.0,
        };
        if raw {
            Vec2::new(normalize_raw(x), normalize_raw(y))
        } else {
            Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
        }
    }
}

/// `clamp((v - 512) / 512, -1, 1)`.
pub fn normalize_raw(v: f32) -> f32 {
    ((v - RAW_CENTER) / RAW_HALF_RANGE).clamp(-1.0, 1.0)
}

/// Zero any axis whose magnitude is below `dead_zone`.
pub fn apply_dead_zone(axes: Vec2, dead_zone: f32) -> Vec2 {
    let cut = |v: f32| if v.abs() < dead_zone { 0.0 } else { v };
    Vec2::new(cut(axes.x), cut(axes.y))
}

/// Optional clamp for one axis. Inactive when `min == max`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisClamp {
    pub min: f32,
    pub max: f32,
}

impl AxisClamp {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_active(&self) -> bool {
        self.min != self.max
    }

    pub fn apply(&self, v: f32) -> f32 {
        if self.is_active() {
            v.clamp(self.min.min(self.max), self.min.max(self.max))
        } else {
            v
        }
    }
}

/// Movement driven by a two-axis joystick.
#[derive(Component, Clone, Copy, Debug)]
pub struct JoystickControlled {
    /// Units per second at full deflection.
    pub speed: f32,
    pub plane: MovementPlane,
    /// Axis magnitudes below this are treated as zero.
    pub dead_zone: f32,
    /// Clamp for the first axis (always world x).
    pub clamp_a: AxisClamp,
    /// Clamp for the second axis (world y or z, depending on `plane`).
    pub clamp_b: AxisClamp,
    pub serial_format: SerialFormat,
    /// Current axes in `[-1, 1]`, dead zone already applied.
    pub axes: Vec2,
}

impl JoystickControlled {
    pub fn new(speed: f32, plane: MovementPlane) -> Self {
        Self {
            speed,
            plane,
            dead_zone: 0.1,
            clamp_a: AxisClamp::default(),
            clamp_b: AxisClamp::default(),
            serial_format: SerialFormat::Auto,
            axes: Vec2::ZERO,
        }
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    pub fn with_clamps(mut self, a: AxisClamp, b: AxisClamp) -> Self {
        self.clamp_a = a;
        self.clamp_b = b;
        self
    }

    pub fn with_serial_format(mut self, format: SerialFormat) -> Self {
        self.serial_format = format;
        self
    }
}
