//! Light and emissive-material components.
//!
//! - [`Rgba`] – linear floating point colour with component-wise blending
//! - [`AlarmLight`] – a light driven by an
//!   [`EmergencyAlarm`](crate::components::alarm::EmergencyAlarm)
//! - [`Emission`] – glow colour of a surface, driven by
//!   [`Collectible`](crate::components::collectible::Collectible)

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Linear RGBA colour, each channel nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 0.92, 0.016, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Component-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Multiply every channel, alpha included, by `k`.
    pub fn scaled(self, k: f32) -> Rgba {
        Rgba {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }

    /// Parse `"r,g,b"` or `"r,g,b,a"` with float channels.
    pub fn parse(s: &str) -> Option<Rgba> {
        let parts: Vec<f32> = s
            .split(',')
            .map(|p| p.trim().parse::<f32>())
            .collect::<Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [r, g, b] => Some(Rgba::new(*r, *g, *b, 1.0)),
            [r, g, b, a] => Some(Rgba::new(*r, *g, *b, *a)),
            _ => None,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// A light owned by an alarm controller.
///
/// `original_color`/`original_intensity` are captured when the light is
/// spawned and restored when the alarm is stopped.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct AlarmLight {
    pub enabled: bool,
    pub color: Rgba,
    pub intensity: f32,
    pub original_color: Rgba,
    pub original_intensity: f32,
}

impl AlarmLight {
    pub fn new(color: Rgba, intensity: f32) -> Self {
        Self {
            enabled: true,
            color,
            intensity,
            original_color: color,
            original_intensity: intensity,
        }
    }

    /// Enable with the given colour at the original intensity.
    pub fn light_up(&mut self, color: Rgba) {
        self.enabled = true;
        self.color = color;
        self.intensity = self.original_intensity;
    }

    /// Back to the spawn-time colour and intensity, enabled.
    pub fn restore(&mut self) {
        self.enabled = true;
        self.color = self.original_color;
        self.intensity = self.original_intensity;
    }
}

/// Emissive glow of a surface. The rendered glow is `color * intensity`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    pub color: Rgba,
    pub intensity: f32,
}

impl Emission {
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            intensity: 0.0,
        }
    }

    pub fn glow(&self) -> Rgba {
        self.color.scaled(self.intensity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_lerp_endpoints() {
        let c = Rgba::RED.lerp(Rgba::GREEN, 0.0);
        assert_eq!(c, Rgba::RED);
        let c = Rgba::RED.lerp(Rgba::GREEN, 1.0);
        assert_eq!(c, Rgba::GREEN);
    }

    #[test]
    fn test_lerp_clamps_t() {
        assert_eq!(Rgba::RED.lerp(Rgba::GREEN, 2.0), Rgba::GREEN);
        assert_eq!(Rgba::RED.lerp(Rgba::GREEN, -1.0), Rgba::RED);
    }

    #[test]
    fn test_lerp_midpoint() {
        let c = Rgba::RED.lerp(Rgba::GREEN, 0.5);
        assert!(approx_eq(c.r, 0.5));
        assert!(approx_eq(c.g, 0.5));
        assert!(approx_eq(c.b, 0.0));
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(Rgba::parse("1, 0, 0"), Some(Rgba::RED));
        assert_eq!(
            Rgba::parse("0.5,0.5,0.5,0.25"),
            Some(Rgba::new(0.5, 0.5, 0.5, 0.25))
        );
        assert_eq!(Rgba::parse("1,0"), None);
        assert_eq!(Rgba::parse("red"), None);
    }

    #[test]
    fn test_light_restore() {
        let mut light = AlarmLight::new(Rgba::WHITE, 2.0);
        light.enabled = false;
        light.color = Rgba::RED;
        light.intensity = 0.0;
        light.restore();
        assert!(light.enabled);
        assert_eq!(light.color, Rgba::WHITE);
        assert!(approx_eq(light.intensity, 2.0));
    }

    #[test]
    fn test_emission_glow() {
        let mut e = Emission::new(Rgba::new(1.0, 0.5, 0.0, 1.0));
        e.intensity = 2.0;
        let g = e.glow();
        assert!(approx_eq(g.r, 2.0));
        assert!(approx_eq(g.g, 1.0));
    }
}
