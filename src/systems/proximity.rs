//! Shared distance and easing helpers for the proximity-driven controllers.

use glam::Vec3;

/// How close `distance` is relative to `radius`, in `[0, 1]`.
///
/// 1 at distance 0, falling linearly to 0 at `radius` and beyond. A
/// non-positive radius yields 1 only for a zero distance.
pub fn proximity_factor(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Exponential smoothing step: `lerp(current, target, rate * dt)`.
///
/// The blend factor is clamped to `[0, 1]`, so a long frame lands on the
/// target instead of overshooting it.
pub fn ease_towards(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, (rate * dt).clamp(0.0, 1.0))
}
