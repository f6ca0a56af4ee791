//! Collectible coin component.
//!
//! A [`Collectible`] glows brighter as its player approaches and is collected
//! once, either when the player comes within `collection_radius` or when the
//! player's collider overlaps it. Collection is terminal: later triggers are
//! ignored.
//!
//! See [`crate::systems::coin`] for the shine/proximity systems and the
//! overlap observer.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::light::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoinState {
    #[default]
    Active,
    Collected,
}

/// What happens to the coin entity once collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollectAction {
    /// Remove the entity from the world.
    #[default]
    Despawn,
    /// Keep the entity but hide it and disable its collider.
    Disable,
}

impl CollectAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "despawn" => Some(CollectAction::Despawn),
            "disable" => Some(CollectAction::Disable),
            _ => None,
        }
    }
}

/// Short-lived entity spawned where a coin was collected.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnEffect {
    pub name: String,
    /// Seconds before the effect entity despawns.
    pub lifetime: f32,
}

#[derive(Component, Clone, Debug)]
pub struct Collectible {
    pub player: Option<Entity>,
    /// Colliders carrying this [`SceneName`](crate::components::scenename::SceneName)
    /// also count as the player for overlap collection.
    pub player_name: Option<String>,
    pub collection_radius: f32,
    /// At or below this distance the coin shines at `max_emission_intensity`.
    pub min_shine_distance: f32,
    /// At or beyond this distance the coin shines at `min_emission_intensity`.
    pub max_shine_distance: f32,
    pub min_emission_intensity: f32,
    pub max_emission_intensity: f32,
    pub emission_color: Rgba,
    pub collect_on_proximity: bool,
    pub collect_on_overlap: bool,
    pub on_collect: CollectAction,
    pub spawn_effect: Option<SpawnEffect>,
    pub state: CoinState,
}

impl Collectible {
    pub fn new(player: Option<Entity>) -> Self {
        Self {
            player,
            player_name: None,
            collection_radius: 0.5,
            min_shine_distance: 1.0,
            max_shine_distance: 10.0,
            min_emission_intensity: 0.0,
            max_emission_intensity: 2.0,
            emission_color: Rgba::YELLOW,
            collect_on_proximity: true,
            collect_on_overlap: true,
            on_collect: CollectAction::Despawn,
            spawn_effect: None,
            state: CoinState::Active,
        }
    }

    pub fn with_collection_radius(mut self, radius: f32) -> Self {
        self.collection_radius = radius;
        self
    }

    pub fn with_shine_range(mut self, min_distance: f32, max_distance: f32) -> Self {
        self.min_shine_distance = min_distance;
        self.max_shine_distance = max_distance;
        self
    }

    pub fn with_emission(mut self, color: Rgba, min_intensity: f32, max_intensity: f32) -> Self {
        self.emission_color = color;
        self.min_emission_intensity = min_intensity;
        self.max_emission_intensity = max_intensity;
        self
    }

    pub fn with_action(mut self, action: CollectAction) -> Self {
        self.on_collect = action;
        self
    }

    pub fn with_spawn_effect(mut self, effect: Option<SpawnEffect>) -> Self {
        self.spawn_effect = effect;
        self
    }

    pub fn with_player_name(mut self, name: Option<String>) -> Self {
        self.player_name = name;
        self
    }

    pub fn is_active(&self) -> bool {
        self.state == CoinState::Active
    }

    /// Emission intensity at a given distance from the player.
    pub fn shine_intensity(&self, distance: f32) -> f32 {
        let span = self.max_shine_distance - self.min_shine_distance;
        let t = if span > 0.0 {
            ((distance - self.min_shine_distance) / span).clamp(0.0, 1.0)
        } else if distance <= self.min_shine_distance {
            0.0
        } else {
            1.0
        };
        self.max_emission_intensity + (self.min_emission_intensity - self.max_emission_intensity) * t
    }

    /// Mark collected. Returns `false` when it already was.
    pub fn collect(&mut self) -> bool {
        if self.state == CoinState::Collected {
            return false;
        }
        self.state = CoinState::Collected;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    fn coin() -> Collectible {
        Collectible::new(None)
            .with_shine_range(2.0, 6.0)
            .with_emission(Rgba::WHITE, 0.5, 3.0)
    }

    #[test]
    fn test_intensity_at_min_distance_is_max() {
        assert!(approx_eq(coin().shine_intensity(2.0), 3.0));
        assert!(approx_eq(coin().shine_intensity(0.0), 3.0));
    }

    #[test]
    fn test_intensity_beyond_max_distance_is_min() {
        assert!(approx_eq(coin().shine_intensity(6.0), 0.5));
        assert!(approx_eq(coin().shine_intensity(100.0), 0.5));
    }

    #[test]
    fn test_intensity_midpoint() {
        assert!(approx_eq(coin().shine_intensity(4.0), 1.75));
    }

    #[test]
    fn test_degenerate_shine_range_is_a_step() {
        let c = coin().with_shine_range(3.0, 3.0);
        assert!(approx_eq(c.shine_intensity(3.0), 3.0));
        assert!(approx_eq(c.shine_intensity(3.1), 0.5));
    }

    #[test]
    fn test_collect_once() {
        let mut c = coin();
        assert!(c.collect());
        assert!(!c.collect());
        assert_eq!(c.state, CoinState::Collected);
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(CollectAction::parse("Disable"), Some(CollectAction::Disable));
        assert_eq!(CollectAction::parse("despawn"), Some(CollectAction::Despawn));
        assert_eq!(CollectAction::parse("explode"), None);
    }
}
