//! Human-readable entity names.
//!
//! A [`SceneName`] is only consulted by the one-time wiring step in
//! [`crate::game::setup_scene`] (and by the coin overlap check, which accepts a
//! collider by name). Controllers never look entities up by name at runtime;
//! they hold typed `Entity` handles instead.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SceneName(pub String);

impl SceneName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
