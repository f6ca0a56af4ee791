//! Proxiscene library.
//!
//! A headless scene runtime built on `bevy_ecs`. It hosts a handful of
//! independent per-frame controllers: a follow camera, a serial/keyboard
//! joystick, an emergency light/alarm, a proximity sliding door and a
//! collectible coin. This module exposes the components, resources, systems
//! and events for embedding in a host loop and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenario;
pub mod systems;
