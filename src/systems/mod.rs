//! Scene systems.
//!
//! This module groups all ECS systems and observers that advance the scene
//! each frame.
//!
//! Submodules overview
//! - [`alarm`] – emergency light/alarm update plus play/stop observers
//! - [`audio`] – advance and report [`crate::events::audio::AudioCmd`] messages
//! - [`camera`] – follow camera (late update)
//! - [`coin`] – coin shine, proximity collection and overlap observer
//! - [`collision`] – sphere overlap checks and event emission
//! - [`door`] – proximity sliding door
//! - [`input`] – pick serial or keyboard input for joysticks
//! - [`joystick`] – integrate joystick axes into positions
//! - [`proximity`] – distance factor and easing helpers
//! - [`serial`] – serial line protocol and reader thread
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn entities whose time ran out

pub mod alarm;
pub mod audio;
pub mod camera;
pub mod coin;
pub mod collision;
pub mod door;
pub mod input;
pub mod joystick;
pub mod proximity;
pub mod serial;
pub mod time;
pub mod ttl;
