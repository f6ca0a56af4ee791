//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, keyboard state, the serial
//! bridge, configuration and published signals. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `input` – per-frame keyboard state of the directional keys
//! - `sceneconfig` – controller settings loaded from an INI file
//! - `serial` – bridge and channel for the background serial reader thread
//! - `worldsignals` – scene-wide values published by controllers
//! - `worldtime` – simulation time and delta
pub mod input;
pub mod sceneconfig;
pub mod serial;
pub mod worldsignals;
pub mod worldtime;
