//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components hold the per-object state of the controllers and the
//! host-visible properties they drive.
//!
//! Submodules overview:
//! - [`alarm`] – emergency light/alarm controller state
//! - [`collectible`] – one-shot collectible coin
//! - [`collider`] – visibility flag and sphere overlap volume
//! - [`door`] – proximity sliding door
//! - [`followcamera`] – camera that trails a target at a clamped offset
//! - [`inputcontrolled`] – joystick-driven movement and axis helpers
//! - [`light`] – colours, alarm lights and emissive materials
//! - [`position`] – world-space position
//! - [`scenename`] – name used by the one-time wiring step
//! - [`ttl`] – countdown that despawns the entity

pub mod alarm;
pub mod collectible;
pub mod collider;
pub mod door;
pub mod followcamera;
pub mod inputcontrolled;
pub mod light;
pub mod position;
pub mod scenename;
pub mod ttl;
