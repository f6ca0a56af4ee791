//! Event types used by the scene.
//!
//! This module groups the domain events exchanged across systems and the
//! messages exchanged with the host or background threads. Events provide a
//! decoupled way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`alarm`] – external play/stop triggers for emergency alarms
//! - [`audio`] – commands for the host's audio backend
//! - [`coin`] – collection notification
//! - [`collision`] – overlap notifications emitted by the collision detector
//! - [`door`] – open/close notification
//! - [`serial`] – lines and status from the serial reader thread
pub mod alarm;
pub mod audio;
pub mod coin;
pub mod collision;
pub mod door;
pub mod serial;
