//! External alarm triggers.
//!
//! Any collaborator (a game-state manager, a script, the scenario runner) can
//! start or stop an alarm at any time by triggering these events:
//!
//! ```ignore
//! world.trigger(PlayAlarm { alarm });
//! commands.trigger(StopAlarm { alarm });
//! ```
//!
//! The observers live in [`crate::systems::alarm`].

use bevy_ecs::prelude::*;

/// Arm the alarm and start its sound. Idempotent.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayAlarm {
    pub alarm: Entity,
}

/// Disarm the alarm, stop its sound and restore its lights.
#[derive(Event, Debug, Clone, Copy)]
pub struct StopAlarm {
    pub alarm: Entity,
}
