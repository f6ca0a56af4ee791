//! Scene setup and per-frame driving.
//!
//! Setup happens in two steps:
//!
//! 1. [`spawn_scene_objects`] places the named objects (player, camera,
//!    reference point, door, coin, alarm lights) the way a host level would.
//! 2. [`wire_controllers`] resolves every collaborator **once** by name and
//!    attaches the controllers with typed `Entity` handles. A name that does
//!    not resolve is logged and the handle left unset, which makes the
//!    dependent logic a no-op. Nothing is looked up by name after this.
//!
//! [`build_schedules`] returns the update and late-update schedules and
//! [`run_frame`] advances the world by one frame.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{info, warn};

use crate::components::alarm::EmergencyAlarm;
use crate::components::collectible::{Collectible, SpawnEffect};
use crate::components::collider::{Renderable, SphereCollider};
use crate::components::door::SlidingDoor;
use crate::components::followcamera::FollowCamera;
use crate::components::inputcontrolled::{AxisClamp, JoystickControlled};
use crate::components::light::{AlarmLight, Emission};
use crate::components::position::Position;
use crate::components::scenename::SceneName;
use crate::events::audio::AudioCmd;
use crate::resources::input::InputState;
use crate::resources::sceneconfig::SceneConfig;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::alarm::{alarm_system, play_alarm_observer, stop_alarm_observer};
use crate::systems::audio::{log_audio_cmds, update_bevy_audio_cmds};
use crate::systems::camera::follow_camera_system;
use crate::systems::coin::{coin_overlap_observer, coin_proximity_system, coin_shine_system};
use crate::systems::collision::collision_detector;
use crate::systems::door::sliding_door_system;
use crate::systems::input::joystick_input_system;
use crate::systems::joystick::joystick_movement_system;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

/// Spacing between alarm lights around the reference point.
const LIGHT_SPACING: f32 = 1.5;
const LIGHT_HEIGHT: f32 = 3.0;

/// Entities created or resolved during setup.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneHandles {
    pub player: Option<Entity>,
    pub camera: Option<Entity>,
    pub reference: Option<Entity>,
    pub door: Option<Entity>,
    pub coin: Option<Entity>,
    pub alarm: Option<Entity>,
    pub lights: Vec<Entity>,
}

/// The two ordering phases of a frame.
pub struct SceneSchedules {
    /// Input, movement and every proximity controller.
    pub update: Schedule,
    /// Runs after `update`; the follow camera lives here.
    pub late_update: Schedule,
}

/// Create a world with the resources every system expects.
pub fn init_world(config: SceneConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WorldSignals::default());
    world.insert_resource(Messages::<AudioCmd>::default());
    world.insert_resource(config);
    world
}

/// Register the scene's global observers.
pub fn register_observers(world: &mut World) {
    world.add_observer(coin_overlap_observer);
    world.add_observer(play_alarm_observer);
    world.add_observer(stop_alarm_observer);
    world.flush();
}

/// One-time lookup of an entity by its [`SceneName`].
pub fn find_by_name(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query::<(Entity, &SceneName)>();
    query
        .iter(world)
        .find(|(_, n)| n.as_str() == name)
        .map(|(entity, _)| entity)
}

fn resolve(world: &mut World, role: &str, name: &str) -> Option<Entity> {
    let found = find_by_name(world, name);
    if found.is_none() {
        warn!("{}: no object named '{}'; feature disabled", role, name);
    }
    found
}

/// Place the named scene objects. Controllers are attached later by
/// [`wire_controllers`].
pub fn spawn_scene_objects(world: &mut World, config: &SceneConfig) -> Vec<Entity> {
    let s = &config.scene;

    world.spawn((
        SceneName::new(s.player_name.clone()),
        Position::from_vec(s.player_position),
        Renderable::default(),
        SphereCollider::new(s.player_collider_radius),
    ));
    world.spawn((
        SceneName::new(s.camera_name.clone()),
        Position::from_vec(s.camera_position),
    ));
    world.spawn((
        SceneName::new(s.reference_name.clone()),
        Position::from_vec(s.reference_position),
    ));
    world.spawn((
        SceneName::new(s.door_name.clone()),
        Position::from_vec(s.door_position),
        Renderable::default(),
    ));
    world.spawn((
        SceneName::new(s.coin_name.clone()),
        Position::from_vec(s.coin_position),
        Renderable::default(),
        SphereCollider::new(config.coin.collider_radius),
        Emission::new(config.coin.color),
    ));

    let a = &config.alarm;
    let first = -(a.light_count.saturating_sub(1) as f32) * LIGHT_SPACING * 0.5;
    (0..a.light_count)
        .map(|i| {
            let offset = Vec3::new(first + i as f32 * LIGHT_SPACING, LIGHT_HEIGHT, 0.0);
            world
                .spawn((
                    SceneName::new(format!("AlarmLight{}", i)),
                    Position::from_vec(s.reference_position + offset),
                    AlarmLight::new(a.light_color, a.light_intensity),
                ))
                .id()
        })
        .collect()
}

/// Resolve collaborators by name once and attach the controllers.
pub fn wire_controllers(world: &mut World, config: &SceneConfig, lights: Vec<Entity>) -> SceneHandles {
    let s = &config.scene;
    let player = resolve(world, "scene", &s.player_name);
    let camera = resolve(world, "camera", &s.camera_name);
    let reference = resolve(world, "alarm", &s.reference_name);
    let door = resolve(world, "door", &s.door_name);
    let coin = resolve(world, "coin", &s.coin_name);

    if let Some(player) = player {
        let j = &config.joystick;
        world.entity_mut(player).insert(
            JoystickControlled::new(j.speed, j.plane)
                .with_dead_zone(j.dead_zone)
                .with_clamps(AxisClamp::new(j.min_a, j.max_a), AxisClamp::new(j.min_b, j.max_b))
                .with_serial_format(j.serial_format),
        );
    }

    if let Some(camera) = camera {
        let c = &config.camera;
        world.entity_mut(camera).insert(
            FollowCamera::new(player, c.offset)
                .with_max_distance(c.max_distance)
                .with_speed(c.speed),
        );
    }

    if let Some(door) = door {
        let d = &config.door;
        let closed = world
            .get::<Position>(door)
            .map(|p| p.pos)
            .unwrap_or(s.door_position);
        world.entity_mut(door).insert(
            SlidingDoor::new(player, closed, d.open_offset)
                .with_radius(d.radius)
                .with_speed(d.speed),
        );
    }

    if let Some(coin) = coin {
        let k = &config.coin;
        let effect = k.effect_name.clone().map(|name| SpawnEffect {
            name,
            lifetime: k.effect_lifetime,
        });
        let mut collectible = Collectible::new(player)
            .with_player_name(Some(s.player_name.clone()))
            .with_collection_radius(k.collection_radius)
            .with_shine_range(k.min_shine_distance, k.max_shine_distance)
            .with_emission(k.color, k.min_intensity, k.max_intensity)
            .with_action(k.on_collect)
            .with_spawn_effect(effect);
        collectible.collect_on_proximity = k.collect_on_proximity;
        collectible.collect_on_overlap = k.collect_on_overlap;
        world.entity_mut(coin).insert(collectible);
    }

    let a = &config.alarm;
    if a.clip.is_none() {
        warn!("alarm: no sound clip configured; alarm sound disabled");
    }
    let alarm = world
        .spawn((
            SceneName::new("Alarm"),
            EmergencyAlarm::new(player, reference, a.radius)
                .with_lights(lights.iter().copied())
                .with_colors(a.emergency_color, a.clear_color)
                .with_base_interval(a.base_interval)
                .with_clip(a.clip.clone())
                .with_play_on_start(a.play_on_start),
        ))
        .id();

    info!(
        "scene wired: player={:?} camera={:?} reference={:?} door={:?} coin={:?} lights={}",
        player,
        camera,
        reference,
        door,
        coin,
        lights.len()
    );

    SceneHandles {
        player,
        camera,
        reference,
        door,
        coin,
        alarm: Some(alarm),
        lights,
    }
}

/// Spawn the scene, wire it and store the resulting [`SceneHandles`].
pub fn setup_scene(world: &mut World) -> SceneHandles {
    let config = world
        .get_resource::<SceneConfig>()
        .cloned()
        .unwrap_or_default();
    let lights = spawn_scene_objects(world, &config);
    let handles = wire_controllers(world, &config, lights);
    world.insert_resource(handles.clone());
    handles
}

/// Build the update and late-update schedules.
pub fn build_schedules() -> SceneSchedules {
    let mut update = Schedule::default();
    update.add_systems(update_bevy_audio_cmds);
    update.add_systems(joystick_input_system);
    update.add_systems(joystick_movement_system.after(joystick_input_system));
    update.add_systems(sliding_door_system.after(joystick_movement_system));
    update.add_systems(alarm_system.after(joystick_movement_system));
    update.add_systems(coin_shine_system.after(joystick_movement_system));
    update.add_systems(coin_proximity_system.after(coin_shine_system));
    update.add_systems(collision_detector.after(coin_proximity_system));
    update.add_systems(ttl_system);
    update.add_systems(
        log_audio_cmds
            .after(update_bevy_audio_cmds)
            .after(alarm_system),
    );

    let mut late_update = Schedule::default();
    late_update.add_systems(follow_camera_system);

    SceneSchedules {
        update,
        late_update,
    }
}

/// Advance the world by one frame of `dt` seconds.
pub fn run_frame(world: &mut World, schedules: &mut SceneSchedules, dt: f32) {
    update_world_time(world, dt);
    schedules.update.run(world);
    schedules.late_update.run(world);
    world.clear_trackers();
}
