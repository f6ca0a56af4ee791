//! Proxiscene main entry point.
//!
//! Runs the scene headless for a fixed number of frames:
//! - **bevy_ecs** for the entity-component-system runtime
//! - **configparser** INI file for controller settings
//! - JSON scenario for scripted keyboard input and alarm triggers
//! - optional serial source for the joystick (`x,y` lines)
//!
//! # Main Loop
//!
//! 1. Load config, build the ECS world, open the serial source if any
//! 2. Spawn and wire the scene, register observers, build schedules
//! 3. For each frame: apply scripted keys and alarm cues, then run the
//!    update and late-update schedules
//! 4. Log a summary and stop the serial reader
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --config demos/scene.ini --scenario demos/walk.json
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::{Entity, World};
use clap::Parser;
use log::{info, warn};

use proxiscene::components::door::SlidingDoor;
use proxiscene::components::position::Position;
use proxiscene::events::alarm::{PlayAlarm, StopAlarm};
use proxiscene::game::{build_schedules, init_world, register_observers, run_frame, setup_scene};
use proxiscene::resources::input::InputState;
use proxiscene::resources::sceneconfig::SceneConfig;
use proxiscene::resources::serial::{setup_serial, shutdown_serial};
use proxiscene::resources::worldsignals::{ALARM_FACTOR, COINS_COLLECTED, WorldSignals};
use proxiscene::scenario::{AlarmAction, Scenario};

/// Headless proximity scene runner.
#[derive(Parser)]
#[command(version, about = "Runs the proximity scene controllers headless.")]
struct Cli {
    /// INI file with controller settings.
    #[arg(long, value_name = "PATH", default_value = "./scene.ini")]
    config: PathBuf,

    /// JSON scenario with scripted keys and alarm cues. Uses a built-in walk
    /// when omitted.
    #[arg(long, value_name = "PATH")]
    scenario: Option<String>,

    /// Serial source for joystick lines; overrides `[joystick] serial_port`.
    #[arg(long, value_name = "PATH")]
    serial: Option<PathBuf>,

    /// Override the scenario's frame count.
    #[arg(long)]
    frames: Option<u64>,

    /// Override the scenario's seconds per frame.
    #[arg(long)]
    dt: Option<f32>,

    /// Write the default configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write defaults and quit
    if let Some(path) = cli.write_default_config {
        if let Err(e) = SceneConfig::with_path(&path).save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Default config written to {}", path.display());
        return;
    }

    let mut config = SceneConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let mut scenario = match &cli.scenario {
        Some(path) => match Scenario::load_from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading scenario {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Scenario::builtin(),
    };
    if let Some(frames) = cli.frames {
        scenario.frames = frames;
    }
    if let Some(dt) = cli.dt {
        scenario.dt = dt;
    }

    let serial_port = cli.serial.or_else(|| config.joystick.serial_port.clone());

    // --------------- ECS world + scene ---------------
    let mut world = init_world(config);
    if let Some(port) = serial_port {
        setup_serial(&mut world, &port);
    }
    let handles = setup_scene(&mut world);
    register_observers(&mut world);
    let mut schedules = build_schedules();

    info!(
        "running {} frames at dt={:.4}s",
        scenario.frames, scenario.dt
    );

    // --------------- Main loop ---------------
    for frame in 0..scenario.frames {
        let held = scenario.keys_at(frame);
        world.resource_mut::<InputState>().set_held(&held);

        if let Some(alarm) = handles.alarm {
            for action in scenario.cues_at(frame) {
                match action {
                    AlarmAction::Play => world.trigger(PlayAlarm { alarm }),
                    AlarmAction::Stop => world.trigger(StopAlarm { alarm }),
                }
            }
        }

        run_frame(&mut world, &mut schedules, scenario.dt);
    }

    // --------------- Summary ---------------
    let position_of = |world: &World, entity: Option<Entity>| {
        entity.and_then(|e| world.get::<Position>(e)).map(|p| p.pos)
    };
    info!("player at {:?}", position_of(&world, handles.player));
    info!("camera at {:?}", position_of(&world, handles.camera));
    if let Some(door) = handles.door.and_then(|d| world.get::<SlidingDoor>(d)) {
        info!("door {:?} at {:?}", door.state, position_of(&world, handles.door));
    }
    let signals = world.resource::<WorldSignals>();
    info!(
        "coins collected: {}, alarm factor: {:.2}",
        signals.get_integer(COINS_COLLECTED).unwrap_or(0),
        signals.get_scalar(ALARM_FACTOR).unwrap_or(0.0)
    );

    shutdown_serial(&mut world);
}
