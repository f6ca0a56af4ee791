//! Scene configuration resource.
//!
//! Manages controller settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration. Vectors
//! are written as `x,y,z` and colours as `r,g,b[,a]` with float channels.
//!
//! # Configuration File Format
//!
//! ```ini
//! [scene]
//! player = Player
//! reference = Exit
//! player_position = 0,0,0
//!
//! [camera]
//! offset = 0,6,-8
//! max_distance = 9
//! speed = 4
//!
//! [joystick]
//! speed = 3
//! plane = xz
//! dead_zone = 0.15
//! serial_format = auto
//!
//! [alarm]
//! radius = 12
//! base_interval = 0.15
//! emergency_color = 1,0,0
//! clear_color = 0,1,0
//! clip = siren
//!
//! [door]
//! radius = 3
//! open_offset = 0,3,0
//!
//! [coin]
//! collection_radius = 0.5
//! on_collect = despawn
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::collectible::CollectAction;
use crate::components::inputcontrolled::{MovementPlane, SerialFormat};
use crate::components::light::Rgba;

const DEFAULT_CONFIG_PATH: &str = "./scene.ini";
/// Written for unset optional values.
const NONE: &str = "none";

/// Names and initial placement of scene objects.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub player_name: String,
    pub camera_name: String,
    pub reference_name: String,
    pub door_name: String,
    pub coin_name: String,
    pub player_position: Vec3,
    pub camera_position: Vec3,
    pub reference_position: Vec3,
    pub door_position: Vec3,
    pub coin_position: Vec3,
    /// Radius of the player's overlap sphere.
    pub player_collider_radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub offset: Vec3,
    pub max_distance: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoystickSettings {
    pub speed: f32,
    pub plane: MovementPlane,
    pub dead_zone: f32,
    pub min_a: f32,
    pub max_a: f32,
    pub min_b: f32,
    pub max_b: f32,
    pub serial_format: SerialFormat,
    /// Serial source to read `x,y` lines from. `None` means keyboard only.
    pub serial_port: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmSettings {
    pub radius: f32,
    pub base_interval: f32,
    pub emergency_color: Rgba,
    pub clear_color: Rgba,
    pub play_on_start: bool,
    pub clip: Option<String>,
    pub light_count: usize,
    pub light_intensity: f32,
    pub light_color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoorSettings {
    pub radius: f32,
    pub speed: f32,
    pub open_offset: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinSettings {
    pub collection_radius: f32,
    pub min_shine_distance: f32,
    pub max_shine_distance: f32,
    pub min_intensity: f32,
    pub max_intensity: f32,
    pub color: Rgba,
    pub collect_on_proximity: bool,
    pub collect_on_overlap: bool,
    pub on_collect: CollectAction,
    pub collider_radius: f32,
    pub effect_name: Option<String>,
    pub effect_lifetime: f32,
}

/// Scene configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub scene: SceneLayout,
    pub camera: CameraSettings,
    pub joystick: JoystickSettings,
    pub alarm: AlarmSettings,
    pub door: DoorSettings,
    pub coin: CoinSettings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_vec3(s: &str) -> Option<Vec3> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [x, y, z] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

fn fmt_vec3(v: Vec3) -> String {
    format!("{},{},{}", v.x, v.y, v.z)
}

fn fmt_rgba(c: Rgba) -> String {
    format!("{},{},{},{}", c.r, c.g, c.b, c.a)
}

/// Typed accessors over [`Ini`] that warn and keep the current value on
/// malformed entries.
struct Reader<'a>(&'a Ini);

impl Reader<'_> {
    fn f32(&self, section: &str, key: &str, slot: &mut f32) {
        match self.0.getfloat(section, key) {
            Ok(Some(v)) => *slot = v as f32,
            Ok(None) => {}
            Err(e) => warn!("[{}] {}: {}", section, key, e),
        }
    }

    fn bool(&self, section: &str, key: &str, slot: &mut bool) {
        match self.0.getbool(section, key) {
            Ok(Some(v)) => *slot = v,
            Ok(None) => {}
            Err(e) => warn!("[{}] {}: {}", section, key, e),
        }
    }

    fn usize(&self, section: &str, key: &str, slot: &mut usize) {
        match self.0.getuint(section, key) {
            Ok(Some(v)) => *slot = v as usize,
            Ok(None) => {}
            Err(e) => warn!("[{}] {}: {}", section, key, e),
        }
    }

    fn string(&self, section: &str, key: &str, slot: &mut String) {
        if let Some(v) = self.0.get(section, key) {
            *slot = v;
        }
    }

    /// `none` or an empty value clears the option.
    fn opt_string(&self, section: &str, key: &str, slot: &mut Option<String>) {
        if let Some(v) = self.0.get(section, key) {
            let v = v.trim();
            *slot = if v.is_empty() || v.eq_ignore_ascii_case(NONE) {
                None
            } else {
                Some(v.to_string())
            };
        }
    }

    fn parsed<T>(&self, section: &str, key: &str, slot: &mut T, parse: impl Fn(&str) -> Option<T>) {
        if let Some(v) = self.0.get(section, key) {
            match parse(&v) {
                Some(parsed) => *slot = parsed,
                None => warn!("[{}] {}: cannot parse '{}'", section, key, v),
            }
        }
    }
}

impl SceneConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            scene: SceneLayout {
                player_name: "Player".into(),
                camera_name: "Camera".into(),
                reference_name: "Exit".into(),
                door_name: "Door".into(),
                coin_name: "Coin".into(),
                player_position: Vec3::ZERO,
                camera_position: Vec3::new(0.0, 10.0, -10.0),
                reference_position: Vec3::new(12.0, 0.0, 0.0),
                door_position: Vec3::new(6.0, 0.0, 1.0),
                coin_position: Vec3::new(9.0, 0.0, 0.0),
                player_collider_radius: 0.5,
            },
            camera: CameraSettings {
                offset: Vec3::new(0.0, 6.0, -8.0),
                max_distance: 9.0,
                speed: 4.0,
            },
            joystick: JoystickSettings {
                speed: 3.0,
                plane: MovementPlane::XZ,
                dead_zone: 0.15,
                min_a: 0.0,
                max_a: 0.0,
                min_b: 0.0,
                max_b: 0.0,
                serial_format: SerialFormat::Auto,
                serial_port: None,
            },
            alarm: AlarmSettings {
                radius: 12.0,
                base_interval: 0.15,
                emergency_color: Rgba::RED,
                clear_color: Rgba::GREEN,
                play_on_start: true,
                clip: Some("siren".into()),
                light_count: 3,
                light_intensity: 1.5,
                light_color: Rgba::WHITE,
            },
            door: DoorSettings {
                radius: 3.0,
                speed: 2.0,
                open_offset: Vec3::new(0.0, 3.0, 0.0),
            },
            coin: CoinSettings {
                collection_radius: 0.5,
                min_shine_distance: 1.0,
                max_shine_distance: 8.0,
                min_intensity: 0.2,
                max_intensity: 3.0,
                color: Rgba::YELLOW,
                collect_on_proximity: true,
                collect_on_overlap: true,
                on_collect: CollectAction::Despawn,
                collider_radius: 0.3,
                effect_name: Some("CoinSparkle".into()),
                effect_lifetime: 1.0,
            },
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values; malformed values
    /// are reported and skipped. Returns an error if the file cannot be read
    /// or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&ini);

        info!(
            "Loaded scene config from {:?}: player='{}' reference='{}' serial={:?}",
            self.config_path,
            self.scene.player_name,
            self.scene.reference_name,
            self.joystick.serial_port
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&ini);
        Ok(())
    }

    fn apply(&mut self, ini: &Ini) {
        let r = Reader(ini);

        // [scene] section
        let s = &mut self.scene;
        r.string("scene", "player", &mut s.player_name);
        r.string("scene", "camera", &mut s.camera_name);
        r.string("scene", "reference", &mut s.reference_name);
        r.string("scene", "door", &mut s.door_name);
        r.string("scene", "coin", &mut s.coin_name);
        r.parsed("scene", "player_position", &mut s.player_position, parse_vec3);
        r.parsed("scene", "camera_position", &mut s.camera_position, parse_vec3);
        r.parsed("scene", "reference_position", &mut s.reference_position, parse_vec3);
        r.parsed("scene", "door_position", &mut s.door_position, parse_vec3);
        r.parsed("scene", "coin_position", &mut s.coin_position, parse_vec3);
        r.f32("scene", "player_collider_radius", &mut s.player_collider_radius);

        // [camera] section
        let c = &mut self.camera;
        r.parsed("camera", "offset", &mut c.offset, parse_vec3);
        r.f32("camera", "max_distance", &mut c.max_distance);
        r.f32("camera", "speed", &mut c.speed);

        // [joystick] section
        let j = &mut self.joystick;
        r.f32("joystick", "speed", &mut j.speed);
        r.parsed("joystick", "plane", &mut j.plane, MovementPlane::parse);
        r.f32("joystick", "dead_zone", &mut j.dead_zone);
        r.f32("joystick", "min_a", &mut j.min_a);
        r.f32("joystick", "max_a", &mut j.max_a);
        r.f32("joystick", "min_b", &mut j.min_b);
        r.f32("joystick", "max_b", &mut j.max_b);
        r.parsed("joystick", "serial_format", &mut j.serial_format, SerialFormat::parse);
        let mut port = j
            .serial_port
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned());
        r.opt_string("joystick", "serial_port", &mut port);
        j.serial_port = port.map(PathBuf::from);

        // [alarm] section
        let a = &mut self.alarm;
        r.f32("alarm", "radius", &mut a.radius);
        r.f32("alarm", "base_interval", &mut a.base_interval);
        r.parsed("alarm", "emergency_color", &mut a.emergency_color, Rgba::parse);
        r.parsed("alarm", "clear_color", &mut a.clear_color, Rgba::parse);
        r.bool("alarm", "play_on_start", &mut a.play_on_start);
        r.opt_string("alarm", "clip", &mut a.clip);
        r.usize("alarm", "light_count", &mut a.light_count);
        r.f32("alarm", "light_intensity", &mut a.light_intensity);
        r.parsed("alarm", "light_color", &mut a.light_color, Rgba::parse);

        // [door] section
        let d = &mut self.door;
        r.f32("door", "radius", &mut d.radius);
        r.f32("door", "speed", &mut d.speed);
        r.parsed("door", "open_offset", &mut d.open_offset, parse_vec3);

        // [coin] section
        let k = &mut self.coin;
        r.f32("coin", "collection_radius", &mut k.collection_radius);
        r.f32("coin", "min_shine_distance", &mut k.min_shine_distance);
        r.f32("coin", "max_shine_distance", &mut k.max_shine_distance);
        r.f32("coin", "min_intensity", &mut k.min_intensity);
        r.f32("coin", "max_intensity", &mut k.max_intensity);
        r.parsed("coin", "color", &mut k.color, Rgba::parse);
        r.bool("coin", "collect_on_proximity", &mut k.collect_on_proximity);
        r.bool("coin", "collect_on_overlap", &mut k.collect_on_overlap);
        r.parsed("coin", "on_collect", &mut k.on_collect, CollectAction::parse);
        r.f32("coin", "collider_radius", &mut k.collider_radius);
        r.opt_string("coin", "effect_name", &mut k.effect_name);
        r.f32("coin", "effect_lifetime", &mut k.effect_lifetime);
    }

    /// Render the configuration as an [`Ini`].
    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        let s = &self.scene;
        set("scene", "player", s.player_name.clone());
        set("scene", "camera", s.camera_name.clone());
        set("scene", "reference", s.reference_name.clone());
        set("scene", "door", s.door_name.clone());
        set("scene", "coin", s.coin_name.clone());
        set("scene", "player_position", fmt_vec3(s.player_position));
        set("scene", "camera_position", fmt_vec3(s.camera_position));
        set("scene", "reference_position", fmt_vec3(s.reference_position));
        set("scene", "door_position", fmt_vec3(s.door_position));
        set("scene", "coin_position", fmt_vec3(s.coin_position));
        set("scene", "player_collider_radius", s.player_collider_radius.to_string());

        let c = &self.camera;
        set("camera", "offset", fmt_vec3(c.offset));
        set("camera", "max_distance", c.max_distance.to_string());
        set("camera", "speed", c.speed.to_string());

        let j = &self.joystick;
        set("joystick", "speed", j.speed.to_string());
        let plane = match j.plane {
            MovementPlane::XY => "xy",
            MovementPlane::XZ => "xz",
        };
        set("joystick", "plane", plane.to_string());
        set("joystick", "dead_zone", j.dead_zone.to_string());
        set("joystick", "min_a", j.min_a.to_string());
        set("joystick", "max_a", j.max_a.to_string());
        set("joystick", "min_b", j.min_b.to_string());
        set("joystick", "max_b", j.max_b.to_string());
        let format = match j.serial_format {
            SerialFormat::Auto => "auto",
            SerialFormat::Raw => "raw",
            SerialFormat::Normalized => "normalized",
        };
        set("joystick", "serial_format", format.to_string());
        set(
            "joystick",
            "serial_port",
            j.serial_port
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| NONE.to_string()),
        );

        let a = &self.alarm;
        set("alarm", "radius", a.radius.to_string());
        set("alarm", "base_interval", a.base_interval.to_string());
        set("alarm", "emergency_color", fmt_rgba(a.emergency_color));
        set("alarm", "clear_color", fmt_rgba(a.clear_color));
        set("alarm", "play_on_start", a.play_on_start.to_string());
        set("alarm", "clip", a.clip.clone().unwrap_or_else(|| NONE.to_string()));
        set("alarm", "light_count", a.light_count.to_string());
        set("alarm", "light_intensity", a.light_intensity.to_string());
        set("alarm", "light_color", fmt_rgba(a.light_color));

        let d = &self.door;
        set("door", "radius", d.radius.to_string());
        set("door", "speed", d.speed.to_string());
        set("door", "open_offset", fmt_vec3(d.open_offset));

        let k = &self.coin;
        set("coin", "collection_radius", k.collection_radius.to_string());
        set("coin", "min_shine_distance", k.min_shine_distance.to_string());
        set("coin", "max_shine_distance", k.max_shine_distance.to_string());
        set("coin", "min_intensity", k.min_intensity.to_string());
        set("coin", "max_intensity", k.max_intensity.to_string());
        set("coin", "color", fmt_rgba(k.color));
        set("coin", "collect_on_proximity", k.collect_on_proximity.to_string());
        set("coin", "collect_on_overlap", k.collect_on_overlap.to_string());
        let action = match k.on_collect {
            CollectAction::Despawn => "despawn",
            CollectAction::Disable => "disable",
        };
        set("coin", "on_collect", action.to_string());
        set("coin", "collider_radius", k.collider_radius.to_string());
        set("coin", "effect_name", k.effect_name.clone().unwrap_or_else(|| NONE.to_string()));
        set("coin", "effect_lifetime", k.effect_lifetime.to_string());

        config
    }

    /// Render the configuration as INI text.
    pub fn to_ini_string(&self) -> String {
        self.to_ini().writes()
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved scene config to {:?}", self.config_path);

        Ok(())
    }
}
