//! Scripted input for headless runs.
//!
//! A [`Scenario`] says how long to run, which keys are held on which frames
//! and when to fire the external alarm triggers. It is read from JSON:
//!
//! ```json
//! {
//!   "dt": 0.016666,
//!   "frames": 600,
//!   "keys": [ { "from": 0, "to": 240, "keys": ["D"] } ],
//!   "alarm": [ { "frame": 450, "action": "stop" }, { "frame": 520, "action": "play" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::resources::input::Key;

fn default_dt() -> f32 {
    1.0 / 60.0
}

/// Keys held for frames in `[from, to)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct KeySpan {
    pub from: u64,
    pub to: u64,
    pub keys: Vec<Key>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlarmAction {
    Play,
    Stop,
}

/// External alarm trigger fired before the given frame runs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AlarmCue {
    pub frame: u64,
    pub action: AlarmAction,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Seconds per frame.
    #[serde(default = "default_dt")]
    pub dt: f32,
    pub frames: u64,
    #[serde(default)]
    pub keys: Vec<KeySpan>,
    #[serde(default)]
    pub alarm: Vec<AlarmCue>,
}

impl Scenario {
    /// Loads a scenario from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&file_content)?;
        Ok(scenario)
    }

    /// Walk the player right along x through the door, past the coin and up
    /// to the alarm's reference point, then stop and restart the alarm.
    pub fn builtin() -> Self {
        Scenario {
            dt: default_dt(),
            frames: 600,
            keys: vec![KeySpan {
                from: 0,
                to: 240,
                keys: vec![Key::D],
            }],
            alarm: vec![
                AlarmCue {
                    frame: 450,
                    action: AlarmAction::Stop,
                },
                AlarmCue {
                    frame: 520,
                    action: AlarmAction::Play,
                },
            ],
        }
    }

    /// Keys held during `frame`.
    pub fn keys_at(&self, frame: u64) -> Vec<Key> {
        let mut held: Vec<Key> = Vec::new();
        for span in self.keys.iter().filter(|s| s.from <= frame && frame < s.to) {
            for key in &span.keys {
                if !held.contains(key) {
                    held.push(*key);
                }
            }
        }
        held
    }

    /// Alarm cues due before `frame` runs.
    pub fn cues_at(&self, frame: u64) -> impl Iterator<Item = AlarmAction> + '_ {
        self.alarm
            .iter()
            .filter(move |c| c.frame == frame)
            .map(|c| c.action)
    }
}
