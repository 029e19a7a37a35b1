use serde::Deserialize;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Yaml(err) => write!(f, "yaml error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub ground_y: f32,
    pub width: f32,
    pub height: f32,
    pub attack_damage: i32,
    pub frame_delay: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            run_speed: 6.0,
            jump_speed: 8.0,
            gravity: 0.5,
            ground_y: 520.0,
            width: 128.0,
            height: 128.0,
            attack_damage: 25,
            frame_delay: 8,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BoarConfig {
    pub speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub width: f32,
    pub height: f32,
    pub max_health: i32,
    pub knockback_speed: f32,
    pub knockback_decay: f32,
    pub hit_duration: u32,
    pub frame_delay: u32,
}

impl Default for BoarConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            detection_range: 300.0,
            attack_range: 50.0,
            width: 50.0,
            height: 50.0,
            max_health: 100,
            knockback_speed: 8.0,
            knockback_decay: 0.8,
            hit_duration: 30,
            frame_delay: 8,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub dead_zone_width: f32,
    pub parallax_factor: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 3000.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            dead_zone_width: 200.0,
            parallax_factor: 0.8,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub boar: BoarConfig,
    pub world: WorldConfig,
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Loads the tuning file, falling back to compiled-in defaults when the
    /// file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|err| {
            eprintln!("config load failed ({}): {err}", path.display());
            Self::default()
        })
    }
}
