/// Game tuning and playfield geometry, loadable from TOML.
///
/// Every field has a default matching the classic tuning, so a config file
/// only needs to mention the values it changes.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GameError, GameResult};

// ── Colours ───────────────────────────────────────────────────────────────────

/// 24-bit colour.  Serialized as a `#rrggbb` / `#rgb` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let bad = || ConfigError::BadColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(bad)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| bad());
        match hex.len() {
            // #rgb expands each digit: "3" -> "33"
            3 => {
                let expand = |i: usize| channel(&hex[i..=i].repeat(2));
                Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Rgb::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(bad()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::parse(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_bird_color")]
    pub bird: Rgb,
    #[serde(default = "default_pipe_color")]
    pub pipe: Rgb,
    #[serde(default = "default_eye_color")]
    pub eye: Rgb,
}

fn default_bird_color() -> Rgb {
    Rgb::new(0xff, 0xcc, 0x33)
}
fn default_pipe_color() -> Rgb {
    Rgb::new(0x7a, 0x00, 0x19)
}
fn default_eye_color() -> Rgb {
    Rgb::new(0x33, 0x33, 0x33)
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bird: default_bird_color(),
            pipe: default_pipe_color(),
            eye: default_eye_color(),
        }
    }
}

// ── Game config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield size in logical pixels.
    #[serde(default = "default_field_width")]
    pub field_width: f32,
    #[serde(default = "default_field_height")]
    pub field_height: f32,

    #[serde(default = "default_player_width")]
    pub player_width: f32,
    #[serde(default = "default_player_height")]
    pub player_height: f32,
    #[serde(default = "default_player_start_x")]
    pub player_start_x: f32,
    #[serde(default = "default_player_start_y")]
    pub player_start_y: f32,

    /// Added to the player's velocity every frame.
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Velocity the player is set to on a flap (negative = upward).
    #[serde(default = "default_lift")]
    pub lift: f32,

    #[serde(default = "default_pipe_width")]
    pub pipe_width: f32,
    #[serde(default = "default_pipe_gap")]
    pub pipe_gap: f32,
    /// Horizontal distance every pipe moves left per frame.
    #[serde(default = "default_pipe_speed")]
    pub pipe_speed: f32,
    /// Frames between two pipe spawns.
    #[serde(default = "default_spawn_interval")]
    pub spawn_interval: u64,
    /// Shortest allowed top or bottom pipe.
    #[serde(default = "default_min_pipe_height")]
    pub min_pipe_height: f32,

    /// Target duration of one frame for the terminal driver.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,

    #[serde(default)]
    pub theme: Theme,
}

fn default_field_width() -> f32 {
    400.0
}
fn default_field_height() -> f32 {
    500.0
}
fn default_player_width() -> f32 {
    35.0
}
fn default_player_height() -> f32 {
    30.0
}
fn default_player_start_x() -> f32 {
    80.0
}
fn default_player_start_y() -> f32 {
    250.0
}
fn default_gravity() -> f32 {
    0.5
}
fn default_lift() -> f32 {
    -9.0
}
fn default_pipe_width() -> f32 {
    60.0
}
fn default_pipe_gap() -> f32 {
    150.0
}
fn default_pipe_speed() -> f32 {
    3.0
}
fn default_spawn_interval() -> u64 {
    100
}
fn default_min_pipe_height() -> f32 {
    50.0
}
fn default_frame_ms() -> u64 {
    16
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: default_field_width(),
            field_height: default_field_height(),
            player_width: default_player_width(),
            player_height: default_player_height(),
            player_start_x: default_player_start_x(),
            player_start_y: default_player_start_y(),
            gravity: default_gravity(),
            lift: default_lift(),
            pipe_width: default_pipe_width(),
            pipe_gap: default_pipe_gap(),
            pipe_speed: default_pipe_speed(),
            spawn_interval: default_spawn_interval(),
            min_pipe_height: default_min_pipe_height(),
            frame_ms: default_frame_ms(),
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Read `path` as TOML.  A missing file yields the defaults; a file that
    /// exists but does not parse is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => {
                let cfg: GameConfig = toml::from_str(&s)
                    .map_err(|e| GameError::Config(format!("parse {}: {}", path.display(), e)))?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(GameError::Config(format!("read {}: {}", path.display(), e))),
        }
    }

    /// Reject geometry that would make pipe generation or clamping undefined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_start_x", self.player_start_x),
            ("player_start_y", self.player_start_y),
            ("gravity", self.gravity),
            ("lift", self.lift),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            ("min_pipe_height", self.min_pipe_height),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.min_pipe_height < 0.0 {
            return Err(ConfigError::NotPositive {
                field: "min_pipe_height",
                value: self.min_pipe_height,
            });
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.pipe_gap + 2.0 * self.min_pipe_height > self.field_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                min_height: self.min_pipe_height,
                height: self.field_height,
            });
        }
        let x_ok = self.player_start_x >= 0.0
            && self.player_start_x + self.player_width <= self.field_width;
        let y_ok = self.player_start_y >= 0.0
            && self.player_start_y + self.player_height < self.field_height;
        if !x_ok || !y_ok {
            return Err(ConfigError::PlayerOutOfBounds {
                x: self.player_start_x,
                y: self.player_start_y,
                width: self.field_width,
                height: self.field_height,
            });
        }
        Ok(())
    }

    /// Inclusive range the top pipe height is drawn from.
    pub fn top_height_range(&self) -> (f32, f32) {
        (
            self.min_pipe_height,
            self.field_height - self.pipe_gap - self.min_pipe_height,
        )
    }
}
