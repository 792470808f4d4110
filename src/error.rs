use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

/// Geometry that the simulation cannot work with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("spawn_interval must be at least 1 frame")]
    ZeroSpawnInterval,

    #[error(
        "pipe gap {gap} plus twice the minimum pipe height {min_height} exceeds playfield height {height}"
    )]
    GapTooLarge { gap: f32, min_height: f32, height: f32 },

    #[error("player start ({x}, {y}) puts the player outside the {width}x{height} playfield")]
    PlayerOutOfBounds { x: f32, y: f32, width: f32, height: f32 },

    #[error("invalid colour {0:?}, expected #rgb or #rrggbb")]
    BadColor(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
