/// Loop controller: owns one session and steps it a frame at a time.
///
/// The driver (terminal clock or a test) calls `tick` once per frame and
/// stops calling it once a tick reports `GameOver`.  Input is applied
/// between ticks through `flap`, `reset` or `apply`.

use std::io;

use log::info;
use rand::Rng;

use crate::compute::{advance_obstacles, flap, init_state, integrate, maybe_spawn, Motion};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::error::ConfigError;
use crate::render::{render, Surface};

/// Player commands, buffered by the driver and applied before a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Flap,
    Reset,
}

/// What the driver should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running; schedule the next frame.
    Continue,
    /// The session ended during this tick.  Show the final score and stop.
    GameOver { score: u32 },
    /// The session was already over; nothing was updated or drawn.
    Stopped,
}

pub struct Game<R> {
    config: GameConfig,
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Validate `config` and start a running session.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = init_state(&config);
        info!(
            "new game on a {}x{} playfield",
            config.field_width, config.field_height
        );
        Ok(Game { config, state, rng })
    }

    /// Resume from an existing session snapshot, e.g. a hand-built scene.
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Game { config, state, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_game_over(&self) -> bool {
        self.state.status == GameStatus::GameOver
    }

    /// Give the player upward velocity.  Ignored once the game is over.
    pub fn flap(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        flap(&mut self.state.player, &self.config);
        true
    }

    /// Throw away the current session and start a new one.
    pub fn reset(&mut self) {
        info!("session reset (previous score {})", self.state.score);
        self.state = init_state(&self.config);
    }

    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Flap => {
                self.flap();
            }
            Input::Reset => self.reset(),
        }
    }

    /// Advance the simulation one frame without drawing.
    pub fn update(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Stopped;
        }

        // ── 1. Physics ───────────────────────────────────────────────────────
        if integrate(&mut self.state.player, &self.config) == Motion::HitGround {
            return self.end_session("hit the ground");
        }

        // ── 2. Spawn ─────────────────────────────────────────────────────────
        self.state.frame += 1;
        maybe_spawn(
            &mut self.state.obstacles,
            self.state.frame,
            &self.config,
            &mut self.rng,
        );

        // ── 3. Move, collide, score, prune ───────────────────────────────────
        let report = advance_obstacles(
            &mut self.state.obstacles,
            &self.state.player,
            &mut self.state.score,
            &self.config,
        );
        if report.collided {
            return self.end_session("hit a pipe");
        }

        TickOutcome::Continue
    }

    /// One scheduled frame: update, then draw.  The frame that ends the game
    /// is still drawn so the final position is visible.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> io::Result<TickOutcome> {
        let outcome = self.update();
        if outcome != TickOutcome::Stopped {
            render(surface, &self.state, &self.config)?;
        }
        Ok(outcome)
    }

    // Latches GameOver; a second call changes nothing.
    fn end_session(&mut self, cause: &str) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Stopped;
        }
        self.state.status = GameStatus::GameOver;
        info!(
            "game over at frame {}: {}, final score {}",
            self.state.frame, cause, self.state.score
        );
        TickOutcome::GameOver {
            score: self.state.score,
        }
    }
}
