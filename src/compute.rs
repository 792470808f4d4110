/// Game-logic phases.
///
/// Each phase takes the pieces of `GameState` it works on plus the immutable
/// `GameConfig`, mutates them in place and reports what happened.  Nothing
/// here checks `GameStatus`; sequencing and the game-over latch belong to
/// `game::Game`.  Side effects are limited to the injected RNG.

use log::{debug, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Obstacle, Player};

/// Outcome of one physics step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Airborne,
    /// Clamped against the ceiling; harmless.
    HitCeiling,
    /// Clamped against the floor; ends the session.
    HitGround,
}

/// What the obstacle pass observed this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObstacleReport {
    pub collided: bool,
    pub scored: u32,
    pub pruned: usize,
}

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn spawn_player(config: &GameConfig) -> Player {
    Player {
        x: config.player_start_x,
        y: config.player_start_y,
        width: config.player_width,
        height: config.player_height,
        velocity: 0.0,
    }
}

/// Fresh session: player at the start position, no pipes, zero score.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        player: spawn_player(config),
        obstacles: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        frame: 0,
    }
}

// ── Physics ──────────────────────────────────────────────────────────────────

/// Override the current velocity with the lift impulse.
pub fn flap(player: &mut Player, config: &GameConfig) {
    player.velocity = config.lift;
}

/// Apply gravity, move, then clamp to the playfield.
pub fn integrate(player: &mut Player, config: &GameConfig) -> Motion {
    player.velocity += config.gravity;
    player.y += player.velocity;
    trace!("player y={:.2} v={:.2}", player.y, player.velocity);

    let floor = config.field_height - player.height;
    if player.y + player.height >= config.field_height {
        player.y = floor;
        player.velocity = 0.0;
        return Motion::HitGround;
    }
    if player.y < 0.0 {
        player.y = 0.0;
        player.velocity = 0.0;
        return Motion::HitCeiling;
    }
    Motion::Airborne
}

// ── Obstacle generation ──────────────────────────────────────────────────────

/// Build a pipe pair at the right edge with a random gap position.
///
/// The top pipe height is an integer drawn uniformly from
/// `[min_pipe_height, field_height - pipe_gap - min_pipe_height]`.
pub fn generate_obstacle(config: &GameConfig, rng: &mut impl Rng) -> Obstacle {
    let (min, max) = config.top_height_range();
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    let top_height = if hi >= lo {
        rng.gen_range(lo..=hi) as f32
    } else {
        // fractional config with no whole number inside the range
        min
    };
    Obstacle {
        x: config.field_width,
        top_height,
        bottom_y: top_height + config.pipe_gap,
        passed: false,
    }
}

/// Spawn a pipe pair when `frame` lands on the spawn interval.
pub fn maybe_spawn(
    obstacles: &mut Vec<Obstacle>,
    frame: u64,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> bool {
    if frame % config.spawn_interval != 0 {
        return false;
    }
    let obstacle = generate_obstacle(config, rng);
    debug!(
        "frame {}: pipe spawned, gap {}..{}",
        frame, obstacle.top_height, obstacle.bottom_y
    );
    obstacles.push(obstacle);
    true
}

// ── Collision & scoring ──────────────────────────────────────────────────────

/// Does the player overlap either pipe of `obstacle` by a positive area?
pub fn collides(player: &Player, obstacle: &Obstacle, config: &GameConfig) -> bool {
    let bounds = player.bounds();
    bounds.intersects(&obstacle.top_rect(config.pipe_width))
        || bounds.intersects(&obstacle.bottom_rect(config.pipe_width, config.field_height))
}

/// Move every pipe left, test collisions, award pass-through points, and
/// drop pipes that have left the screen.
///
/// A collision skips scoring: the session is over and the score is latched
/// as it stood.  Pruning still runs so no off-screen pipe survives the frame.
pub fn advance_obstacles(
    obstacles: &mut Vec<Obstacle>,
    player: &Player,
    score: &mut u32,
    config: &GameConfig,
) -> ObstacleReport {
    let mut report = ObstacleReport::default();

    // ── 1. Scroll ────────────────────────────────────────────────────────────
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= config.pipe_speed;
    }

    // ── 2. Collide ───────────────────────────────────────────────────────────
    report.collided = obstacles.iter().any(|o| collides(player, o, config));

    // ── 3. Score ─────────────────────────────────────────────────────────────
    if !report.collided {
        for obstacle in obstacles.iter_mut() {
            if !obstacle.passed && obstacle.x + config.pipe_width < player.x {
                obstacle.passed = true;
                *score += 1;
                report.scored += 1;
                debug!("pipe cleared, score {}", *score);
            }
        }
    }

    // ── 4. Prune ─────────────────────────────────────────────────────────────
    let before = obstacles.len();
    obstacles.retain(|o| o.x + config.pipe_width >= 0.0);
    report.pruned = before - obstacles.len();

    report
}
