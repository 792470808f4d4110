/// Render stage — turns game state into draw calls.
///
/// No game logic lives here.  A `Surface` is anything that can clear itself
/// and fill rectangles given in playfield coordinates; the terminal front end
/// and the tests each provide one.

use std::io;

use crate::config::{GameConfig, Rgb};
use crate::entities::{GameState, Obstacle, Player, Rect};

/// Side length of the square eye marker, in playfield pixels.
pub const EYE_SIZE: f32 = 5.0;

/// A 2D drawing target addressed in playfield coordinates.
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()>;
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Paint one complete frame.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    state: &GameState,
    config: &GameConfig,
) -> io::Result<()> {
    surface.clear()?;
    draw_player(surface, &state.player, config)?;
    for obstacle in &state.obstacles {
        draw_obstacle(surface, obstacle, config)?;
    }
    Ok(())
}

/// Where the eye sits on a player: 60% across, 30% down.
pub fn eye_rect(player: &Player) -> Rect {
    Rect::new(
        player.x + player.width * 0.6,
        player.y + player.height * 0.3,
        EYE_SIZE,
        EYE_SIZE,
    )
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<S: Surface + ?Sized>(
    surface: &mut S,
    player: &Player,
    config: &GameConfig,
) -> io::Result<()> {
    surface.fill_rect(player.bounds(), config.theme.bird)?;
    surface.fill_rect(eye_rect(player), config.theme.eye)
}

fn draw_obstacle<S: Surface + ?Sized>(
    surface: &mut S,
    obstacle: &Obstacle,
    config: &GameConfig,
) -> io::Result<()> {
    surface.fill_rect(obstacle.top_rect(config.pipe_width), config.theme.pipe)?;
    surface.fill_rect(
        obstacle.bottom_rect(config.pipe_width, config.field_height),
        config.theme.pipe,
    )
}
