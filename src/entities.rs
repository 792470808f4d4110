//! All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield coordinates (origin top-left, y down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True only for a positive-area overlap; rectangles that merely share an
    /// edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Fixed horizontal position; the player never moves sideways.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity in pixels per frame (negative = upward).
    pub velocity: f32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// A pipe pair: a top pipe hanging from the ceiling down to `top_height` and
/// a bottom pipe rising from the floor up to `bottom_y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub top_height: f32,
    /// Top edge of the bottom pipe (`top_height + gap`).
    pub bottom_y: f32,
    /// Set once the player has cleared this pair and the point was awarded.
    pub passed: bool,
}

impl Obstacle {
    pub fn top_rect(&self, pipe_width: f32) -> Rect {
        Rect::new(self.x, 0.0, pipe_width, self.top_height)
    }

    pub fn bottom_rect(&self, pipe_width: f32, field_height: f32) -> Rect {
        Rect::new(self.x, self.bottom_y, pipe_width, field_height - self.bottom_y)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One play session.  Rebuilt from scratch on every reset.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
}
