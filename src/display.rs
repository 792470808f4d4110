/// Terminal presentation layer — all terminal I/O lives here.
///
/// `TerminalSurface` maps playfield pixels onto character cells so the
/// library's render stage can paint into the terminal.  The HUD, controls
/// hint and game-over overlay are drawn directly on top of it.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use flappy_block::config::{GameConfig, Rgb};
use flappy_block::entities::Rect;
use flappy_block::render::Surface;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 0x87, g: 0xce, b: 0xeb };
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// The block of terminal cells the playfield is drawn into.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub left: u16,
    pub top: u16,
    pub cols: u16,
    pub rows: u16,
    field_width: f32,
    field_height: f32,
}

impl Viewport {
    /// Largest aspect-correct viewport that fits between the HUD (row 0) and
    /// the hint line (last row), centred horizontally.
    pub fn fit(term_cols: u16, term_rows: u16, config: &GameConfig) -> Self {
        let avail_rows = term_rows.saturating_sub(2).max(1) as f32;
        let avail_cols = term_cols.max(1) as f32;
        let ratio = config.field_width / config.field_height * CELL_ASPECT;

        let mut rows = avail_rows;
        let mut cols = rows * ratio;
        if cols > avail_cols {
            cols = avail_cols;
            rows = cols / ratio;
        }
        let cols = (cols.floor() as u16).max(1);
        let rows = (rows.floor() as u16).max(1);

        Viewport {
            left: term_cols.saturating_sub(cols) / 2,
            top: 1,
            cols,
            rows,
            field_width: config.field_width,
            field_height: config.field_height,
        }
    }

    /// Is the terminal cell at `(column, row)` inside the playfield?
    pub fn contains(&self, column: u16, row: u16) -> bool {
        (self.left..self.left + self.cols).contains(&column)
            && (self.top..self.top + self.rows).contains(&row)
    }

    /// Cell span `[start, end)` covered by the pixel span `[lo, hi)`, or
    /// `None` when it lies entirely off the field.  Anything visible covers at
    /// least one cell so small details like the eye never vanish.
    fn span(lo: f32, hi: f32, extent: f32, cells: u16) -> Option<(u16, u16)> {
        let lo = lo.max(0.0);
        let hi = hi.min(extent);
        if hi <= lo {
            return None;
        }
        let scale = cells as f32 / extent;
        let start = ((lo * scale).floor() as u16).min(cells.saturating_sub(1));
        let end = ((hi * scale).ceil() as u16).clamp(start + 1, cells);
        Some((start, end))
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

pub struct TerminalSurface<'a, W: Write> {
    out: &'a mut W,
    viewport: Viewport,
}

impl<'a, W: Write> TerminalSurface<'a, W> {
    pub fn new(out: &'a mut W, viewport: Viewport) -> Self {
        TerminalSurface { out, viewport }
    }

    fn paint(&mut self, cols: (u16, u16), rows: (u16, u16), color: Color) -> io::Result<()> {
        let vp = self.viewport;
        let blank = " ".repeat((cols.1 - cols.0) as usize);
        self.out.queue(style::SetBackgroundColor(color))?;
        for row in rows.0..rows.1 {
            self.out.queue(cursor::MoveTo(vp.left + cols.0, vp.top + row))?;
            self.out.queue(Print(&blank))?;
        }
        self.out.queue(style::ResetColor)?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    fn clear(&mut self) -> io::Result<()> {
        let vp = self.viewport;
        self.paint((0, vp.cols), (0, vp.rows), C_SKY)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()> {
        let vp = self.viewport;
        let cols = Viewport::span(rect.x, rect.right(), vp.field_width, vp.cols);
        let rows = Viewport::span(rect.y, rect.bottom(), vp.field_height, vp.rows);
        match (cols, rows) {
            (Some(cols), Some(rows)) => self.paint(cols, rows, to_term_color(color)),
            _ => Ok(()),
        }
    }
}

fn to_term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

pub fn draw_hud<W: Write>(out: &mut W, score: u32) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

pub fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / click : Flap   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

pub fn draw_game_over<W: Write>(out: &mut W, score: u32, width: u16, height: u16) -> io::Result<()> {
    let score_line = format!("Final Score: {}", score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (score_line.as_str(),    Color::Yellow),
        ("R - Restart  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
