#![allow(dead_code)]

use std::io;

use flappy_block::config::Rgb;
use flappy_block::entities::Rect;
use flappy_block::render::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Fill(Rect, Rgb),
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn fills(&self) -> Vec<(Rect, Rgb)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Fill(r, color) => Some((*r, *color)),
                DrawCall::Clear => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()> {
        self.calls.push(DrawCall::Fill(rect, color));
        Ok(())
    }
}
