//! Terminal presentation of a face canvas.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use crate::canvas::Canvas;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Shows a [`Canvas`] with two vertically stacked pixels per cell, centred in
/// the render area.
#[derive(Debug, Clone, Copy)]
pub struct FaceWidget<'a> {
    canvas: &'a Canvas,
}

impl<'a> FaceWidget<'a> {
    pub fn new(canvas: &'a Canvas) -> Self {
        Self { canvas }
    }
}

impl Widget for FaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = (self.canvas.width() as u16).min(area.width);
        let rows = (self.canvas.height().div_ceil(2) as u16).min(area.height);
        let left = area.x + (area.width - cols) / 2;
        let top = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let x = col as usize;
                let y = row as usize * 2;
                let Some(upper) = self.canvas.get(x, y) else {
                    continue;
                };
                let lower = self.canvas.get(x, y + 1).unwrap_or(upper);
                if let Some(cell) = buf.cell_mut(Position::new(left + col, top + row)) {
                    cell.set_symbol(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}
