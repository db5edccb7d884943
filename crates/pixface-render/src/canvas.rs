//! Pixel canvas the face is composed on.

use pixface_sprites::{GLYPH_SPACING, Ink, Sprite, glyph};
use ratatui::style::Color;

use crate::geometry::Placement;

/// Fixed-size grid of RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reallocate for new dimensions, clearing every pixel.
    pub fn resize(&mut self, width: usize, height: usize, background: Color) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, background);
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Set one pixel. Writes outside the canvas are dropped.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Bresenham line between the pixels containing `from` and `to`, inclusive.
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color) {
        let (mut x0, mut y0) = (from.0.floor() as i32, from.1.floor() as i32);
        let (x1, y1) = (to.0.floor() as i32, to.1.floor() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draw `sprite` transformed by `placement`, colouring ink slots with `ink`.
    ///
    /// Each covered screen pixel samples the sprite at its centre, so
    /// rotated sprites keep hard pixel-art edges.
    pub fn blit<F>(&mut self, sprite: &Sprite, placement: &Placement, ink: F)
    where
        F: Fn(Ink) -> Color,
    {
        let (w, h) = (sprite.width() as f32, sprite.height() as f32);
        if w == 0.0 || h == 0.0 || placement.scale <= 0.0 {
            return;
        }

        let corners = [
            placement.to_screen(0.0, 0.0),
            placement.to_screen(w, 0.0),
            placement.to_screen(0.0, h),
            placement.to_screen(w, h),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f32::INFINITY, f32::min);
        let max_x = corners.iter().map(|c| c.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = corners.iter().map(|c| c.1).fold(f32::INFINITY, f32::min);
        let max_y = corners.iter().map(|c| c.1).fold(f32::NEG_INFINITY, f32::max);

        let x_start = (min_x.floor() as i32).max(0);
        let y_start = (min_y.floor() as i32).max(0);
        let x_end = (max_x.ceil() as i32).min(self.width as i32);
        let y_end = (max_y.ceil() as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let (u, v) = placement.to_local(x as f32 + 0.5, y as f32 + 0.5);
                if u < 0.0 || v < 0.0 || u >= w || v >= h {
                    continue;
                }
                if let Some(slot) = sprite.pixel(u as usize, v as usize) {
                    self.set(x, y, ink(slot));
                }
            }
        }
    }

    /// Draw `text` with the readout glyphs, top-left at `origin`.
    ///
    /// Characters without a glyph are skipped.
    pub fn text(&mut self, text: &str, origin: (i32, i32), scale: u32, color: Color) {
        let scale = scale.max(1);
        let mut pen_x = origin.0 as f32;
        for g in text.chars().filter_map(glyph) {
            let placement = Placement::at((pen_x, origin.1 as f32), scale as f32);
            self.blit(g, &placement, |_| color);
            pen_x += ((g.width() + GLYPH_SPACING) as u32 * scale) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixface_sprites::{DIGITS, RUNNER_MIDDLE};

    const BG: Color = Color::Rgb(0, 0, 0);
    const INK: Color = Color::Rgb(255, 255, 255);

    fn skin_marked(ink: Ink) -> Color {
        match ink {
            Ink::Skin => Color::Rgb(1, 2, 3),
            _ => INK,
        }
    }

    #[test]
    fn test_set_and_get_clip() {
        let mut c = Canvas::new(4, 3, BG);
        c.set(3, 2, INK);
        c.set(-1, 0, INK);
        c.set(4, 0, INK);
        assert_eq!(c.get(3, 2), Some(INK));
        assert_eq!(c.get(4, 0), None);
        assert_eq!(c.pixels.iter().filter(|p| **p == INK).count(), 1);
    }

    #[test]
    fn test_diagonal_line() {
        let mut c = Canvas::new(5, 5, BG);
        c.line((0.2, 0.7), (3.9, 3.1), INK);
        for i in 0..4 {
            assert_eq!(c.get(i, i), Some(INK));
        }
        assert_eq!(c.get(4, 4), Some(BG));
        assert_eq!(c.pixels.iter().filter(|p| **p == INK).count(), 4);
    }

    #[test]
    fn test_degenerate_line_sets_one_pixel() {
        let mut c = Canvas::new(3, 3, BG);
        c.line((1.2, 1.8), (1.9, 1.1), INK);
        assert_eq!(c.get(1, 1), Some(INK));
        assert_eq!(c.pixels.iter().filter(|p| **p == INK).count(), 1);
    }

    #[test]
    fn test_blit_unrotated() {
        let mut c = Canvas::new(10, 12, BG);
        c.blit(&RUNNER_MIDDLE, &Placement::at((2.0, 2.0), 1.0), skin_marked);
        assert_eq!(c.get(4, 2), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(c.get(2, 2), Some(BG));
        assert_eq!(c.get(3, 3), Some(INK));
    }

    #[test]
    fn test_blit_half_turn_about_anchor() {
        let mut c = Canvas::new(20, 20, BG);
        let placement = Placement {
            anchor: (10.0, 10.0),
            rotation_deg: 180.0,
            scale: 1.0,
        };
        c.blit(&RUNNER_MIDDLE, &placement, skin_marked);
        // Head pixel (2, 0) lands left of and above the anchor.
        assert_eq!(c.get(7, 9), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(c.get(12, 10), Some(BG));
    }

    #[test]
    fn test_blit_scaled() {
        let mut c = Canvas::new(12, 16, BG);
        c.blit(&RUNNER_MIDDLE, &Placement::at((0.0, 0.0), 2.0), skin_marked);
        for (x, y) in [(4, 0), (5, 0), (4, 1), (5, 1)] {
            assert_eq!(c.get(x, y), Some(Color::Rgb(1, 2, 3)));
        }
        assert_eq!(c.get(6, 0), Some(BG));
    }

    #[test]
    fn test_blit_clips_at_edges() {
        let mut c = Canvas::new(3, 3, BG);
        c.blit(&DIGITS[8], &Placement::at((-1.0, -1.0), 1.0), |_| INK);
        // Glyph 8 row 1 is "#.#": column 1 is the gap.
        assert_eq!(c.get(0, 0), Some(BG));
        assert_eq!(c.get(1, 0), Some(INK));
    }

    #[test]
    fn test_text_layout() {
        let mut c = Canvas::new(8, 5, BG);
        c.text("1:", (0, 0), 1, INK);
        // "1" top row ".#." then a spacing column then the colon.
        assert_eq!(c.get(1, 0), Some(INK));
        assert_eq!(c.get(4, 1), Some(INK));
        assert_eq!(c.get(3, 1), Some(BG));
        assert_eq!(c.get(4, 0), Some(BG));
    }

    #[test]
    fn test_resize_clears() {
        let mut c = Canvas::new(2, 2, INK);
        c.resize(3, 1, BG);
        assert_eq!((c.width(), c.height()), (3, 1));
        assert!(c.pixels.iter().all(|p| *p == BG));
    }
}
