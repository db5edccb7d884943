//! Frame state kept between redraws.

use pixface_core::{DisplayMode, FaceTime};
use ratatui::{Frame, layout::Rect, style::Color};

use crate::canvas::Canvas;
use crate::face::{FaceOptions, render_face};
use crate::widget::FaceWidget;

/// Canvas reused across frames, reallocated when the area changes size.
#[derive(Debug)]
pub struct FaceState {
    canvas: Canvas,
    /// Last known area width in cells.
    last_width: u16,
    /// Last known area height in cells.
    last_height: u16,
}

impl Default for FaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceState {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(0, 0, Color::Reset),
            last_width: 0,
            last_height: 0,
        }
    }

    /// Compose the face for `time` and draw it into `area`.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        time: FaceTime,
        mode: DisplayMode,
        options: &FaceOptions,
    ) {
        self.draw(area, time, mode, options);
        frame.render_widget(FaceWidget::new(&self.canvas), area);
    }

    /// Compose the face onto the internal canvas without presenting it.
    pub fn draw(&mut self, area: Rect, time: FaceTime, mode: DisplayMode, options: &FaceOptions) {
        if area.width != self.last_width || area.height != self.last_height {
            log::debug!("face area resized to {}x{}", area.width, area.height);
            self.canvas.resize(
                area.width as usize,
                area.height as usize * 2,
                Color::Reset,
            );
            self.last_width = area.width;
            self.last_height = area.height;
        }
        render_face(&mut self.canvas, time, mode, options);
    }
}
