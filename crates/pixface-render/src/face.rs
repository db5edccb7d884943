//! Composition of one watch-face frame.
//!
//! Offsets below are in units of the 320x320 reference surface and are
//! scaled to the actual dial by [`FaceGeometry`].

use pixface_core::{ColorTheme, DisplayMode, FaceTime, TimeFormat};
use pixface_sprites::{
    GLYPH_HEIGHT, HOUR_FRAMES, MINUTE_FRAMES, RUN, SECOND_FRAMES, STAND, Sprite, text_width,
};
use ratatui::style::Color;

use crate::canvas::Canvas;
use crate::color::Palette;
use crate::geometry::{FaceGeometry, Placement, sixtieths, twelfths};

/// Second runner distance in from the rim.
const SECOND_INSET: f32 = 30.0;
/// Hour and minute walker distance in from the rim.
const WALKER_INSET: f32 = 70.0;
/// Tick lengths.
const MAJOR_TICK: f32 = 9.0;
const MINOR_TICK: f32 = 2.0;
const TICK_COUNT: u32 = 60;

/// Settings that change how a frame looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceOptions {
    pub theme: ColorTheme,
    pub time_format: TimeFormat,
    /// Seconds in the digital readout while interactive.
    pub show_seconds: bool,
    pub low_bit_ambient: bool,
}

/// Sprites point outward from their anchor: turned half a turn back from `angle`.
fn facing(angle: f32) -> f32 {
    angle.to_degrees() - 180.0
}

fn placement(geom: &FaceGeometry, anchor_angle: f32, radius: f32, facing_angle: f32) -> Placement {
    Placement {
        anchor: geom.polar(anchor_angle, radius),
        rotation_deg: facing(facing_angle),
        scale: geom.sprite_scale as f32,
    }
}

/// Second runner: two ticks ahead of the second, cycling four stride frames.
pub fn second_runner(geom: &FaceGeometry, time: FaceTime) -> (Placement, &'static Sprite) {
    let s = time.second as f32;
    let place = placement(geom, sixtieths(s + 2.0), geom.inset(SECOND_INSET), sixtieths(s + 1.0));
    let frame = &SECOND_FRAMES[time.second as usize % SECOND_FRAMES.len()];
    (place, frame)
}

/// Minute walker: stands beside the minute, and runs ahead during the last second.
pub fn minute_walker(geom: &FaceGeometry, time: FaceTime) -> (Placement, &'static Sprite) {
    let m = time.minute as f32;
    let (angle, frame) = if time.second > 58 {
        (sixtieths(m + 3.0) + sixtieths(0.5), RUN)
    } else {
        (sixtieths(m + 2.0), STAND)
    };
    let place = placement(geom, angle, geom.inset(WALKER_INSET), sixtieths(m));
    (place, &MINUTE_FRAMES[frame])
}

/// Hour walker: stands just past the hour, and hops forward in the
/// closing seconds of the hour.
pub fn hour_walker(geom: &FaceGeometry, time: FaceTime) -> (Placement, &'static Sprite) {
    let h = time.hour as f32;
    let rolling_over = time.minute == 59 && time.second > 55;
    let (angle, frame) = if rolling_over {
        let hop = sixtieths((time.second % 5) as f32);
        (twelfths(h + 0.3) + hop, time.second as usize % HOUR_FRAMES.len())
    } else {
        (twelfths(h + 0.3), STAND)
    };
    let place = placement(geom, angle, geom.inset(WALKER_INSET), twelfths(h));
    (place, &HOUR_FRAMES[frame])
}

/// Draw a full frame for `time` onto `canvas`.
pub fn render_face(canvas: &mut Canvas, time: FaceTime, mode: DisplayMode, options: &FaceOptions) {
    let palette = Palette::new(options.theme, mode, options.low_bit_ambient);
    let geom = FaceGeometry::new(canvas.width(), canvas.height());
    let ink = |slot| palette.ink(slot);

    canvas.fill(palette.background);

    let (place, sprite) = second_runner(&geom, time);
    canvas.blit(sprite, &place, ink);

    let (place, sprite) = minute_walker(&geom, time);
    canvas.blit(sprite, &place, ink);

    let (place, sprite) = hour_walker(&geom, time);
    canvas.blit(sprite, &place, ink);

    if !mode.is_ambient() {
        draw_ticks(canvas, &geom, palette.text);
    }

    let with_seconds = options.show_seconds && !mode.is_ambient();
    let text = time.digital(options.time_format, with_seconds);
    draw_digital_time(canvas, &geom, &text, palette.text);
}

fn draw_ticks(canvas: &mut Canvas, geom: &FaceGeometry, color: Color) {
    for i in 0..TICK_COUNT {
        let length = if i % 5 == 0 { MAJOR_TICK } else { MINOR_TICK };
        let angle = sixtieths(i as f32);
        // Pull the outer end half a pixel in so the rim tick stays on canvas.
        let outer = (geom.radius - 0.5).max(0.0);
        let inner = geom.inset(length).min(outer);
        canvas.line(geom.polar(angle, inner), geom.polar(angle, outer), color);
    }
}

fn draw_digital_time(canvas: &mut Canvas, geom: &FaceGeometry, text: &str, color: Color) {
    let scale = geom.sprite_scale;
    let width = (text_width(text) as u32 * scale) as f32;
    let height = (GLYPH_HEIGHT as u32 * scale) as f32;
    let origin = (
        (geom.center.0 - width / 2.0).round() as i32,
        (geom.center.1 - height / 2.0).round() as i32,
    );
    canvas.text(text, origin, scale, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixface_sprites::{GIRL_RUN, GIRL_STAND, MAN_RUN, MAN_STAND, RUNNER_LEFT, RUNNER_RIGHT};
    use std::f32::consts::TAU;

    fn reference() -> FaceGeometry {
        FaceGeometry::new(320, 320)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn expected_anchor(angle: f32, radius: f32) -> (f32, f32) {
        (160.0 + angle.sin() * radius, 160.0 - angle.cos() * radius)
    }

    #[test]
    fn test_second_runner_placement() {
        let (place, sprite) = second_runner(&reference(), FaceTime::new(10, 20, 0));
        let (x, y) = expected_anchor(2.0 * TAU / 60.0, 130.0);
        assert!(close(place.anchor.0, x) && close(place.anchor.1, y));
        assert!(close(place.rotation_deg, 6.0 - 180.0));
        assert_eq!(place.scale, 4.0);
        assert_eq!(*sprite, RUNNER_RIGHT);
    }

    #[test]
    fn test_second_runner_frame_cycle() {
        let g = reference();
        let frame = |s| *second_runner(&g, FaceTime::new(0, 0, s)).1;
        assert_eq!(frame(2), RUNNER_LEFT);
        assert_eq!(frame(1), frame(3));
        assert_eq!(frame(4), RUNNER_RIGHT);
        assert_eq!(frame(59), frame(3));
    }

    #[test]
    fn test_minute_walker_stands_then_runs() {
        let g = reference();
        let (place, sprite) = minute_walker(&g, FaceTime::new(1, 10, 58));
        let (x, y) = expected_anchor(12.0 * TAU / 60.0, 90.0);
        assert!(close(place.anchor.0, x) && close(place.anchor.1, y));
        assert!(close(place.rotation_deg, 60.0 - 180.0));
        assert_eq!(*sprite, MAN_STAND);

        let (place, sprite) = minute_walker(&g, FaceTime::new(1, 10, 59));
        let (x, y) = expected_anchor(13.0 * TAU / 60.0 + TAU / 120.0, 90.0);
        assert!(close(place.anchor.0, x) && close(place.anchor.1, y));
        assert!(close(place.rotation_deg, 60.0 - 180.0));
        assert_eq!(*sprite, MAN_RUN);
    }

    #[test]
    fn test_hour_walker_outside_rollover() {
        let g = reference();
        let (place, sprite) = hour_walker(&g, FaceTime::new(15, 58, 59));
        let (x, y) = expected_anchor(15.3 * TAU / 12.0, 90.0);
        assert!(close(place.anchor.0, x) && close(place.anchor.1, y));
        assert!(close(place.rotation_deg, 450.0 - 180.0));
        assert_eq!(*sprite, GIRL_STAND);

        let (_, sprite) = hour_walker(&g, FaceTime::new(15, 59, 55));
        assert_eq!(*sprite, GIRL_STAND);
    }

    #[test]
    fn test_hour_walker_hops_before_the_hour() {
        let g = reference();
        let (place, sprite) = hour_walker(&g, FaceTime::new(4, 59, 57));
        let (x, y) = expected_anchor(4.3 * TAU / 12.0 + 2.0 * TAU / 60.0, 90.0);
        assert!(close(place.anchor.0, x) && close(place.anchor.1, y));
        assert_eq!(*sprite, GIRL_STAND);

        let (_, sprite) = hour_walker(&g, FaceTime::new(4, 59, 58));
        assert_eq!(*sprite, GIRL_RUN);
        let (_, sprite) = hour_walker(&g, FaceTime::new(4, 59, 56));
        assert_eq!(*sprite, GIRL_RUN);
    }

    fn rendered(mode: DisplayMode, options: &FaceOptions) -> (Canvas, Palette) {
        let mut canvas = Canvas::new(320, 320, Color::Reset);
        render_face(&mut canvas, FaceTime::new(3, 15, 0), mode, options);
        (canvas, Palette::new(options.theme, mode, options.low_bit_ambient))
    }

    #[test]
    fn test_ticks_only_when_interactive() {
        let options = FaceOptions::default();
        let (canvas, palette) = rendered(DisplayMode::Interactive, &options);
        assert_eq!(canvas.get(160, 0), Some(palette.text));
        assert_eq!(canvas.get(160, 8), Some(palette.text));
        assert_eq!(canvas.get(160, 12), Some(palette.background));

        let (canvas, palette) = rendered(DisplayMode::Ambient, &options);
        assert_eq!(canvas.get(160, 0), Some(palette.background));
    }

    #[test]
    fn test_digital_time_is_centred() {
        let options = FaceOptions::default();
        let (canvas, palette) = rendered(DisplayMode::Interactive, &options);
        // "3:15" is 13 glyph columns, 52x20 pixels at scale 4, top-left (134, 150).
        // The colon's upper dot covers (150..154, 154..158).
        assert_eq!(canvas.get(151, 155), Some(palette.text));
        // Top-left pixel of "3" row 1 is a gap.
        assert_eq!(canvas.get(135, 155), Some(palette.background));
        assert_eq!(canvas.get(134, 150), Some(palette.text));
        assert_eq!(canvas.get(133, 150), Some(palette.background));
    }

    #[test]
    fn test_seconds_hidden_in_ambient() {
        let options = FaceOptions {
            show_seconds: true,
            ..Default::default()
        };
        // "3:15:00" is 23 columns, 92 pixels wide: starts at x = 114.
        let (canvas, palette) = rendered(DisplayMode::Interactive, &options);
        assert_eq!(canvas.get(114, 150), Some(palette.text));

        let (canvas, palette) = rendered(DisplayMode::Ambient, &options);
        assert_eq!(canvas.get(114, 150), Some(palette.background));
        assert_eq!(canvas.get(134, 150), Some(palette.text));
    }

    #[test]
    fn test_low_bit_ambient_frame_is_monochrome() {
        let options = FaceOptions {
            theme: ColorTheme::Magenta,
            low_bit_ambient: true,
            ..Default::default()
        };
        let (canvas, palette) = rendered(DisplayMode::Ambient, &options);
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                let px = canvas.get(x, y);
                assert!(px == Some(palette.background) || px == Some(palette.text));
            }
        }
    }

    #[test]
    fn test_second_runner_drawn_in_every_mode() {
        let g = reference();
        let time = FaceTime::new(3, 15, 0);
        let (place, _) = second_runner(&g, time);
        // Centre of the runner's head pixel (2, 0).
        let (x, y) = place.to_screen(2.5, 0.5);
        let (x, y) = (x as usize, y as usize);

        let options = FaceOptions::default();
        let (canvas, palette) = rendered(DisplayMode::Interactive, &options);
        assert_eq!(canvas.get(x, y), Some(palette.skin));

        let (canvas, palette) = rendered(DisplayMode::Ambient, &options);
        assert_eq!(canvas.get(x, y), Some(palette.skin));
        assert_ne!(palette.skin, palette.background);
    }

    #[test]
    fn test_tiny_canvas_does_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (3, 2), (80, 48)] {
            let mut canvas = Canvas::new(w, h, Color::Reset);
            render_face(
                &mut canvas,
                FaceTime::new(23, 59, 59),
                DisplayMode::Interactive,
                &FaceOptions::default(),
            );
        }
    }
}
