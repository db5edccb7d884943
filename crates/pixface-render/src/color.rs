//! Face palette and colour helpers.

use pixface_core::{ColorTheme, DisplayMode};
use pixface_sprites::Ink;
use ratatui::style::Color;

const BACKGROUND: Color = Color::Rgb(0, 0, 0);
const WHITE_INK: Color = Color::Rgb(224, 224, 224);
const LOW_BIT_INK: Color = Color::Rgb(255, 255, 255);
const ACCENT_RED: Color = Color::Rgb(224, 48, 48);
const SKIN_HUE: f32 = 30.0;

/// Ambient brightness relative to interactive.
const AMBIENT_DIM: f32 = 0.5;

/// Resolved colours for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub body: Color,
    pub skin: Color,
    pub accent: Color,
    /// Digital readout and tick marks.
    pub text: Color,
}

impl Palette {
    pub fn new(theme: ColorTheme, mode: DisplayMode, low_bit_ambient: bool) -> Self {
        let ink = match theme.hue() {
            Some(hue) => hsl_to_rgb(hue, 0.7, 0.6),
            None => WHITE_INK,
        };
        let interactive = Self {
            background: BACKGROUND,
            body: ink,
            skin: hsl_to_rgb(SKIN_HUE, 0.6, 0.7),
            accent: ACCENT_RED,
            text: ink,
        };

        match (mode, low_bit_ambient) {
            (DisplayMode::Interactive, _) => interactive,
            (DisplayMode::Ambient, true) => Self {
                background: BACKGROUND,
                body: LOW_BIT_INK,
                skin: LOW_BIT_INK,
                accent: LOW_BIT_INK,
                text: LOW_BIT_INK,
            },
            (DisplayMode::Ambient, false) => Self {
                background: BACKGROUND,
                body: dim(interactive.body, AMBIENT_DIM),
                skin: dim(interactive.skin, AMBIENT_DIM),
                accent: dim(interactive.accent, AMBIENT_DIM),
                text: dim(interactive.text, AMBIENT_DIM),
            },
        }
    }

    /// Colour for a sprite ink slot.
    pub fn ink(&self, ink: Ink) -> Color {
        match ink {
            Ink::Body => self.body,
            Ink::Skin => self.skin,
            Ink::Accent => self.accent,
        }
    }
}

/// Scale an RGB colour's brightness. Non-RGB colours pass through.
pub fn dim(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h.rem_euclid(360.0) / 360.0;

    let channel = |t: f32| (hue_to_rgb(p, q, t) * 255.0).round() as u8;
    Color::Rgb(
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
