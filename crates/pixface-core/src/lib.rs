//! Core types shared by the pixface crates.

use chrono::Timelike;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Wall-clock time as shown on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceTime {
    /// Hour of the day (0-23).
    pub hour: u32,
    /// Minute (0-59).
    pub minute: u32,
    /// Second (0-59).
    pub second: u32,
}

impl FaceTime {
    /// Build a time, wrapping each field into its range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }

    /// Read the time-of-day fields from any chrono time value.
    ///
    /// Leap seconds are folded into second 59.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second().min(59),
        }
    }

    /// Format the digital readout, `H:MM` or `H:MM:SS`.
    pub fn digital(&self, format: TimeFormat, with_seconds: bool) -> String {
        let hour = format.display_hour(self.hour);
        if with_seconds {
            format!("{}:{:02}:{:02}", hour, self.minute, self.second)
        } else {
            format!("{}:{:02}", hour, self.minute)
        }
    }
}

/// Whether the face is fully animated or in low-power ambient mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Interactive,
    Ambient,
}

impl DisplayMode {
    pub fn from_ambient(ambient: bool) -> Self {
        if ambient {
            Self::Ambient
        } else {
            Self::Interactive
        }
    }

    pub fn is_ambient(self) -> bool {
        self == Self::Ambient
    }
}

/// Hour format for the digital readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

impl TimeFormat {
    /// Switch to the other format.
    pub fn toggle(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }

    /// Map a 0-23 hour to the hour shown in this format.
    pub fn display_hour(self, hour: u32) -> u32 {
        match self {
            Self::TwentyFourHour => hour % 24,
            Self::TwelveHour => match hour % 12 {
                0 => 12,
                h => h,
            },
        }
    }
}

/// Colour theme for the face ink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    White,
    Green,
    Amber,
    Cyan,
    Magenta,
}

impl ColorTheme {
    const ALL: [ColorTheme; 5] = [
        ColorTheme::White,
        ColorTheme::Green,
        ColorTheme::Amber,
        ColorTheme::Cyan,
        ColorTheme::Magenta,
    ];

    /// Terminal colour used for chrome such as the help line.
    pub fn color(self) -> Color {
        match self {
            Self::White => Color::White,
            Self::Green => Color::Green,
            Self::Amber => Color::Yellow,
            Self::Cyan => Color::Cyan,
            Self::Magenta => Color::Magenta,
        }
    }

    /// HSL hue in degrees, `None` for the achromatic theme.
    pub fn hue(self) -> Option<f32> {
        match self {
            Self::White => None,
            Self::Green => Some(120.0),
            Self::Amber => Some(40.0),
            Self::Cyan => Some(185.0),
            Self::Magenta => Some(300.0),
        }
    }

    /// Next theme in the cycle.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}
