use crate::error::Error;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub type Rgb = (u8, u8, u8);

/// Colours for each part of the calculator's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub value: Rgb,      // Display value
    pub non_finite: Rgb, // Infinity and NaN
    pub pending: Rgb,    // "12 +" ahead of the display
    pub memory: Rgb,     // Memory indicator
    pub history: Rgb,    // History entry text
    pub timestamp: Rgb,  // History entry time
    pub message: Rgb,    // Command replies
    pub error: Rgb,
    pub carat: Rgb,      // Points at a bad token
}

const LIGHT: Palette = Palette {
    value: (0x1E, 0x29, 0x3B),      // Slate
    non_finite: (0xB9, 0x1C, 0x1C), // Deep red
    pending: (0x64, 0x74, 0x8B),    // Muted slate
    memory: (0x1D, 0x4E, 0xD8),     // Blue
    history: (0x33, 0x41, 0x55),    // Dark slate
    timestamp: (0x94, 0xA3, 0xB8),  // Light slate
    message: (0x15, 0x80, 0x3D),    // Green
    error: (0xDC, 0x26, 0x26),      // Red
    carat: (0xEA, 0x58, 0x0C),      // Orange
};

const DARK: Palette = Palette {
    value: (0xF1, 0xF5, 0xF9),      // Near white
    non_finite: (0xC8, 0x64, 0xC8), // Bright purple
    pending: (0x94, 0xA3, 0xB8),    // Light slate
    memory: (0xDC, 0xF0, 0x32),     // Bright yellow
    history: (0xB4, 0xB4, 0xB4),    // Light gray
    timestamp: (0x50, 0x8C, 0x78),  // Muted teal
    message: (0x78, 0xB4, 0x78),    // Soft green
    error: (0xDC, 0x64, 0x5A),      // Soft red
    carat: (0xFF, 0x14, 0x00),      // Bright red
};

impl Palette {
    pub fn paint(&self, text: &str, colour: Rgb) -> ColoredString {
        text.truecolor(colour.0, colour.1, colour.2)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(Error::UnknownTheme(s.to_owned())),
        }
    }
}
