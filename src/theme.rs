use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_GREY: Color = Color::rgb(180, 180, 180);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Stroke pattern, written with the usual matplotlib-like shorthands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashStyle {
    #[default]
    #[serde(rename = "-")]
    Solid,
    #[serde(rename = "--")]
    LongDash,
    #[serde(rename = ":")]
    Dot,
    #[serde(rename = "__")]
    ShortDash,
    #[serde(rename = "-.")]
    DotDash,
}

impl FromStr for DashStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(DashStyle::Solid),
            "--" => Ok(DashStyle::LongDash),
            ":" => Ok(DashStyle::Dot),
            "__" => Ok(DashStyle::ShortDash),
            "-." => Ok(DashStyle::DotDash),
            other => Err(PlotError::InvalidConfig(format!("unknown line style '{other}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    Solid,
    Transparent,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    #[serde(default)]
    pub dash: DashStyle,
}

impl Pen {
    pub const fn new(color: Color, width: f64, dash: DashStyle) -> Self {
        Self { color, width, dash }
    }

    pub const fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width, DashStyle::Solid)
    }

    /// Same pen with its width multiplied, e.g. by the pixel density.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            ..self
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Pen::solid(Color::BLACK, 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Color,
    #[serde(default)]
    pub fill: FillStyle,
}

impl Brush {
    pub const fn new(color: Color, fill: FillStyle) -> Self {
        Self { color, fill }
    }

    pub const fn transparent() -> Self {
        Self::new(Color::WHITE, FillStyle::Transparent)
    }
}

/// Pens used for the frame decorations around the plot area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotTheme {
    pub foreground: Color,
    pub background: Color,
    pub grid: Pen,
    pub center_line: Pen,
    pub axes: Pen,
    pub ticks: Pen,
    pub diagonal: Pen,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            grid: Pen::new(Color::LIGHT_GREY, 1.0, DashStyle::Dot),
            center_line: Pen::new(Color::RED, 1.0, DashStyle::ShortDash),
            axes: Pen::solid(Color::BLACK, 1.0),
            ticks: Pen::solid(Color::BLACK, 1.0),
            diagonal: Pen::new(Color::BLUE, 1.0, DashStyle::DotDash),
        }
    }
}
