use crate::error::PlotError;
use crate::theme::{Brush, Color, DashStyle, FillStyle, Pen};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    #[default]
    Circle,
    Dot,
    Square,
    Triangle,
    TriangleDown,
    Cross,
    Plus,
}

impl FromStr for MarkerKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(MarkerKind::Circle),
            "dot" => Ok(MarkerKind::Dot),
            "square" => Ok(MarkerKind::Square),
            "triangle" => Ok(MarkerKind::Triangle),
            "triangle_down" => Ok(MarkerKind::TriangleDown),
            "cross" => Ok(MarkerKind::Cross),
            "plus" => Ok(MarkerKind::Plus),
            other => Err(PlotError::InvalidMarker(other.to_string())),
        }
    }
}

/// Shape of the connector between two consecutive points of a line series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawStyle {
    /// Straight segment.
    #[default]
    Line,
    /// Vertical to the next Y, then horizontal.
    StepsPre,
    /// Horizontal to the next X, then vertical.
    StepsPost,
    /// Horizontal to the X midpoint, vertical, horizontal.
    StepsMidX,
    /// Vertical to the Y midpoint, horizontal, vertical.
    StepsMidY,
}

impl FromStr for DrawStyle {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(DrawStyle::Line),
            "steps-pre" => Ok(DrawStyle::StepsPre),
            "steps-post" => Ok(DrawStyle::StepsPost),
            "steps-mid-x" => Ok(DrawStyle::StepsMidX),
            "steps-mid-y" => Ok(DrawStyle::StepsMidY),
            other => Err(PlotError::InvalidDrawStyle(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerStyle {
    pub color: Color,
    pub width: f64,
    pub size: f64,
    /// Falls back to `color` when unset.
    pub fill_color: Option<Color>,
    pub fill: FillStyle,
    pub marker: MarkerKind,
    pub legend: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            size: 2.0,
            fill_color: None,
            fill: FillStyle::Solid,
            marker: MarkerKind::Circle,
            legend: String::new(),
        }
    }
}

impl MarkerStyle {
    pub fn pen(&self) -> Pen {
        Pen::solid(self.color, self.width)
    }

    pub fn brush(&self) -> Brush {
        Brush::new(self.fill_color.unwrap_or(self.color), self.fill)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub dash: DashStyle,
    pub draw_style: DrawStyle,
    /// Marker drawn on every point, none by default.
    pub marker: Option<MarkerKind>,
    pub size: f64,
    pub fill_color: Option<Color>,
    pub fill: FillStyle,
    pub legend: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: DashStyle::Solid,
            draw_style: DrawStyle::Line,
            marker: None,
            size: 2.0,
            fill_color: None,
            fill: FillStyle::Solid,
            legend: String::new(),
        }
    }
}

impl LineStyle {
    pub fn pen(&self) -> Pen {
        Pen::new(self.color, self.width, self.dash)
    }

    /// Marker style used for the optional per-point markers.
    pub fn marker_style(&self) -> Option<MarkerStyle> {
        self.marker.map(|marker| MarkerStyle {
            color: self.color,
            width: self.width,
            size: self.size,
            fill_color: self.fill_color,
            fill: self.fill,
            marker,
            legend: self.legend.clone(),
        })
    }
}

/// Bar widths in data units, either shared or one per bar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarWidth {
    Uniform(f64),
    PerBar(Vec<f64>),
}

impl Default for BarWidth {
    fn default() -> Self {
        BarWidth::Uniform(1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarStyle {
    pub edge_color: Color,
    pub edge_width: f64,
    pub edge_dash: DashStyle,
    pub fill_color: Color,
    pub fill: FillStyle,
    pub legend: String,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            edge_color: Color::BLACK,
            edge_width: 1.0,
            edge_dash: DashStyle::Solid,
            fill_color: Color::RED,
            fill: FillStyle::Solid,
            legend: String::new(),
        }
    }
}

impl BarStyle {
    pub fn pen(&self) -> Pen {
        Pen::new(self.edge_color, self.edge_width, self.edge_dash)
    }

    pub fn brush(&self) -> Brush {
        Brush::new(self.fill_color, self.fill)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxPlotStyle {
    pub color: Color,
    pub width: f64,
    pub dash: DashStyle,
    pub legend: String,
    /// Width of the IQR box in data units.
    pub box_width: f64,
    pub box_fill: Color,
    pub outlier_color: Color,
    /// Seed for the outlier jitter, so repeated sessions place outliers identically.
    pub jitter_seed: u64,
}

impl Default for BoxPlotStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash: DashStyle::Solid,
            legend: String::new(),
            box_width: 0.5,
            box_fill: Color::GREEN,
            outlier_color: Color::BLUE,
            jitter_seed: 0,
        }
    }
}
