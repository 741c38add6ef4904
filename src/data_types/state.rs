use super::axis::{Axis, AxisSpec};
use crate::error::PlotError;
use crate::theme::PlotTheme;
use eyre::WrapErr;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Per-side toggles for frame elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySides {
    pub bottom: bool,
    pub left: bool,
    pub top: bool,
    pub right: bool,
}

impl DisplaySides {
    pub const ALL: DisplaySides = DisplaySides::new(true, true, true, true);
    pub const NONE: DisplaySides = DisplaySides::new(false, false, false, false);

    pub const fn new(bottom: bool, left: bool, top: bool, right: bool) -> Self {
        Self {
            bottom,
            left,
            top,
            right,
        }
    }

    pub fn any(&self) -> bool {
        self.bottom || self.left || self.top || self.right
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterLines {
    #[default]
    Off,
    Horizontal,
    Vertical,
    Both,
}

impl CenterLines {
    pub fn horizontal(self) -> bool {
        matches!(self, CenterLines::Horizontal | CenterLines::Both)
    }

    pub fn vertical(self) -> bool {
        matches!(self, CenterLines::Vertical | CenterLines::Both)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Diagonals {
    #[default]
    Off,
    BottomLeftTopRight,
    BottomRightTopLeft,
    Both,
}

impl Diagonals {
    pub fn rising(self) -> bool {
        matches!(self, Diagonals::BottomLeftTopRight | Diagonals::Both)
    }

    pub fn falling(self) -> bool {
        matches!(self, Diagonals::BottomRightTopLeft | Diagonals::Both)
    }
}

/// Pre-transforms applied to point coordinates before scaling: `abs` first, then `log10`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleModes {
    pub log: [bool; 2],
    pub abs: [bool; 2],
}

impl ScaleModes {
    pub fn is_log(&self, axis: Axis) -> bool {
        self.log[axis.index()]
    }

    pub fn is_identity(&self) -> bool {
        self == &ScaleModes::default()
    }
}

/// Ratios applied by the zoom gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InteractionConfig {
    pub drag_enabled: bool,
    pub zoom_enabled: bool,
    /// Ratio applied for a forward wheel notch (< 1 zooms in).
    pub wheel_zoom_in: f64,
    /// Ratio applied for a backward wheel notch.
    pub wheel_zoom_out: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_enabled: true,
            zoom_enabled: true,
            wheel_zoom_in: 0.9,
            wheel_zoom_out: 1.1,
        }
    }
}

/// Font sizes in points, before pixel-density scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontSizes {
    pub axis: f64,
    pub title: f64,
    pub legend: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            axis: 10.0,
            title: 15.0,
            legend: 8.0,
        }
    }
}

/// Everything that controls how the canvas lays out and decorates a plot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub x_spec: AxisSpec,
    pub y_spec: AxisSpec,
    pub scale_modes: ScaleModes,
    pub grid: [bool; 2],
    pub ticks: DisplaySides,
    pub axes: DisplaySides,
    pub axes_values: DisplaySides,
    pub center_lines: CenterLines,
    pub diagonals: Diagonals,
    pub legend_enabled: bool,
    pub title_enabled: bool,
    pub axes_labels_enabled: bool,
    pub scientific_notation: bool,
    /// Tick length per axis in pixel-density units; negative draws outside the frame.
    pub tick_length: [f64; 2],
    /// Device units per logical pixel.
    pub pixel_density: DVec2,
    pub fonts: FontSizes,
    pub interaction: InteractionConfig,
    pub theme: PlotTheme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_spec: AxisSpec::Auto,
            y_spec: AxisSpec::Auto,
            scale_modes: ScaleModes::default(),
            grid: [true, true],
            ticks: DisplaySides::NONE,
            axes: DisplaySides::ALL,
            axes_values: DisplaySides::new(true, true, false, false),
            center_lines: CenterLines::Off,
            diagonals: Diagonals::Off,
            legend_enabled: false,
            title_enabled: true,
            axes_labels_enabled: true,
            scientific_notation: false,
            tick_length: [-2.0, -2.0],
            pixel_density: DVec2::ONE,
            fonts: FontSizes::default(),
            interaction: InteractionConfig::default(),
            theme: PlotTheme::default(),
        }
    }
}

impl PlotConfig {
    /// Parses a configuration document, rejecting unknown keys and invalid values.
    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        let config: PlotConfig =
            serde_json::from_str(json).wrap_err("failed to parse plot configuration")?;
        config.validate().wrap_err("plot configuration rejected")?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PlotError> {
        self.x_spec.validate()?;
        self.y_spec.validate()?;
        if !(self.pixel_density.is_finite() && self.pixel_density.cmpgt(DVec2::ZERO).all()) {
            return Err(PlotError::InvalidConfig(format!(
                "pixel density must be positive, got {}",
                self.pixel_density
            )));
        }
        let wheel = &self.interaction;
        if !(wheel.wheel_zoom_in > 0.0 && wheel.wheel_zoom_out > 0.0) {
            return Err(PlotError::InvalidConfig("wheel zoom ratios must be positive".into()));
        }
        Ok(())
    }

    pub fn spec(&self, axis: Axis) -> &AxisSpec {
        match axis {
            Axis::X => &self.x_spec,
            Axis::Y => &self.y_spec,
        }
    }

    /// Tick lengths in device units, `3 * length * density` as the frame expects.
    pub fn tick_length_device(&self) -> DVec2 {
        DVec2::new(self.tick_length[0], self.tick_length[1]) * self.pixel_density * 3.0
    }
}
