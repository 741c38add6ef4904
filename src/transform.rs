//! Transform helper for coordinate projection

use crate::data_types::{Axis, AxisRange};
use crate::error::{PlotError, Result};
use crate::layout::{Margins, PlotBox};
use glam::DVec2;

/// Affine map `target = data * scale + shift`, applied per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: DVec2,
    pub shift: DVec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            scale: DVec2::ONE,
            shift: DVec2::ZERO,
        }
    }
}

impl ViewTransform {
    pub fn new(scale: DVec2, shift: DVec2) -> Self {
        Self { scale, shift }
    }

    /// Maps the data rectangle `data_min..data_max` onto the plot box minus margins.
    ///
    /// With `flip_y`, larger y values map to smaller device y (upwards). The result is in
    /// device units divided by `pixel_density`; pass `DVec2::ONE` for the device transform.
    pub fn compute(
        data_min: DVec2,
        data_max: DVec2,
        plot_box: &PlotBox,
        margins: &Margins,
        flip_y: bool,
        pixel_density: DVec2,
    ) -> Result<Self> {
        let span = data_max - data_min;
        if span.x == 0.0 {
            return Err(PlotError::DegenerateRange(Axis::X.name()));
        }
        if span.y == 0.0 {
            return Err(PlotError::DegenerateRange(Axis::Y.name()));
        }
        let flip = DVec2::new(1.0, if flip_y { -1.0 } else { 1.0 });
        let scale = (plot_box.size - margins.total()) / span * flip;
        let shift = -data_min * scale + plot_box.origin + margins.offset() * flip;
        Ok(Self { scale, shift }.with_pixel_density(pixel_density))
    }

    /// Convenience for [`Self::compute`] from two axis ranges, y flipped.
    pub fn from_ranges(
        x: AxisRange,
        y: AxisRange,
        plot_box: &PlotBox,
        margins: &Margins,
        pixel_density: DVec2,
    ) -> Result<Self> {
        Self::compute(
            DVec2::new(x.min, y.min),
            DVec2::new(x.max, y.max),
            plot_box,
            margins,
            true,
            pixel_density,
        )
    }

    /// Same transform expressed in units `pixel_density` times larger.
    pub fn with_pixel_density(self, pixel_density: DVec2) -> Self {
        Self {
            scale: self.scale / pixel_density,
            shift: self.shift / pixel_density,
        }
    }

    pub fn user_to_screen(&self, p: DVec2) -> DVec2 {
        p * self.scale + self.shift
    }

    pub fn screen_to_user(&self, p: DVec2) -> DVec2 {
        (p - self.shift) / self.scale
    }

    pub fn x_to_screen(&self, x: f64) -> f64 {
        x * self.scale.x + self.shift.x
    }

    pub fn y_to_screen(&self, y: f64) -> f64 {
        y * self.scale.y + self.shift.y
    }

    /// Projects every point.
    pub fn apply(&self, points: &[DVec2]) -> Vec<DVec2> {
        points.iter().map(|p| self.user_to_screen(*p)).collect()
    }
}
