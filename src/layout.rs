use glam::DVec2;

/// Share of the viewport given to the plot box, the rest is a uniform border.
const PLOT_BOX_FRACTION: f64 = 0.97;

/// Drawable area in device units.
///
/// `origin` is the bottom-left corner, so the box extends up (negative y) and right.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlotBox {
    pub origin: DVec2,
    pub size: DVec2,
}

impl PlotBox {
    /// Plot box for a viewport given in logical pixels.
    pub fn from_viewport(viewport: DVec2, pixel_density: DVec2) -> Self {
        let device = viewport * pixel_density;
        let size = device * PLOT_BOX_FRACTION;
        Self {
            origin: DVec2::new(0.5 * (device.x - size.x), device.y - 0.5 * (device.y - size.y)),
            size,
        }
    }

    /// Top-right corner of the area left once `margins` are taken out.
    pub fn inner_top_right(&self, margins: &Margins) -> DVec2 {
        self.origin + (self.size - DVec2::new(margins.right, margins.top)) * DVec2::new(1.0, -1.0)
    }
}

/// Measured sizes of the text and legend around the plot area, in device units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameExtents {
    pub x_ticks: DVec2,
    pub y_ticks: DVec2,
    pub x_label: DVec2,
    pub y_label: DVec2,
    pub title: DVec2,
    pub legend_box: DVec2,
}

/// Room reserved on each side of the plot area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Margins {
    pub fn from_extents(extents: &FrameExtents, pixel_density: DVec2) -> Self {
        let e = extents;
        Self {
            right: e.x_ticks.x.max(e.legend_box.x) + 5.0 * pixel_density.x,
            // the y label is drawn rotated, so its height eats horizontal room
            left: e.y_ticks.x + e.y_label.y + 3.0 * pixel_density.x,
            bottom: e.x_ticks.y.max(e.y_ticks.y / 2.0) + e.x_label.y + 2.0 * pixel_density.y,
            top: e.y_ticks.y / 2.0 + e.title.y,
        }
    }

    /// Amount by which the plot area shrinks.
    pub fn total(&self) -> DVec2 {
        DVec2::new(self.left + self.right, self.bottom + self.top)
    }

    /// Amount by which the plot area shifts from the plot box origin.
    pub fn offset(&self) -> DVec2 {
        DVec2::new(self.left, self.bottom)
    }
}
