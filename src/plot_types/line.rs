use super::marker::paint_markers;
use super::step_line;
use super::{PlotRenderer, RenderContext};
use crate::data_types::LineStyle;
use crate::rendering::Surface;
use glam::DVec2;

/// Marker size used for the marker drawn over a legend line.
const LEGEND_MARKER_SIZE: f64 = 1.5;

/// Line plot type, also drawn as a spline
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinePlot {
    pub style: LineStyle,
}

impl LinePlot {
    pub fn new(style: LineStyle) -> Self {
        Self { style }
    }

    fn render_markers(&self, surface: &mut dyn Surface, coords: &[DVec2], size: f64, pixel_density: DVec2) {
        if let Some(marker) = self.style.marker_style() {
            surface.set_pen(marker.pen().scaled(pixel_density.x));
            surface.set_brush(marker.brush());
            paint_markers(surface, coords, marker.marker, size);
        }
    }

    /// Draws the points as one smooth curve; fewer than three points draw only markers.
    pub fn render_spline(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        let d = ctx.pixel_density;
        surface.set_pen(self.style.pen().scaled(d.x));
        if ctx.scaled.len() >= 3 {
            surface.draw_spline(ctx.scaled);
        }
        self.render_markers(surface, ctx.scaled, self.style.size * d.x, d);
    }
}

impl PlotRenderer for LinePlot {
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        let d = ctx.pixel_density;
        let path = step_line::expand(ctx.scaled, self.style.draw_style);
        if path.len() >= 2 {
            surface.set_pen(self.style.pen().scaled(d.x));
            surface.draw_lines(&path);
        }
        self.render_markers(surface, ctx.scaled, self.style.size * d.x, d);
    }

    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        let h = self.style.width * pixel_density.x;
        let w = 5.0 * h;
        let s = match self.style.marker {
            Some(_) => 5.0 * self.style.size * pixel_density.x,
            None => 0.0,
        };
        DVec2::new(s.max(w), s.max(h))
    }

    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        surface.set_pen(self.style.pen().scaled(pixel_density.x));
        surface.draw_lines(&[start, end]);
        self.render_markers(
            surface,
            &[(start + end) / 2.0],
            LEGEND_MARKER_SIZE * pixel_density.x,
            pixel_density,
        );
    }
}
