use super::{PlotRenderer, RenderContext};
use crate::data_types::{MarkerKind, MarkerStyle, Rect};
use crate::rendering::Surface;
use glam::DVec2;

/// Half the side of a marker, per unit of marker size.
const HALF_EXTENT: f64 = 2.5;

/// Scatter plot type
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerPlot {
    pub style: MarkerStyle,
}

impl MarkerPlot {
    pub fn new(style: MarkerStyle) -> Self {
        Self { style }
    }

    fn apply_style(&self, surface: &mut dyn Surface, pixel_density: DVec2) {
        surface.set_pen(self.style.pen().scaled(pixel_density.x));
        surface.set_brush(self.style.brush());
    }
}

impl PlotRenderer for MarkerPlot {
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        if ctx.scaled.is_empty() {
            return;
        }
        self.apply_style(surface, ctx.pixel_density);
        paint_markers(
            surface,
            ctx.scaled,
            self.style.marker,
            self.style.size * ctx.pixel_density.x,
        );
    }

    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        DVec2::splat(2.0 * HALF_EXTENT * self.style.size * pixel_density.x)
    }

    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        self.apply_style(surface, pixel_density);
        paint_markers(
            surface,
            &[(start + end) / 2.0],
            self.style.marker,
            self.style.size * pixel_density.x,
        );
    }
}

/// Paints one marker of `kind` centered on each of `coords`, `size` already in device units.
pub fn paint_markers(surface: &mut dyn Surface, coords: &[DVec2], kind: MarkerKind, size: f64) {
    let f = HALF_EXTENT * size;
    let side = DVec2::splat(2.0 * f);
    for &c in coords {
        match kind {
            MarkerKind::Circle => surface.draw_ellipse(Rect::new(c - f, side)),
            MarkerKind::Square => surface.draw_rect(Rect::new(c - f, side)),
            MarkerKind::Dot => surface.draw_point(c),
            MarkerKind::Triangle => surface.draw_polygon(&[
                c + DVec2::new(-f, 1.44 * size),
                c + DVec2::new(f, 1.44 * size),
                c + DVec2::new(0.0, -2.88 * size),
            ]),
            MarkerKind::TriangleDown => surface.draw_polygon(&[
                c + DVec2::new(-f, -1.44 * size),
                c + DVec2::new(f, -1.44 * size),
                c + DVec2::new(0.0, 2.88 * size),
            ]),
            MarkerKind::Cross => {
                surface.draw_line(c + DVec2::new(-f, -f), c + DVec2::new(f, f));
                surface.draw_line(c + DVec2::new(-f, f), c + DVec2::new(f, -f));
            }
            MarkerKind::Plus => {
                surface.draw_line(c + DVec2::new(-f, 0.0), c + DVec2::new(f, 0.0));
                surface.draw_line(c + DVec2::new(0.0, -f), c + DVec2::new(0.0, f));
            }
        }
    }
}
