use super::{PlotRenderer, RenderContext};
use crate::data_types::{BarStyle, BarWidth, Rect};
use crate::error::{PlotError, Result};
use crate::rendering::Surface;
use crate::transform::ViewTransform;
use glam::DVec2;

fn edge_extent(style: &BarStyle, pixel_density: DVec2) -> DVec2 {
    let h = style.edge_width * pixel_density.x;
    DVec2::new(5.0 * h, h)
}

fn paint_rects(
    surface: &mut dyn Surface,
    style: &BarStyle,
    corners: impl Iterator<Item = (DVec2, DVec2)>,
    transform: &ViewTransform,
    pixel_density: DVec2,
) {
    surface.set_pen(style.pen().scaled(pixel_density.x));
    surface.set_brush(style.brush());
    for (a, b) in corners {
        surface.draw_rect(Rect::from_corners(
            transform.user_to_screen(a),
            transform.user_to_screen(b),
        ));
    }
}

/// Bar plot type
#[derive(Clone, Debug, PartialEq)]
pub struct BarPlot {
    pub style: BarStyle,
    widths: BarWidth,
}

impl BarPlot {
    /// Fails when per-bar widths do not match `point_count`.
    pub fn new(style: BarStyle, widths: BarWidth, point_count: usize) -> Result<Self> {
        if let BarWidth::PerBar(w) = &widths {
            if w.len() != point_count {
                return Err(PlotError::BarWidthMismatch {
                    widths: w.len(),
                    points: point_count,
                });
            }
        }
        Ok(Self { style, widths })
    }

    pub fn widths(&self) -> &BarWidth {
        &self.widths
    }

    pub fn width(&self, index: usize) -> f64 {
        match &self.widths {
            BarWidth::Uniform(w) => *w,
            BarWidth::PerBar(w) => w.get(index).copied().unwrap_or(0.0),
        }
    }

    /// Data-space corners `[x - w/2, y]` and `[x + w/2, 0]` of every bar.
    pub fn rects<'a>(&'a self, points: &'a [DVec2]) -> impl Iterator<Item = (DVec2, DVec2)> + 'a {
        points.iter().enumerate().map(|(i, p)| {
            let half = self.width(i) / 2.0;
            (DVec2::new(p.x - half, p.y), DVec2::new(p.x + half, 0.0))
        })
    }
}

impl PlotRenderer for BarPlot {
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        paint_rects(
            surface,
            &self.style,
            self.rects(ctx.points),
            ctx.transform,
            ctx.pixel_density,
        );
    }

    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        edge_extent(&self.style, pixel_density)
    }

    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        surface.set_pen(self.style.pen().scaled(pixel_density.x));
        surface.draw_lines(&[start, end]);
    }
}

/// Histogram plot type: one bar per bin, spanning the bin edges
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramPlot {
    pub style: BarStyle,
    edges: Vec<f64>,
}

impl HistogramPlot {
    /// Fails unless there is exactly one more edge than heights.
    pub fn new(style: BarStyle, edges: Vec<f64>, bin_count: usize) -> Result<Self> {
        if edges.len() != bin_count + 1 {
            return Err(PlotError::HistogramBinMismatch {
                edges: edges.len(),
                heights: bin_count,
            });
        }
        Ok(Self { style, edges })
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// `(center, height)` of every bin.
    pub fn centers(&self, heights: &[f64]) -> Vec<DVec2> {
        self.edges
            .windows(2)
            .zip(heights)
            .map(|(bin, h)| DVec2::new(bin[0] + (bin[1] - bin[0]) / 2.0, *h))
            .collect()
    }

    /// Data-space corners `[low, height]` and `[high, 0]` of every bin.
    pub fn rects<'a>(&'a self, points: &'a [DVec2]) -> impl Iterator<Item = (DVec2, DVec2)> + 'a {
        self.edges
            .windows(2)
            .zip(points)
            .map(|(bin, p)| (DVec2::new(bin[0], p.y), DVec2::new(bin[1], 0.0)))
    }
}

impl PlotRenderer for HistogramPlot {
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        paint_rects(
            surface,
            &self.style,
            self.rects(ctx.points),
            ctx.transform,
            ctx.pixel_density,
        );
    }

    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        edge_extent(&self.style, pixel_density)
    }

    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        surface.set_pen(self.style.pen().scaled(pixel_density.x));
        surface.draw_lines(&[start, end]);
    }
}
