use super::marker::paint_markers;
use super::{PlotRenderer, RenderContext};
use crate::data_types::{BoxPlotStyle, MarkerKind, Rect};
use crate::error::Result;
use crate::rendering::Surface;
use crate::statistics::{find_outliers, jitter_offsets, summarize, BoxPlotSummary};
use crate::theme::{Brush, FillStyle, Pen};
use glam::DVec2;

/// Whisker caps span this fraction of the box width on each side.
const CAP_FRACTION: f64 = 0.2;
/// Marker size of the outlier squares.
const OUTLIER_SIZE: f64 = 0.5;

/// Box-and-whisker plot of one sample at a fixed x position.
///
/// Statistics, outliers and their jitter are computed once, so repeated draws
/// place everything identically.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxPlot {
    pub style: BoxPlotStyle,
    xpos: f64,
    summary: BoxPlotSummary,
    outliers: Vec<f64>,
    jitter: Vec<f64>,
}

impl BoxPlot {
    pub fn new(xpos: f64, sample: &[f64], style: BoxPlotStyle) -> Result<Self> {
        let summary = summarize(sample)?;
        let outliers = find_outliers(sample, &summary);
        let jitter = jitter_offsets(outliers.len(), style.jitter_seed);
        Ok(Self {
            style,
            xpos,
            summary,
            outliers,
            jitter,
        })
    }

    pub fn xpos(&self) -> f64 {
        self.xpos
    }

    pub fn summary(&self) -> &BoxPlotSummary {
        &self.summary
    }

    pub fn outliers(&self) -> &[f64] {
        &self.outliers
    }

    /// Horizontal offset of each outlier from `xpos`.
    pub fn jitter(&self) -> &[f64] {
        &self.jitter
    }

    /// The seven summary values followed by the outliers, all at `xpos`.
    pub fn points(&self) -> Vec<DVec2> {
        self.summary
            .values()
            .iter()
            .chain(&self.outliers)
            .map(|v| DVec2::new(self.xpos, *v))
            .collect()
    }

    /// Data-space positions the outliers are drawn at.
    pub fn outlier_positions(&self) -> Vec<DVec2> {
        self.outliers
            .iter()
            .zip(&self.jitter)
            .map(|(v, j)| DVec2::new(self.xpos + j, *v))
            .collect()
    }

    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        let half = self.style.box_width / 2.0;
        (
            DVec2::new(self.xpos - half, self.summary.min * 0.95),
            DVec2::new(self.xpos + half, self.summary.max * 1.05),
        )
    }

    fn pen(&self, width_factor: f64, pixel_density: DVec2) -> Pen {
        Pen::new(self.style.color, self.style.width * width_factor, self.style.dash)
            .scaled(pixel_density.x)
    }
}

impl PlotRenderer for BoxPlot {
    /// Whisker line first, then the box over it, then the median so it stays visible on a filled box.
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>) {
        let d = ctx.pixel_density;
        let at = |x: f64, y: f64| ctx.transform.user_to_screen(DVec2::new(x, y));
        let s = &self.summary;
        let half = self.style.box_width / 2.0;
        let cap = self.style.box_width * CAP_FRACTION;

        surface.set_pen(self.pen(2.0, d));
        surface.draw_lines(&[at(self.xpos, s.low_whisker), at(self.xpos, s.high_whisker)]);

        surface.set_pen(self.pen(3.0, d));
        surface.set_brush(Brush::new(self.style.box_fill, FillStyle::Solid));
        surface.draw_rect(Rect::from_corners(
            at(self.xpos - half, s.q75),
            at(self.xpos + half, s.q25),
        ));

        surface.set_pen(self.pen(4.0, d));
        surface.draw_lines(&[at(self.xpos - half, s.median), at(self.xpos + half, s.median)]);

        surface.set_pen(self.pen(2.0, d));
        for y in [s.high_whisker, s.low_whisker] {
            surface.draw_lines(&[at(self.xpos - cap, y), at(self.xpos + cap, y)]);
        }

        if !self.outliers.is_empty() {
            let coords: Vec<DVec2> = self
                .outlier_positions()
                .into_iter()
                .map(|p| ctx.transform.user_to_screen(p))
                .collect();
            surface.set_pen(Pen::solid(self.style.outlier_color, self.style.width * d.x));
            surface.set_brush(Brush::new(self.style.outlier_color, FillStyle::Solid));
            paint_markers(surface, &coords, MarkerKind::Square, OUTLIER_SIZE * d.x);
        }
    }

    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        let h = self.style.width * pixel_density.x;
        DVec2::new(5.0 * h, h)
    }

    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        surface.set_pen(self.pen(1.0, pixel_density));
        surface.set_brush(Brush::new(self.style.box_fill, FillStyle::Solid));
        paint_markers(
            surface,
            &[(start + end) / 2.0],
            MarkerKind::Square,
            pixel_density.x,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_and_bounding_box() {
        let bp = BoxPlot::new(2.0, &[1.0, 2.0, 3.0, 4.0, 5.0], BoxPlotStyle::default()).unwrap();
        assert_eq!(bp.points().len(), 7);
        assert!(bp.points().iter().all(|p| p.x == 2.0));
        let (lo, hi) = bp.bounding_box();
        assert_eq!(lo, DVec2::new(1.75, 0.95));
        assert_eq!(hi, DVec2::new(2.25, 5.25));
    }

    #[test]
    fn test_outliers_are_jittered_around_xpos() {
        let mut sample: Vec<f64> = (1..=9).map(f64::from).collect();
        sample.push(100.0);
        let bp = BoxPlot::new(1.0, &sample, BoxPlotStyle::default()).unwrap();
        assert_eq!(bp.outliers(), &[100.0]);
        let pos = bp.outlier_positions();
        assert_eq!(pos.len(), 1);
        assert!((pos[0].x - 1.0).abs() <= 0.025);
        assert_eq!(pos[0].y, 100.0);
    }
}
