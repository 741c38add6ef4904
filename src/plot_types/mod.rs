// Plot types module

pub mod bar;
pub mod box_plot;
pub mod line;
pub mod marker;
pub mod step_line;

pub use bar::{BarPlot, HistogramPlot};
pub use box_plot::BoxPlot;
pub use line::LinePlot;
pub use marker::MarkerPlot;

use crate::data_types::{
    bounding_box, union_bounds, Axis, BarStyle, BarWidth, BoxPlotStyle, LineStyle, MarkerStyle,
    ScaleModes,
};
use crate::error::Result;
use crate::hit_test;
use crate::rendering::Surface;
use crate::transform::ViewTransform;
use glam::DVec2;
use tracing::warn;

/// What a renderer needs to paint one series.
pub struct RenderContext<'a> {
    /// Points in user units, after log/abs pre-transforms.
    pub points: &'a [DVec2],
    /// The same points in device units.
    pub scaled: &'a [DVec2],
    /// User to device transform.
    pub transform: &'a ViewTransform,
    pub pixel_density: DVec2,
}

/// Trait for rendering plot types
pub trait PlotRenderer {
    fn render(&self, surface: &mut dyn Surface, ctx: &RenderContext<'_>);

    /// Width and height of the legend symbol in device units.
    fn symbol_extent(&self, pixel_density: DVec2) -> DVec2;

    /// Draws the legend symbol on the row spanning `start..end`.
    fn render_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2);
}

/// Style and geometry specific to each kind of series.
#[derive(Clone, Debug, PartialEq)]
pub enum SeriesKind {
    Markers(MarkerPlot),
    Line(LinePlot),
    Spline(LinePlot),
    Bars(BarPlot),
    Histogram(HistogramPlot),
    BoxPlot(BoxPlot),
}

impl SeriesKind {
    pub fn name(&self) -> &'static str {
        match self {
            SeriesKind::Markers(_) => "markers",
            SeriesKind::Line(_) => "line",
            SeriesKind::Spline(_) => "spline",
            SeriesKind::Bars(_) => "bars",
            SeriesKind::Histogram(_) => "histogram",
            SeriesKind::BoxPlot(_) => "box plot",
        }
    }

    pub fn legend(&self) -> &str {
        match self {
            SeriesKind::Markers(p) => &p.style.legend,
            SeriesKind::Line(p) | SeriesKind::Spline(p) => &p.style.legend,
            SeriesKind::Bars(p) => &p.style.legend,
            SeriesKind::Histogram(p) => &p.style.legend,
            SeriesKind::BoxPlot(p) => &p.style.legend,
        }
    }

    /// Whether log/abs pre-transforms apply; area-like kinds stay linear.
    pub fn follows_scale_modes(&self) -> bool {
        matches!(
            self,
            SeriesKind::Markers(_) | SeriesKind::Line(_) | SeriesKind::Spline(_)
        )
    }

    fn renderer(&self) -> &dyn PlotRenderer {
        match self {
            SeriesKind::Markers(p) => p,
            SeriesKind::Line(p) | SeriesKind::Spline(p) => p,
            SeriesKind::Bars(p) => p,
            SeriesKind::Histogram(p) => p,
            SeriesKind::BoxPlot(p) => p,
        }
    }
}

/// Nearest point of a series to a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPoint {
    pub index: usize,
    /// The point in user units.
    pub point: DVec2,
    /// The point in screen units (device units over pixel density).
    pub scaled: DVec2,
    /// Distance to the query, in screen or user units depending on the search.
    pub distance: f64,
}

/// One plotted dataset: its points plus a typed style.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    points: Vec<DVec2>,
    user_points: Vec<DVec2>,
    scaled: Vec<DVec2>,
    transform: ViewTransform,
    pixel_density: DVec2,
}

fn collect_points<P: Into<DVec2>>(points: impl IntoIterator<Item = P>) -> Vec<DVec2> {
    points.into_iter().map(Into::into).collect()
}

impl Series {
    fn from_parts(kind: SeriesKind, points: Vec<DVec2>) -> Self {
        Self {
            kind,
            user_points: points.clone(),
            points,
            scaled: Vec::new(),
            transform: ViewTransform::default(),
            pixel_density: DVec2::ONE,
        }
    }

    pub fn markers<P: Into<DVec2>>(points: impl IntoIterator<Item = P>, style: MarkerStyle) -> Self {
        Self::from_parts(SeriesKind::Markers(MarkerPlot::new(style)), collect_points(points))
    }

    pub fn line<P: Into<DVec2>>(points: impl IntoIterator<Item = P>, style: LineStyle) -> Self {
        Self::from_parts(SeriesKind::Line(LinePlot::new(style)), collect_points(points))
    }

    pub fn spline<P: Into<DVec2>>(points: impl IntoIterator<Item = P>, style: LineStyle) -> Self {
        Self::from_parts(SeriesKind::Spline(LinePlot::new(style)), collect_points(points))
    }

    /// Bars centered on each point's x, from zero to its y.
    pub fn bars<P: Into<DVec2>>(
        points: impl IntoIterator<Item = P>,
        widths: BarWidth,
        style: BarStyle,
    ) -> Result<Self> {
        let points = collect_points(points);
        let plot = BarPlot::new(style, widths, points.len())?;
        Ok(Self::from_parts(SeriesKind::Bars(plot), points))
    }

    /// One bar per bin `edges[i]..edges[i + 1]` with height `heights[i]`.
    pub fn histogram(heights: &[f64], edges: &[f64], style: BarStyle) -> Result<Self> {
        let plot = HistogramPlot::new(style, edges.to_vec(), heights.len())?;
        let points = plot.centers(heights);
        Ok(Self::from_parts(SeriesKind::Histogram(plot), points))
    }

    /// Box plot of `sample` at `xpos`; NaN and infinite samples are ignored.
    pub fn box_plot(xpos: f64, sample: &[f64], style: BoxPlotStyle) -> Result<Self> {
        let plot = BoxPlot::new(xpos, sample, style)?;
        let points = plot.points();
        Ok(Self::from_parts(SeriesKind::BoxPlot(plot), points))
    }

    pub fn kind(&self) -> &SeriesKind {
        &self.kind
    }

    /// Mutable access to the style; box-plot statistics stay fixed.
    pub fn kind_mut(&mut self) -> &mut SeriesKind {
        &mut self.kind
    }

    pub fn legend(&self) -> &str {
        self.kind.legend()
    }

    /// Points as constructed.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Points after the log/abs pre-transforms of the last draw.
    pub fn user_points(&self) -> &[DVec2] {
        &self.user_points
    }

    /// Device positions from the last [`Self::scale_and_shift`].
    pub fn scaled(&self) -> &[DVec2] {
        &self.scaled
    }

    pub fn len(&self) -> usize {
        self.user_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_points.is_empty()
    }

    /// Re-derives user points from the constructed points: `abs` first, then `log10`.
    ///
    /// Rows with a non-positive value on a log axis are dropped.
    pub fn apply_scale_modes(&mut self, modes: &ScaleModes) {
        if !self.kind.follows_scale_modes() || modes.is_identity() {
            self.user_points.clone_from(&self.points);
            return;
        }
        let map = |v: f64, axis: Axis| -> Option<f64> {
            let i = axis.index();
            let v = if modes.abs[i] { v.abs() } else { v };
            if !modes.log[i] {
                Some(v)
            } else if v > 0.0 {
                Some(v.log10())
            } else {
                None
            }
        };
        self.user_points = self
            .points
            .iter()
            .filter_map(|p| Some(DVec2::new(map(p.x, Axis::X)?, map(p.y, Axis::Y)?)))
            .collect();
        let dropped = self.points.len() - self.user_points.len();
        if dropped > 0 {
            warn!(
                series = self.kind.name(),
                dropped, "dropping non-positive points on a log axis"
            );
        }
    }

    /// Componentwise min and max of the user points, `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        match &self.kind {
            SeriesKind::BoxPlot(p) => Some(p.bounding_box()),
            _ => bounding_box(&self.user_points),
        }
    }

    /// Recomputes device positions for the given user to device transform.
    pub fn scale_and_shift(&mut self, transform: &ViewTransform, pixel_density: DVec2) {
        self.transform = *transform;
        self.pixel_density = pixel_density;
        self.scaled = transform.apply(&self.user_points);
    }

    /// Nearest point to `query`, given in user units.
    ///
    /// With `screen_space` the distance is measured in screen units under the last
    /// transform, otherwise in user units. Ties resolve to the lowest index.
    pub fn closest_point(&self, query: DVec2, screen_space: bool) -> Option<ClosestPoint> {
        let screen = self.transform.with_pixel_density(self.pixel_density);
        let (index, distance) = if screen_space {
            let candidates = screen.apply(&self.user_points);
            hit_test::nearest(&candidates, screen.user_to_screen(query))?
        } else {
            hit_test::nearest(&self.user_points, query)?
        };
        let point = self.user_points[index];
        Some(ClosestPoint {
            index,
            point,
            scaled: screen.user_to_screen(point),
            distance,
        })
    }

    pub fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        self.kind.renderer().symbol_extent(pixel_density)
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let ctx = RenderContext {
            points: &self.user_points,
            scaled: &self.scaled,
            transform: &self.transform,
            pixel_density: self.pixel_density,
        };
        match &self.kind {
            SeriesKind::Spline(p) => p.render_spline(surface, &ctx),
            kind => kind.renderer().render(surface, &ctx),
        }
    }

    pub fn draw_legend(&self, surface: &mut dyn Surface, start: DVec2, end: DVec2, pixel_density: DVec2) {
        self.kind
            .renderer()
            .render_legend(surface, start, end, pixel_density);
    }
}

/// A set of series drawn together, with title and axis labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlotGraphics {
    pub series: Vec<Series>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl PlotGraphics {
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            series,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Union of the series bounding boxes, `None` if no series has points.
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        self.series
            .iter()
            .fold(None, |acc, s| union_bounds(acc, s.bounding_box()))
    }

    pub fn apply_scale_modes(&mut self, modes: &ScaleModes) {
        for s in &mut self.series {
            s.apply_scale_modes(modes);
        }
    }

    pub fn scale_and_shift(&mut self, transform: &ViewTransform, pixel_density: DVec2) {
        for s in &mut self.series {
            s.scale_and_shift(transform, pixel_density);
        }
    }

    /// Largest legend symbol over all series.
    pub fn symbol_extent(&self, pixel_density: DVec2) -> DVec2 {
        self.series
            .iter()
            .map(|s| s.symbol_extent(pixel_density))
            .fold(DVec2::ZERO, DVec2::max)
    }

    pub fn legend_names(&self) -> Vec<&str> {
        self.series.iter().map(Series::legend).collect()
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for s in &self.series {
            s.draw(surface);
        }
    }
}

impl<'a> IntoIterator for &'a PlotGraphics {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_mode_drops_non_positive_rows() {
        let mut s = Series::markers(
            [(1.0, 10.0), (2.0, -1.0), (3.0, 100.0)],
            MarkerStyle::default(),
        );
        let modes = ScaleModes {
            log: [false, true],
            abs: [false, false],
        };
        s.apply_scale_modes(&modes);
        assert_eq!(s.user_points(), &[DVec2::new(1.0, 1.0), DVec2::new(3.0, 2.0)]);
        assert_eq!(s.points().len(), 3);

        s.apply_scale_modes(&ScaleModes::default());
        assert_eq!(s.user_points().len(), 3);
    }

    #[test]
    fn test_abs_applies_before_log() {
        let mut s = Series::line([(1.0, -100.0)], LineStyle::default());
        s.apply_scale_modes(&ScaleModes {
            log: [false, true],
            abs: [false, true],
        });
        assert_eq!(s.user_points(), &[DVec2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_bars_ignore_scale_modes() {
        let mut s = Series::bars([(1.0, -5.0)], BarWidth::default(), BarStyle::default()).unwrap();
        s.apply_scale_modes(&ScaleModes {
            log: [true, true],
            abs: [false, false],
        });
        assert_eq!(s.user_points(), &[DVec2::new(1.0, -5.0)]);
    }

    #[test]
    fn test_graphics_bounding_box_skips_empty_series() {
        let g = PlotGraphics::new(vec![
            Series::markers(Vec::<DVec2>::new(), MarkerStyle::default()),
            Series::line([(0.0, 1.0), (4.0, -2.0)], LineStyle::default()),
        ]);
        assert_eq!(
            g.bounding_box(),
            Some((DVec2::new(0.0, -2.0), DVec2::new(4.0, 1.0)))
        );
        assert_eq!(PlotGraphics::default().bounding_box(), None);
    }

    #[test]
    fn test_scale_and_shift_is_idempotent() {
        let mut s = Series::markers([(1.0, 2.0)], MarkerStyle::default());
        let t = ViewTransform::new(DVec2::new(2.0, -2.0), DVec2::new(10.0, 10.0));
        s.scale_and_shift(&t, DVec2::ONE);
        let first = s.scaled().to_vec();
        s.scale_and_shift(&t, DVec2::ONE);
        assert_eq!(s.scaled(), first.as_slice());
        assert_eq!(first, vec![DVec2::new(12.0, 6.0)]);
    }

    #[test]
    fn test_symbol_extent_is_componentwise_max() {
        let g = PlotGraphics::new(vec![
            Series::line([(0.0, 0.0)], LineStyle { width: 2.0, ..LineStyle::default() }),
            Series::markers([(0.0, 0.0)], MarkerStyle { size: 1.0, ..MarkerStyle::default() }),
        ]);
        // line: 10 x 2, marker: 5 x 5
        assert_eq!(g.symbol_extent(DVec2::ONE), DVec2::new(10.0, 5.0));
    }
}
