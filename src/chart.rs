//! Plot canvas
//!
//! `PlotCanvas` is the host-facing entry point. It resolves axis ranges, lays out the
//! frame, paints decorations and series onto a [`Surface`], and keeps the last drawn
//! plot so it can be redrawn, zoomed, scrolled and hit-tested.
//!
//! Ranges stored by the canvas are in plot units: log10 of the real value on log axes,
//! the real value otherwise.

use crate::data_types::{Axis, AxisRange, PlotConfig, Rect, Tick};
use crate::error::{PlotError, Result};
use crate::hit_test::{self, HitResult};
use crate::layout::{FrameExtents, Margins, PlotBox};
use crate::legend::{LegendLayout, LegendMetrics};
use crate::plot_types::PlotGraphics;
use crate::rendering::{paint_axes_labels, paint_frame, paint_title, Frame, Surface};
use crate::scales::{generate_log_ticks, generate_ticks, resolve_axis};
use crate::transform::ViewTransform;
use crate::view_controller::{CursorHint, Gesture, ViewController, ViewTarget};
use glam::DVec2;
use tracing::{debug, warn};

/// Label measured for the y ticks of a log axis, wide enough for any decade label.
const LOG_TICK_SAMPLE: &str = "-2e-2";

/// The plot drawn most recently, with the ranges it was drawn at.
#[derive(Clone, Debug, PartialEq)]
pub struct LastDraw {
    pub graphics: PlotGraphics,
    pub x: AxisRange,
    pub y: AxisRange,
}

#[derive(Clone, Debug)]
pub struct PlotCanvas {
    config: PlotConfig,
    /// Size of the drawing area in logical pixels.
    viewport: DVec2,
    last_draw: Option<LastDraw>,
    device_transform: ViewTransform,
    screen_transform: ViewTransform,
    controller: ViewController,
}

impl PlotCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            config: PlotConfig::default(),
            viewport: DVec2::new(width, height),
            last_draw: None,
            device_transform: ViewTransform::default(),
            screen_transform: ViewTransform::default(),
            controller: ViewController::default(),
        }
    }

    pub fn with_config(mut self, config: PlotConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Replaces the configuration; takes effect on the next draw.
    pub fn set_config(&mut self, config: PlotConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = DVec2::new(width, height);
    }

    pub fn last_draw(&self) -> Option<&LastDraw> {
        self.last_draw.as_ref()
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    /// User to device transform of the last draw.
    pub fn device_transform(&self) -> &ViewTransform {
        &self.device_transform
    }

    /// User to screen transform of the last draw.
    pub fn screen_transform(&self) -> &ViewTransform {
        &self.screen_transform
    }

    /// Draws `graphics`, with each missing range derived from the data and the axis spec.
    ///
    /// Ranges are given in real units. A zero-width range, or no range and no data,
    /// leaves the canvas untouched. A non-finite range, or one reaching zero or below
    /// on a log axis, is rejected.
    pub fn draw(
        &mut self,
        graphics: PlotGraphics,
        x: Option<AxisRange>,
        y: Option<AxisRange>,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        if x.is_some_and(|r| r.is_degenerate()) || y.is_some_and(|r| r.is_degenerate()) {
            debug!(?x, ?y, "zero-width range, nothing drawn");
            return Ok(());
        }
        let x = x.map(|r| self.to_plot_units(Axis::X, r)).transpose()?;
        let y = y.map(|r| self.to_plot_units(Axis::Y, r)).transpose()?;
        self.render(graphics, x, y, surface)
    }

    /// Maps a requested range in real units to plot units; log axes need positive bounds.
    fn to_plot_units(&self, axis: Axis, range: AxisRange) -> Result<AxisRange> {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(PlotError::InvalidAxisSpec(format!(
                "non-finite {} range {}..{}",
                axis.name(),
                range.min,
                range.max
            )));
        }
        if !self.config.scale_modes.is_log(axis) {
            return Ok(range);
        }
        if range.min <= 0.0 {
            return Err(PlotError::InvalidAxisSpec(format!(
                "log {} range must be positive, got {}..{}",
                axis.name(),
                range.min,
                range.max
            )));
        }
        Ok(range.map(f64::log10))
    }

    /// Draws the last plot again at its ranges.
    pub fn redraw(&mut self, surface: &mut dyn Surface) -> Result<()> {
        match self.last_draw.clone() {
            Some(last) => self.render(last.graphics, Some(last.x), Some(last.y), surface),
            None => Ok(()),
        }
    }

    /// Forgets the last plot.
    pub fn clear(&mut self) {
        self.last_draw = None;
        self.controller.cancel();
    }

    /// Draws the last plot again with ranges re-derived from its data.
    pub fn reset_view(&mut self, surface: &mut dyn Surface) -> Result<()> {
        match self.last_draw.clone() {
            Some(last) => {
                debug!("resetting view");
                self.render(last.graphics, None, None, surface)
            }
            None => Ok(()),
        }
    }

    /// Zooms about `center` (plot units); a ratio below one zooms in.
    pub fn zoom(&mut self, center: DVec2, ratio: DVec2, surface: &mut dyn Surface) -> Result<()> {
        let Some(last) = self.last_draw.clone() else {
            return Ok(());
        };
        let (x, y) = ViewController::zoom(last.x, last.y, center, ratio);
        self.render(last.graphics, Some(x), Some(y), surface)
    }

    /// Shifts one axis by `units` plot units.
    pub fn scroll(&mut self, axis: Axis, units: f64, surface: &mut dyn Surface) -> Result<()> {
        let Some(last) = self.last_draw.clone() else {
            return Ok(());
        };
        let (x, y) = match axis {
            Axis::X => (last.x.shifted(units), last.y),
            Axis::Y => (last.x, last.y.shifted(units)),
        };
        self.render(last.graphics, Some(x), Some(y), surface)
    }

    /// Feeds a pointer gesture, redrawing as needed. Returns the cursor to show when it changes.
    pub fn handle_gesture(&mut self, gesture: Gesture, surface: &mut dyn Surface) -> Option<CursorHint> {
        let interaction = self.config.interaction.clone();
        let mut controller = std::mem::take(&mut self.controller);
        let hint = controller.handle(
            gesture,
            &interaction,
            &mut CanvasTarget {
                canvas: self,
                surface,
            },
        );
        self.controller = controller;
        hint
    }

    /// Globally closest point of the last plot to `query` (plot units).
    pub fn closest_point(&self, query: DVec2, screen_space: bool) -> Option<HitResult> {
        let last = self.last_draw.as_ref()?;
        hit_test::closest(&last.graphics, query, screen_space)
    }

    /// Closest point per non-empty series of the last plot.
    pub fn closest_points(&self, query: DVec2, screen_space: bool) -> Vec<HitResult> {
        self.last_draw
            .as_ref()
            .map(|last| hit_test::closest_points(&last.graphics, query, screen_space))
            .unwrap_or_default()
    }

    /// Displayed range of `axis` in real units.
    pub fn current_axis_range(&self, axis: Axis) -> Option<AxisRange> {
        let last = self.last_draw.as_ref()?;
        let range = match axis {
            Axis::X => last.x,
            Axis::Y => last.y,
        };
        Some(self.to_real(axis, range))
    }

    /// Range of `axis` that shows all of the last plot's data, in real units.
    pub fn max_axis_range(&self, axis: Axis) -> Result<Option<AxisRange>> {
        let Some((lo, hi)) = self.last_draw.as_ref().and_then(|l| l.graphics.bounding_box()) else {
            return Ok(None);
        };
        let i = axis.index();
        let range = resolve_axis(self.config.spec(axis), lo[i], hi[i])?;
        Ok(Some(self.to_real(axis, range)))
    }

    pub fn user_to_screen(&self, p: DVec2) -> DVec2 {
        self.screen_transform.user_to_screen(p)
    }

    pub fn screen_to_user(&self, p: DVec2) -> DVec2 {
        self.screen_transform.screen_to_user(p)
    }

    fn to_real(&self, axis: Axis, range: AxisRange) -> AxisRange {
        if self.config.scale_modes.is_log(axis) {
            range.map(|v| 10f64.powf(v))
        } else {
            range
        }
    }

    fn ticks(&self, axis: Axis, range: AxisRange) -> Option<Vec<Tick>> {
        let spec = self.config.spec(axis);
        if !spec.shows_ticks() {
            None
        } else if self.config.scale_modes.is_log(axis) {
            Some(generate_log_ticks(range.min, range.max))
        } else {
            Some(generate_ticks(
                range.min,
                range.max,
                spec.tick_count(),
                self.config.scientific_notation,
            ))
        }
    }

    /// Draws with ranges already in plot units.
    fn render(
        &mut self,
        mut graphics: PlotGraphics,
        x: Option<AxisRange>,
        y: Option<AxisRange>,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        let config = &self.config;
        graphics.apply_scale_modes(&config.scale_modes);

        let (x, y) = match (x, y) {
            (Some(x), Some(y)) => (x.sanitized(), y.sanitized()),
            _ => {
                let Some((lo, hi)) = graphics.bounding_box() else {
                    debug!("no data and no ranges, nothing drawn");
                    return Ok(());
                };
                let x = match x {
                    Some(r) => r.sanitized(),
                    None => resolve_axis(&config.x_spec, lo.x, hi.x)?,
                };
                let y = match y {
                    Some(r) => r.sanitized(),
                    None => resolve_axis(&config.y_spec, lo.y, hi.y)?,
                };
                (x, y)
            }
        };
        if x.is_degenerate() || y.is_degenerate() {
            debug!(?x, ?y, "degenerate range, nothing drawn");
            return Ok(());
        }
        debug!(x_min = x.min, x_max = x.max, y_min = y.min, y_max = y.max, "drawing plot");

        let x_ticks = self.ticks(Axis::X, x);
        let y_ticks = self.ticks(Axis::Y, y);

        let d = config.pixel_density;
        let font_scale = (d.x + d.y) / 2.0;
        let axis_font = config.fonts.axis * font_scale;
        let title_font = config.fonts.title * font_scale;
        let legend_font = config.fonts.legend * font_scale;

        let mut extents = FrameExtents::default();
        surface.set_font_size(axis_font);
        if let Some(last) = x_ticks.as_ref().and_then(|t| t.last()) {
            extents.x_ticks = surface.text_extent(&last.label);
        }
        if let Some(ticks) = &y_ticks {
            extents.y_ticks = if config.scale_modes.is_log(Axis::Y) {
                surface.text_extent(LOG_TICK_SAMPLE)
            } else {
                ticks
                    .first()
                    .into_iter()
                    .chain(ticks.last())
                    .map(|t| surface.text_extent(&t.label))
                    .fold(DVec2::ZERO, DVec2::max)
            };
        }
        if config.axes_labels_enabled {
            if !graphics.x_label.is_empty() {
                extents.x_label = surface.text_extent(&graphics.x_label);
            }
            if !graphics.y_label.is_empty() {
                extents.y_label = surface.text_extent(&graphics.y_label);
            }
        }
        let show_title = config.title_enabled && !graphics.title.is_empty();
        if show_title {
            surface.set_font_size(title_font);
            extents.title = surface.text_extent(&graphics.title);
        }
        let legend = if config.legend_enabled {
            surface.set_font_size(legend_font);
            let symbol = graphics.symbol_extent(d) * 3.0;
            let metrics = LegendLayout::measure(&graphics, symbol, |t| surface.text_extent(t));
            extents.legend_box = metrics.box_size;
            Some(metrics)
        } else {
            None
        };

        let margins = Margins::from_extents(&extents, d);
        let plot_box = PlotBox::from_viewport(self.viewport, d);
        let p1 = DVec2::new(x.min, y.min);
        let p2 = DVec2::new(x.max, y.max);
        let device = ViewTransform::compute(p1, p2, &plot_box, &margins, true, DVec2::ONE)?;

        if show_title {
            surface.set_font_size(title_font);
            paint_title(surface, &graphics.title, &plot_box, &margins, &extents);
        }
        if config.axes_labels_enabled {
            surface.set_font_size(axis_font);
            let labels = (graphics.x_label.as_str(), graphics.y_label.as_str());
            paint_axes_labels(surface, labels, &plot_box, &margins, &extents, config);
        }
        if let Some(metrics) = legend {
            surface.set_font_size(legend_font);
            paint_legend(surface, &graphics, &metrics, &plot_box, &margins, d);
        }

        surface.set_font_size(axis_font);
        let frame = Frame {
            p1,
            p2,
            transform: &device,
            x_ticks: x_ticks.as_deref(),
            y_ticks: y_ticks.as_deref(),
            config,
        };
        paint_frame(surface, &frame);

        graphics.scale_and_shift(&device, d);
        let area = frame.area();
        surface.set_clip(Rect::new(area.origin, area.size + DVec2::new(2.0, 1.0)));
        graphics.draw(surface);
        surface.clear_clip();

        self.device_transform = device;
        self.screen_transform = device.with_pixel_density(d);
        self.last_draw = Some(LastDraw { graphics, x, y });
        Ok(())
    }
}

fn paint_legend(
    surface: &mut dyn Surface,
    graphics: &PlotGraphics,
    metrics: &LegendMetrics,
    plot_box: &PlotBox,
    margins: &Margins,
    pixel_density: DVec2,
) {
    let top_right = plot_box.inner_top_right(margins);
    LegendLayout::paint(surface, graphics, metrics, top_right, pixel_density);
}

/// Lets the gesture controller drive a canvas that draws onto `surface`.
struct CanvasTarget<'a> {
    canvas: &'a mut PlotCanvas,
    surface: &'a mut dyn Surface,
}

impl ViewTarget for CanvasTarget<'_> {
    fn screen_to_user(&self, p: DVec2) -> DVec2 {
        self.canvas.screen_to_user(p)
    }

    fn view_ranges(&self) -> Option<(AxisRange, AxisRange)> {
        self.canvas.last_draw.as_ref().map(|l| (l.x, l.y))
    }

    fn apply_ranges(&mut self, x: AxisRange, y: AxisRange) {
        let Some(last) = self.canvas.last_draw.clone() else {
            return;
        };
        if let Err(e) = self.canvas.render(last.graphics, Some(x), Some(y), self.surface) {
            warn!("failed to redraw after gesture: {e}");
        }
    }

    fn reset(&mut self) {
        if let Err(e) = self.canvas.reset_view(self.surface) {
            warn!("failed to reset view: {e}");
        }
    }
}
