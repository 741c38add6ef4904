// Rendering functions for the chart

use crate::data_types::{PlotConfig, Rect, Tick};
use crate::layout::{FrameExtents, Margins, PlotBox};
use crate::theme::{Brush, Pen};
use crate::transform::ViewTransform;
use glam::DVec2;

/// Drawing backend the canvas paints onto. All coordinates are device units.
pub trait Surface {
    fn set_pen(&mut self, pen: Pen);
    fn set_brush(&mut self, brush: Brush);
    fn set_font_size(&mut self, points: f64);

    fn draw_line(&mut self, from: DVec2, to: DVec2);
    fn draw_lines(&mut self, points: &[DVec2]);
    fn draw_spline(&mut self, points: &[DVec2]);
    fn draw_rect(&mut self, rect: Rect);
    fn draw_ellipse(&mut self, rect: Rect);
    fn draw_polygon(&mut self, points: &[DVec2]);
    fn draw_point(&mut self, at: DVec2);
    /// Draws `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: DVec2);
    /// Draws `text` rotated counter-clockwise by `degrees` around `at`.
    fn draw_rotated_text(&mut self, text: &str, at: DVec2, degrees: f64);

    /// Width and height of `text` in the current font.
    fn text_extent(&self, text: &str) -> DVec2;

    fn set_clip(&mut self, rect: Rect);
    fn clear_clip(&mut self);
}

/// One primitive issued to a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetPen(Pen),
    SetBrush(Brush),
    SetFontSize(f64),
    Line(DVec2, DVec2),
    Lines(Vec<DVec2>),
    Spline(Vec<DVec2>),
    Rect(Rect),
    Ellipse(Rect),
    Polygon(Vec<DVec2>),
    Point(DVec2),
    Text { text: String, at: DVec2 },
    RotatedText { text: String, at: DVec2, degrees: f64 },
    SetClip(Rect),
    ClearClip,
}

/// Surface that records every call, measuring text with fixed per-character metrics.
///
/// A character is `0.6` font sizes wide and a line `1.2` font sizes high.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    font_size: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            font_size: 10.0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Texts drawn so far, rotated or not, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } | DrawCommand::RotatedText { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn set_pen(&mut self, pen: Pen) {
        self.commands.push(DrawCommand::SetPen(pen));
    }

    fn set_brush(&mut self, brush: Brush) {
        self.commands.push(DrawCommand::SetBrush(brush));
    }

    fn set_font_size(&mut self, points: f64) {
        self.font_size = points;
        self.commands.push(DrawCommand::SetFontSize(points));
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2) {
        self.commands.push(DrawCommand::Line(from, to));
    }

    fn draw_lines(&mut self, points: &[DVec2]) {
        self.commands.push(DrawCommand::Lines(points.to_vec()));
    }

    fn draw_spline(&mut self, points: &[DVec2]) {
        self.commands.push(DrawCommand::Spline(points.to_vec()));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn draw_ellipse(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Ellipse(rect));
    }

    fn draw_polygon(&mut self, points: &[DVec2]) {
        self.commands.push(DrawCommand::Polygon(points.to_vec()));
    }

    fn draw_point(&mut self, at: DVec2) {
        self.commands.push(DrawCommand::Point(at));
    }

    fn draw_text(&mut self, text: &str, at: DVec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
        });
    }

    fn draw_rotated_text(&mut self, text: &str, at: DVec2, degrees: f64) {
        self.commands.push(DrawCommand::RotatedText {
            text: text.to_string(),
            at,
            degrees,
        });
    }

    fn text_extent(&self, text: &str) -> DVec2 {
        DVec2::new(
            text.chars().count() as f64 * 0.6 * self.font_size,
            1.2 * self.font_size,
        )
    }

    fn set_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::SetClip(rect));
    }

    fn clear_clip(&mut self) {
        self.commands.push(DrawCommand::ClearClip);
    }
}

/// Geometry shared by the frame painters: the visible data rectangle and its device transform.
pub struct Frame<'a> {
    /// Lower-left corner in data units.
    pub p1: DVec2,
    /// Upper-right corner in data units.
    pub p2: DVec2,
    pub transform: &'a ViewTransform,
    pub x_ticks: Option<&'a [Tick]>,
    pub y_ticks: Option<&'a [Tick]>,
    pub config: &'a PlotConfig,
}

impl Frame<'_> {
    fn at(&self, x: f64, y: f64) -> DVec2 {
        self.transform.user_to_screen(DVec2::new(x, y))
    }

    fn density(&self) -> DVec2 {
        self.config.pixel_density
    }

    fn pen(&self, pen: Pen) -> Pen {
        pen.scaled(self.density().x)
    }

    /// Plot area in device units, as used for clipping.
    pub fn area(&self) -> Rect {
        Rect::from_corners(self.at(self.p1.x, self.p1.y), self.at(self.p2.x, self.p2.y))
    }
}

/// Paints grid, ticks, center lines, diagonals, frame axes and axis values, in that order.
pub fn paint_frame(surface: &mut dyn Surface, frame: &Frame<'_>) {
    let config = frame.config;
    if config.grid.iter().any(|g| *g) {
        paint_grid(surface, frame);
    }
    if config.ticks.any() {
        paint_ticks(surface, frame);
    }
    if config.center_lines.horizontal() || config.center_lines.vertical() {
        paint_center_lines(surface, frame);
    }
    if config.diagonals.rising() || config.diagonals.falling() {
        paint_diagonals(surface, frame);
    }
    if config.axes.any() {
        paint_axes(surface, frame);
    }
    if config.axes_values.any() {
        paint_axes_values(surface, frame);
    }
}

fn paint_grid(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_pen(frame.pen(frame.config.theme.grid));
    let (p1, p2) = (frame.p1, frame.p2);
    if let (Some(ticks), true) = (frame.x_ticks, frame.config.grid[0]) {
        for t in ticks {
            surface.draw_line(frame.at(t.position, p1.y), frame.at(t.position, p2.y));
        }
    }
    if let (Some(ticks), true) = (frame.y_ticks, frame.config.grid[1]) {
        for t in ticks {
            surface.draw_line(frame.at(p1.x, t.position), frame.at(p2.x, t.position));
        }
    }
}

fn paint_ticks(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_pen(frame.pen(frame.config.theme.ticks));
    let len = frame.config.tick_length_device();
    let sides = frame.config.ticks;
    let (p1, p2) = (frame.p1, frame.p2);
    if let Some(ticks) = frame.x_ticks {
        for (enabled, y, dir) in [(sides.bottom, p1.y, -1.0), (sides.top, p2.y, 1.0)] {
            if !enabled {
                continue;
            }
            for t in ticks {
                let pt = frame.at(t.position, y);
                surface.draw_line(pt, pt + DVec2::new(0.0, dir * len.x));
            }
        }
    }
    if let Some(ticks) = frame.y_ticks {
        for (enabled, x, dir) in [(sides.left, p1.x, 1.0), (sides.right, p2.x, -1.0)] {
            if !enabled {
                continue;
            }
            for t in ticks {
                let pt = frame.at(x, t.position);
                surface.draw_line(pt, pt + DVec2::new(dir * len.y, 0.0));
            }
        }
    }
}

fn paint_center_lines(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_pen(frame.pen(frame.config.theme.center_line));
    let lo = frame.at(frame.p1.x, frame.p1.y);
    let hi = frame.at(frame.p2.x, frame.p2.y);
    let mid = (lo + hi) / 2.0;
    if frame.config.center_lines.horizontal() {
        surface.draw_line(DVec2::new(lo.x, mid.y), DVec2::new(hi.x, mid.y));
    }
    if frame.config.center_lines.vertical() {
        surface.draw_line(DVec2::new(mid.x, lo.y), DVec2::new(mid.x, hi.y));
    }
}

fn paint_diagonals(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_pen(frame.pen(frame.config.theme.diagonal));
    let (p1, p2) = (frame.p1, frame.p2);
    if frame.config.diagonals.rising() {
        surface.draw_line(frame.at(p1.x, p1.y), frame.at(p2.x, p2.y));
    }
    if frame.config.diagonals.falling() {
        surface.draw_line(frame.at(p1.x, p2.y), frame.at(p2.x, p1.y));
    }
}

fn paint_axes(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_pen(frame.pen(frame.config.theme.axes));
    let sides = frame.config.axes;
    let (p1, p2) = (frame.p1, frame.p2);
    if frame.config.x_spec.shows_ticks() {
        if sides.bottom {
            surface.draw_line(frame.at(p1.x, p1.y), frame.at(p2.x, p1.y));
        }
        if sides.top {
            surface.draw_line(frame.at(p1.x, p2.y), frame.at(p2.x, p2.y));
        }
    }
    if frame.config.y_spec.shows_ticks() {
        if sides.left {
            surface.draw_line(frame.at(p1.x, p1.y), frame.at(p1.x, p2.y));
        }
        if sides.right {
            surface.draw_line(frame.at(p2.x, p1.y), frame.at(p2.x, p2.y));
        }
    }
}

fn paint_axes_values(surface: &mut dyn Surface, frame: &Frame<'_>) {
    // only ticks pointing out of the plot area push the labels away
    let len = frame.config.tick_length_device().min(DVec2::ZERO);
    let d = frame.density();
    let sides = frame.config.axes_values;
    let (p1, p2) = (frame.p1, frame.p2);

    if let Some(ticks) = frame.x_ticks {
        for t in ticks {
            let ext = surface.text_extent(&t.label);
            if sides.bottom {
                let pt = frame.at(t.position, p1.y);
                surface.draw_text(&t.label, DVec2::new(pt.x - ext.x / 2.0, pt.y + 2.0 * d.y - len.x));
            }
            if sides.top {
                let pt = frame.at(t.position, p2.y);
                surface.draw_text(
                    &t.label,
                    DVec2::new(pt.x - ext.x / 2.0, pt.y - 2.0 * d.y - ext.y + len.x),
                );
            }
        }
    }

    if let Some(ticks) = frame.y_ticks {
        let h = surface.text_extent("0").y;
        for t in ticks {
            let w = surface.text_extent(&t.label).x;
            if sides.left {
                let pt = frame.at(p1.x, t.position);
                surface.draw_text(&t.label, DVec2::new(pt.x - w - 3.0 * d.x + len.y, pt.y - 0.5 * h));
            }
            if sides.right {
                let pt = frame.at(p2.x, t.position);
                surface.draw_text(&t.label, DVec2::new(pt.x + 3.0 * d.x - len.y, pt.y - 0.5 * h));
            }
        }
    }
}

/// Paints the title centered above the plot area.
pub fn paint_title(
    surface: &mut dyn Surface,
    title: &str,
    plot_box: &PlotBox,
    margins: &Margins,
    extents: &FrameExtents,
) {
    let x = plot_box.origin.x + margins.left
        + (plot_box.size.x - margins.left - margins.right) / 2.0
        - extents.title.x / 2.0;
    surface.draw_text(title, DVec2::new(x, plot_box.origin.y - plot_box.size.y));
}

/// Paints the x label under the axis values and the y label rotated along the left edge.
pub fn paint_axes_labels(
    surface: &mut dyn Surface,
    labels: (&str, &str),
    plot_box: &PlotBox,
    margins: &Margins,
    extents: &FrameExtents,
    config: &PlotConfig,
) {
    let len = config.tick_length_device().min(DVec2::ZERO);
    let (x_label, y_label) = labels;
    if !x_label.is_empty() {
        let x = plot_box.origin.x + margins.left
            + (plot_box.size.x - margins.left - margins.right) / 2.0
            - extents.x_label.x / 2.0;
        surface.draw_text(x_label, DVec2::new(x, plot_box.origin.y - extents.x_label.y - len.x));
    }

    if !y_label.is_empty() {
        let y = plot_box.origin.y - margins.bottom
            - (plot_box.size.y - margins.bottom - margins.top) / 2.0
            + extents.y_label.x / 2.0;
        surface.draw_rotated_text(y_label, DVec2::new(plot_box.origin.x, y), 90.0);
    }
}
