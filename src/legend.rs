use crate::plot_types::PlotGraphics;
use crate::rendering::Surface;
use glam::DVec2;

/// Padding factor applied to the legend box and between rows.
const PADDING: f64 = 1.1;
/// Rows are drawn this many line heights apart.
const ROW_SPACING: f64 = 1.5;
/// Gap between the plot area and the legend symbols, as a share of the box width.
const LEFT_GAP: f64 = 0.091;

/// Sizes of the legend in device units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LegendMetrics {
    pub box_size: DVec2,
    pub symbol_extent: DVec2,
    pub text_extent: DVec2,
}

impl LegendMetrics {
    pub fn line_height(&self) -> f64 {
        self.symbol_extent.y.max(self.text_extent.y) * PADDING
    }
}

pub struct LegendLayout;

impl LegendLayout {
    /// Measures the legend of `graphics` given the symbol size and a text measuring function.
    pub fn measure(
        graphics: &PlotGraphics,
        symbol_extent: DVec2,
        text_extent: impl Fn(&str) -> DVec2,
    ) -> LegendMetrics {
        if graphics.is_empty() {
            return LegendMetrics::default();
        }
        let text = graphics
            .legend_names()
            .into_iter()
            .map(text_extent)
            .fold(DVec2::ZERO, DVec2::max);
        let width = (symbol_extent.x + text.x) * PADDING;
        let height = symbol_extent.y.max(text.y) * PADDING * graphics.len() as f64;
        LegendMetrics {
            box_size: DVec2::new(width, height),
            symbol_extent,
            text_extent: text,
        }
    }

    /// Draws one row per series below `top_right`, the top-right corner of the plot area.
    ///
    /// The surface font must already be the legend font.
    pub fn paint(
        surface: &mut dyn Surface,
        graphics: &PlotGraphics,
        metrics: &LegendMetrics,
        top_right: DVec2,
        pixel_density: DVec2,
    ) {
        let x = top_right.x + LEFT_GAP * metrics.box_size.x;
        let line_height = metrics.line_height();
        let sym = metrics.symbol_extent;
        for (i, series) in graphics.iter().enumerate() {
            let y = top_right.y + i as f64 * line_height * ROW_SPACING;
            let start = DVec2::new(x, y);
            let end = DVec2::new(x + sym.x, y);
            series.draw_legend(surface, start, end, pixel_density);
            let text_at = DVec2::new(
                x + sym.x + 5.0 * pixel_density.x,
                y - metrics.text_extent.y / 2.0,
            );
            surface.draw_text(series.legend(), text_at);
        }
    }
}
