use glam::DVec2;
use plot_core::data_types::{BarStyle, BarWidth, DrawStyle, LineStyle, MarkerKind, MarkerStyle, ScaleModes};
use plot_core::error::PlotError;
use plot_core::plot_types::{step_line, PlotGraphics, Series, SeriesKind};
use plot_core::rendering::{DrawCommand, RecordingSurface};
use plot_core::transform::ViewTransform;

fn v(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

#[test]
fn test_steps_post_expansion() {
    let path = step_line::expand(&[v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0)], DrawStyle::StepsPost);
    assert_eq!(
        path,
        vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(2.0, 1.0), v(2.0, 0.0)]
    );
}

#[test]
fn test_step_styles_on_one_segment() {
    let (a, b) = (v(0.0, 0.0), v(2.0, 4.0));
    assert_eq!(step_line::segment(a, b, DrawStyle::StepsPre), vec![a, v(0.0, 4.0), b]);
    assert_eq!(
        step_line::segment(a, b, DrawStyle::StepsMidX),
        vec![a, v(1.0, 0.0), v(1.0, 4.0), b]
    );
    assert_eq!(
        step_line::segment(a, b, DrawStyle::StepsMidY),
        vec![a, v(0.0, 2.0), v(2.0, 2.0), b]
    );
}

#[test]
fn test_unknown_draw_style_is_rejected() {
    assert_eq!("steps-post".parse::<DrawStyle>(), Ok(DrawStyle::StepsPost));
    assert_eq!(
        "zigzag".parse::<DrawStyle>(),
        Err(PlotError::InvalidDrawStyle("zigzag".into()))
    );
    assert!(matches!("hexagon".parse::<MarkerKind>(), Err(PlotError::InvalidMarker(_))));
}

#[test]
fn test_histogram_bin_mismatch() {
    let err = Series::histogram(&[1.0, 2.0, 3.0], &[0.0, 1.0, 2.0], BarStyle::default()).unwrap_err();
    assert_eq!(err, PlotError::HistogramBinMismatch { edges: 3, heights: 3 });
}

#[test]
fn test_histogram_points_are_bin_centers() {
    let s = Series::histogram(&[5.0, 7.0], &[0.0, 1.0, 3.0], BarStyle::default()).unwrap();
    assert_eq!(s.points(), &[v(0.5, 5.0), v(2.0, 7.0)]);
}

#[test]
fn test_bar_width_mismatch() {
    let err = Series::bars(
        [(1.0, 2.0), (2.0, 3.0)],
        BarWidth::PerBar(vec![0.5]),
        BarStyle::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlotError::BarWidthMismatch { widths: 1, points: 2 });
}

#[test]
fn test_bars_draw_from_zero() {
    let mut s = Series::bars(
        [(1.0, 2.0), (3.0, -1.0)],
        BarWidth::PerBar(vec![0.5, 1.0]),
        BarStyle::default(),
    )
    .unwrap();
    s.scale_and_shift(&ViewTransform::default(), DVec2::ONE);
    let mut surface = RecordingSurface::new();
    s.draw(&mut surface);
    let rects: Vec<_> = surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect(r) => Some(*r),
            _ => None,
        })
        .collect();
    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].origin, rects[0].size), (v(0.75, 0.0), v(0.5, 2.0)));
    assert_eq!((rects[1].origin, rects[1].size), (v(2.5, -1.0), v(1.0, 1.0)));
}

#[test]
fn test_closest_point_in_user_and_screen_space() {
    let mut s = Series::markers([(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)], MarkerStyle::default());
    // x stretched 100 times more than y on screen
    s.scale_and_shift(&ViewTransform::new(v(100.0, 1.0), DVec2::ZERO), DVec2::ONE);

    let user = s.closest_point(v(1.0, 4.0), false).unwrap();
    assert_eq!(user.index, 0);
    assert!((user.distance - 17f64.sqrt()).abs() < 1e-12);

    let screen = s.closest_point(v(1.0, 4.0), true).unwrap();
    assert_eq!(screen.index, 1);
    assert_eq!(screen.distance, 6.0);
    assert_eq!(screen.scaled, v(100.0, 10.0));
    assert_eq!(screen.point, v(1.0, 10.0));
}

#[test]
fn test_closest_point_ties_and_empty() {
    let s = Series::markers([(1.0, 0.0), (-1.0, 0.0)], MarkerStyle::default());
    assert_eq!(s.closest_point(DVec2::ZERO, false).unwrap().index, 0);
    let empty = Series::markers(Vec::<DVec2>::new(), MarkerStyle::default());
    assert!(empty.closest_point(DVec2::ZERO, false).is_none());
}

#[test]
fn test_spline_needs_three_points() {
    let draw = |points: &[(f64, f64)]| {
        let mut s = Series::spline(points.iter().copied(), LineStyle::default());
        s.scale_and_shift(&ViewTransform::default(), DVec2::ONE);
        let mut surface = RecordingSurface::new();
        s.draw(&mut surface);
        surface.count(|c| matches!(c, DrawCommand::Spline(_)))
    };
    assert_eq!(draw(&[(0.0, 0.0), (1.0, 1.0)]), 0);
    assert_eq!(draw(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]), 1);
}

#[test]
fn test_line_markers_follow_points() {
    let style = LineStyle {
        marker: Some(MarkerKind::Circle),
        ..LineStyle::default()
    };
    let mut s = Series::line([(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], style);
    s.scale_and_shift(&ViewTransform::default(), DVec2::ONE);
    let mut surface = RecordingSurface::new();
    s.draw(&mut surface);
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Lines(_))), 1);
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Ellipse(_))), 3);
}

#[test]
fn test_style_edits_after_construction() {
    let mut g = PlotGraphics::new(vec![Series::line([(0.0, 1.0)], LineStyle::default())]);
    if let SeriesKind::Line(p) = g.series[0].kind_mut() {
        p.style.legend = "renamed".into();
    }
    assert_eq!(g.legend_names(), vec!["renamed"]);
}

#[test]
fn test_log_scale_drops_rows() {
    let mut g = PlotGraphics::new(vec![Series::markers(
        [(1.0, 0.0), (10.0, 100.0), (100.0, -5.0)],
        MarkerStyle::default(),
    )]);
    g.apply_scale_modes(&ScaleModes {
        log: [true, true],
        abs: [false, false],
    });
    assert_eq!(g.series[0].user_points(), &[v(1.0, 2.0)]);
    assert_eq!(g.bounding_box(), Some((v(1.0, 2.0), v(1.0, 2.0))));
}
