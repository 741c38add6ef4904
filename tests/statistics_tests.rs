use plot_core::data_types::BoxPlotStyle;
use plot_core::error::PlotError;
use plot_core::plot_types::{BoxPlot, PlotGraphics, Series};
use plot_core::rendering::{DrawCommand, RecordingSurface};
use plot_core::statistics::{find_outliers, jitter_offsets, summarize};
use plot_core::PlotCanvas;

fn sample() -> Vec<f64> {
    let mut s: Vec<f64> = (1..=9).map(f64::from).collect();
    s.push(100.0);
    s
}

#[test]
fn test_quartiles_whiskers_and_outlier() {
    let s = summarize(&sample()).unwrap();
    assert_eq!(s.q25, 3.25);
    assert_eq!(s.median, 5.5);
    assert_eq!(s.q75, 7.75);
    assert_eq!(s.iqr(), 4.5);
    assert_eq!(s.low_whisker, 1.0);
    assert_eq!(s.high_whisker, 9.0);
    assert_eq!((s.min, s.max), (1.0, 100.0));
    assert_eq!(find_outliers(&sample(), &s), vec![100.0]);
}

#[test]
fn test_non_finite_values_are_ignored() {
    let mut noisy = sample();
    noisy.extend([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]);
    assert_eq!(summarize(&noisy).unwrap(), summarize(&sample()).unwrap());
    assert_eq!(summarize(&[f64::NAN]), Err(PlotError::EmptySample));
    assert_eq!(summarize(&[]), Err(PlotError::EmptySample));
}

#[test]
fn test_single_value_sample() {
    let s = summarize(&[4.0]).unwrap();
    assert_eq!(s.values(), [4.0; 7]);
}

#[test]
fn test_jitter_is_seeded_and_bounded() {
    let a = jitter_offsets(50, 11);
    assert_eq!(a, jitter_offsets(50, 11));
    assert_ne!(a, jitter_offsets(50, 12));
    assert!(a.iter().all(|j| (-0.025..=0.025).contains(j)));
}

#[test]
fn test_box_plot_jitter_fixed_at_construction() {
    let bp = BoxPlot::new(1.0, &sample(), BoxPlotStyle::default()).unwrap();
    let again = bp.clone();
    assert_eq!(bp.outlier_positions(), again.outlier_positions());
    assert_eq!(bp.outlier_positions(), bp.outlier_positions());
}

#[test]
fn test_jitter_stable_across_draws() {
    let graphics = PlotGraphics::new(vec![
        Series::box_plot(1.0, &sample(), BoxPlotStyle::default()).unwrap(),
    ]);
    let mut canvas = PlotCanvas::new(400.0, 300.0);
    let mut surface = RecordingSurface::new();
    canvas.draw(graphics, None, None, &mut surface).unwrap();
    let first = surface.take_commands();
    canvas.redraw(&mut surface).unwrap();
    let second = surface.take_commands();

    let outliers = |cmds: &[DrawCommand]| -> Vec<DrawCommand> {
        cmds.iter()
            .filter(|c| matches!(c, DrawCommand::Rect(_)))
            .cloned()
            .collect()
    };
    // the IQR box plus one outlier square
    assert_eq!(outliers(&first).len(), 2);
    assert_eq!(outliers(&first), outliers(&second));
    assert_eq!(first, second);
}
