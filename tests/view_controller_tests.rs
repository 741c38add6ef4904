use glam::DVec2;
use plot_core::data_types::{Axis, AxisRange, InteractionConfig};
use plot_core::view_controller::{CursorHint, Gesture, GestureState, ViewController, ViewTarget};

/// Target whose screen and user units coincide.
struct MockView {
    x: AxisRange,
    y: AxisRange,
    drawn: bool,
    resets: usize,
    redraws: usize,
}

impl MockView {
    fn new() -> Self {
        Self {
            x: AxisRange::new(0.0, 10.0),
            y: AxisRange::new(0.0, 10.0),
            drawn: true,
            resets: 0,
            redraws: 0,
        }
    }
}

impl ViewTarget for MockView {
    fn screen_to_user(&self, p: DVec2) -> DVec2 {
        p
    }

    fn view_ranges(&self) -> Option<(AxisRange, AxisRange)> {
        self.drawn.then_some((self.x, self.y))
    }

    fn apply_ranges(&mut self, x: AxisRange, y: AxisRange) {
        self.x = x;
        self.y = y;
        self.redraws += 1;
    }

    fn reset(&mut self) {
        self.x = AxisRange::new(0.0, 10.0);
        self.y = AxisRange::new(0.0, 10.0);
        self.resets += 1;
    }
}

fn v(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

#[test]
fn test_zoom_half_about_origin() {
    let r = AxisRange::new(-10.0, 10.0);
    let (x, y) = ViewController::zoom(r, r, DVec2::ZERO, DVec2::splat(0.5));
    assert_eq!((x.min, x.max), (-5.0, 5.0));
    assert_eq!((y.min, y.max), (-5.0, 5.0));
}

#[test]
fn test_zoom_keeps_center_fixed() {
    // the center sits at 25% of the range before and after
    let x = ViewController::zoom_axis(AxisRange::new(0.0, 8.0), 2.0, 0.5);
    assert_eq!(x, AxisRange::new(1.0, 5.0));
    let x = ViewController::zoom_axis(AxisRange::new(0.0, 8.0), 2.0, 2.0);
    assert_eq!(x, AxisRange::new(-2.0, 14.0));
}

#[test]
fn test_drag_pans_and_reanchors() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();

    assert_eq!(c.handle(Gesture::DragStart(v(0.0, 0.0)), &config, &mut view), Some(CursorHint::Grab));
    assert_eq!(c.handle(Gesture::DragUpdate(v(2.0, 3.0)), &config, &mut view), None);
    assert_eq!(view.x, AxisRange::new(-2.0, 8.0));
    assert_eq!(view.y, AxisRange::new(-3.0, 7.0));

    // the anchor moved to the last cursor position
    c.handle(Gesture::DragUpdate(v(3.0, 3.0)), &config, &mut view);
    assert_eq!(view.x, AxisRange::new(-3.0, 7.0));
    assert_eq!(view.y, AxisRange::new(-3.0, 7.0));

    assert_eq!(c.handle(Gesture::DragEnd(v(3.0, 3.0)), &config, &mut view), Some(CursorHint::Default));
    assert!(c.is_idle());
}

#[test]
fn test_zoom_drag_cursor_follows_axis() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();

    assert_eq!(c.handle(Gesture::ZoomStart(v(5.0, 5.0)), &config, &mut view), None);
    let hint = c.handle(Gesture::ZoomUpdate(v(6.0, 5.0)), &config, &mut view);
    assert_eq!(hint, Some(CursorHint::SizeWE));
    assert_eq!(view.x, AxisRange::new(0.5, 9.5));
    assert_eq!(view.y, AxisRange::new(0.0, 10.0));

    // same axis again, no new hint
    assert_eq!(c.handle(Gesture::ZoomUpdate(v(7.0, 5.0)), &config, &mut view), None);

    let hint = c.handle(Gesture::ZoomUpdate(v(7.0, 4.0)), &config, &mut view);
    assert_eq!(hint, Some(CursorHint::SizeNS));
    // moving down by one unit zooms y out by 10%
    assert!((view.y.span() - 11.0).abs() < 1e-12);

    assert_eq!(c.handle(Gesture::ZoomEnd(v(7.0, 4.0)), &config, &mut view), Some(CursorHint::Default));
    assert!(c.is_idle());
}

#[test]
fn test_neutral_zoom_drag_changes_nothing() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();
    c.handle(Gesture::ZoomStart(v(5.0, 5.0)), &config, &mut view);
    assert_eq!(c.handle(Gesture::ZoomUpdate(v(6.0, 6.0)), &config, &mut view), None);
    assert_eq!(view.x, AxisRange::new(0.0, 10.0));
    // no axis was picked, so ending needs no cursor change
    assert_eq!(c.handle(Gesture::ZoomEnd(v(6.0, 6.0)), &config, &mut view), None);
}

#[test]
fn test_gestures_are_mutually_exclusive() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();

    c.handle(Gesture::DragStart(v(1.0, 1.0)), &config, &mut view);
    assert_eq!(c.handle(Gesture::ZoomStart(v(5.0, 5.0)), &config, &mut view), None);
    assert_eq!(c.handle(Gesture::ZoomUpdate(v(9.0, 5.0)), &config, &mut view), None);
    assert_eq!(c.handle(Gesture::ZoomEnd(v(9.0, 5.0)), &config, &mut view), None);
    assert!(matches!(c.state(), GestureState::Dragging { .. }));
    assert_eq!(view.redraws, 0);

    // an update with no active gesture is ignored
    let mut idle = ViewController::new();
    idle.handle(Gesture::DragUpdate(v(4.0, 4.0)), &config, &mut view);
    assert_eq!(view.redraws, 0);
}

#[test]
fn test_wheel_zooms_about_cursor() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();

    let wheel_in = Gesture::Wheel { position: v(0.0, 10.0), delta: 120.0 };
    c.handle(wheel_in, &config, &mut view);
    assert_eq!(view.x, AxisRange::new(0.0, 9.0));
    assert_eq!(view.y, AxisRange::new(1.0, 10.0));

    let wheel_out = Gesture::Wheel { position: v(0.0, 10.0), delta: -120.0 };
    c.handle(wheel_out, &config, &mut view);
    assert!((view.x.span() - 9.9).abs() < 1e-12);
    assert!(c.is_idle());
}

#[test]
fn test_disabled_gestures_are_ignored() {
    let config = InteractionConfig {
        drag_enabled: false,
        zoom_enabled: false,
        ..InteractionConfig::default()
    };
    let mut view = MockView::new();
    let mut c = ViewController::new();
    assert_eq!(c.handle(Gesture::DragStart(v(1.0, 1.0)), &config, &mut view), None);
    c.handle(Gesture::ZoomStart(v(1.0, 1.0)), &config, &mut view);
    c.handle(Gesture::Wheel { position: v(1.0, 1.0), delta: 1.0 }, &config, &mut view);
    assert!(c.is_idle());
    assert_eq!(view.redraws, 0);
}

#[test]
fn test_nothing_drawn_means_no_gesture() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    view.drawn = false;
    let mut c = ViewController::new();
    assert_eq!(c.handle(Gesture::DragStart(v(1.0, 1.0)), &config, &mut view), None);
    assert!(c.is_idle());
}

#[test]
fn test_middle_click_resets() {
    let config = InteractionConfig::default();
    let mut view = MockView::new();
    let mut c = ViewController::new();
    c.handle(Gesture::Wheel { position: v(5.0, 5.0), delta: 1.0 }, &config, &mut view);
    c.handle(Gesture::MiddleClick(v(5.0, 5.0)), &config, &mut view);
    assert_eq!(view.resets, 1);
    assert_eq!(view.x, AxisRange::new(0.0, 10.0));
}

#[test]
fn test_zoom_drag_ratio_uses_span() {
    let (ratio, axis) = ViewController::zoom_drag_ratio(v(0.0, 2.0), 10.0, 4.0);
    assert_eq!(ratio, v(1.0, 0.5));
    assert_eq!(axis, Some(Axis::Y));
}
