use crate::data_types::{Axis, AxisRange, InteractionConfig};
use glam::DVec2;
use tracing::{debug, trace};

/// Pointer input the controller understands. Positions are in screen units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    DragStart(DVec2),
    DragUpdate(DVec2),
    DragEnd(DVec2),
    ZoomStart(DVec2),
    ZoomUpdate(DVec2),
    ZoomEnd(DVec2),
    /// Wheel rotation; positive `delta` zooms in.
    Wheel { position: DVec2, delta: f64 },
    MiddleClick(DVec2),
}

/// Cursor the host should show, emitted only when it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Grab,
    /// West-east resize arrows.
    SizeWE,
    /// North-south resize arrows.
    SizeNS,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// User position under the cursor.
        anchor: DVec2,
    },
    ZoomDragging {
        /// Fixed zoom center in user units.
        center: DVec2,
        /// User position of the previous update.
        last: DVec2,
        /// Axis of the last non-neutral update.
        axis: Option<Axis>,
    },
}

/// What the controller reads from and changes on the view it drives.
pub trait ViewTarget {
    fn screen_to_user(&self, p: DVec2) -> DVec2;
    /// Displayed ranges in user units, `None` before anything is drawn.
    fn view_ranges(&self) -> Option<(AxisRange, AxisRange)>;
    /// Redraws with new ranges in user units.
    fn apply_ranges(&mut self, x: AxisRange, y: AxisRange);
    /// Redraws with ranges re-derived from the data.
    fn reset(&mut self);
}

/// ViewController turns gestures into range updates, independently of any
/// windowing system to facilitate testing.
#[derive(Clone, Debug, Default)]
pub struct ViewController {
    state: GestureState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == GestureState::Idle
    }

    /// Abandons any gesture in progress.
    pub fn cancel(&mut self) -> Option<CursorHint> {
        let was_active = !self.is_idle();
        self.state = GestureState::Idle;
        was_active.then_some(CursorHint::Default)
    }

    /// Feeds one gesture, returning the new cursor when it changes.
    ///
    /// Starts are ignored while another gesture is active, updates and ends
    /// are ignored unless they belong to the active gesture.
    pub fn handle(
        &mut self,
        gesture: Gesture,
        config: &InteractionConfig,
        target: &mut dyn ViewTarget,
    ) -> Option<CursorHint> {
        match (gesture, self.state) {
            (Gesture::DragStart(pos), GestureState::Idle) if config.drag_enabled => {
                target.view_ranges()?;
                let anchor = target.screen_to_user(pos);
                debug!(?anchor, "drag started");
                self.state = GestureState::Dragging { anchor };
                Some(CursorHint::Grab)
            }
            (Gesture::DragUpdate(pos), GestureState::Dragging { anchor }) => {
                let (x, y) = target.view_ranges()?;
                let delta = target.screen_to_user(pos) - anchor;
                let (x, y) = Self::pan(x, y, -delta);
                trace!(dx = delta.x, dy = delta.y, "drag update");
                target.apply_ranges(x, y);
                self.state = GestureState::Dragging {
                    anchor: target.screen_to_user(pos),
                };
                None
            }
            (Gesture::DragEnd(_), GestureState::Dragging { .. }) => {
                debug!("drag ended");
                self.state = GestureState::Idle;
                Some(CursorHint::Default)
            }
            (Gesture::ZoomStart(pos), GestureState::Idle) if config.zoom_enabled => {
                target.view_ranges()?;
                let center = target.screen_to_user(pos);
                debug!(?center, "zoom drag started");
                self.state = GestureState::ZoomDragging {
                    center,
                    last: center,
                    axis: None,
                };
                None
            }
            (Gesture::ZoomUpdate(pos), GestureState::ZoomDragging { center, last, axis }) => {
                let (x, y) = target.view_ranges()?;
                let current = target.screen_to_user(pos);
                let (ratio, picked) = Self::zoom_drag_ratio(current - last, x.span(), y.span());
                trace!(rx = ratio.x, ry = ratio.y, "zoom drag update");
                let (x, y) = Self::zoom(x, y, center, ratio);
                target.apply_ranges(x, y);
                let axis_now = picked.or(axis);
                self.state = GestureState::ZoomDragging {
                    center,
                    last: current,
                    axis: axis_now,
                };
                match picked {
                    Some(a) if axis != Some(a) => Some(match a {
                        Axis::X => CursorHint::SizeWE,
                        Axis::Y => CursorHint::SizeNS,
                    }),
                    _ => None,
                }
            }
            (Gesture::ZoomEnd(_), GestureState::ZoomDragging { axis, .. }) => {
                debug!("zoom drag ended");
                self.state = GestureState::Idle;
                axis.map(|_| CursorHint::Default)
            }
            (Gesture::Wheel { position, delta }, _) if config.zoom_enabled => {
                let (x, y) = target.view_ranges()?;
                let center = target.screen_to_user(position);
                let r = Self::wheel_ratio(delta, config);
                let (x, y) = Self::zoom(x, y, center, DVec2::splat(r));
                target.apply_ranges(x, y);
                None
            }
            (Gesture::MiddleClick(_), _) => {
                debug!("reset view");
                target.reset();
                None
            }
            _ => None,
        }
    }

    /// Zooms both ranges about `center`; ratios below one zoom in.
    ///
    /// The offset of the range midpoint from the center scales with the ratio too,
    /// so the center stays at the same relative position.
    pub fn zoom(x: AxisRange, y: AxisRange, center: DVec2, ratio: DVec2) -> (AxisRange, AxisRange) {
        (
            Self::zoom_axis(x, center.x, ratio.x),
            Self::zoom_axis(y, center.y, ratio.y),
        )
    }

    pub fn zoom_axis(range: AxisRange, center: f64, ratio: f64) -> AxisRange {
        let offset = (range.mid() - center) * ratio;
        let half = range.span() * ratio / 2.0;
        AxisRange::new(center - half + offset, center + half + offset)
    }

    /// Shifts both ranges by `delta` user units.
    pub fn pan(x: AxisRange, y: AxisRange, delta: DVec2) -> (AxisRange, AxisRange) {
        (x.shifted(delta.x), y.shifted(delta.y))
    }

    /// Zoom ratio for a zoom-drag step along the dominant axis, and that axis.
    pub fn zoom_drag_ratio(delta: DVec2, x_span: f64, y_span: f64) -> (DVec2, Option<Axis>) {
        if delta.x.abs() > delta.y.abs() {
            (DVec2::new(1.0 - delta.x / x_span, 1.0), Some(Axis::X))
        } else if delta.y.abs() > delta.x.abs() {
            (DVec2::new(1.0, 1.0 - delta.y / y_span), Some(Axis::Y))
        } else {
            (DVec2::ONE, None)
        }
    }

    pub fn wheel_ratio(delta: f64, config: &InteractionConfig) -> f64 {
        if delta > 0.0 {
            config.wheel_zoom_in
        } else {
            config.wheel_zoom_out
        }
    }
}
