use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in device units.
///
/// `origin` is the top-left corner, `size` is never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Rect {
    pub fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        let origin = a.min(b);
        Self {
            origin,
            size: a.max(b) - origin,
        }
    }

    pub fn max(&self) -> DVec2 {
        self.origin + self.size
    }

    pub fn center(&self) -> DVec2 {
        self.origin + self.size / 2.0
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.cmpge(self.origin).all() && p.cmple(self.max()).all()
    }
}

/// Componentwise bounding box of a set of points, `None` when empty.
pub fn bounding_box(points: &[DVec2]) -> Option<(DVec2, DVec2)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}

/// Union of two optional bounding boxes.
pub fn union_bounds(
    a: Option<(DVec2, DVec2)>,
    b: Option<(DVec2, DVec2)>,
) -> Option<(DVec2, DVec2)> {
    match (a, b) {
        (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => Some((a_lo.min(b_lo), a_hi.max(b_hi))),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}
