use crate::data_types::DrawStyle;
use glam::DVec2;

/// Vertices of the connector from `a` to `b`, both endpoints included.
pub fn segment(a: DVec2, b: DVec2, style: DrawStyle) -> Vec<DVec2> {
    match style {
        DrawStyle::Line => vec![a, b],
        DrawStyle::StepsPre => vec![a, DVec2::new(a.x, b.y), b],
        DrawStyle::StepsPost => vec![a, DVec2::new(b.x, a.y), b],
        DrawStyle::StepsMidX => {
            let mid = (a.x + b.x) / 2.0;
            vec![a, DVec2::new(mid, a.y), DVec2::new(mid, b.y), b]
        }
        DrawStyle::StepsMidY => {
            let mid = (a.y + b.y) / 2.0;
            vec![a, DVec2::new(a.x, mid), DVec2::new(b.x, mid), b]
        }
    }
}

/// Continuous polyline through `points` with every connector expanded.
pub fn expand(points: &[DVec2], style: DrawStyle) -> Vec<DVec2> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut path = vec![*first];
    for pair in points.windows(2) {
        path.extend(segment(pair[0], pair[1], style).into_iter().skip(1));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> DVec2 {
        DVec2::new(x, y)
    }

    #[test]
    fn test_segment_shapes() {
        let (a, b) = (v(0.0, 0.0), v(2.0, 4.0));
        assert_eq!(segment(a, b, DrawStyle::Line), vec![a, b]);
        assert_eq!(segment(a, b, DrawStyle::StepsPre), vec![a, v(0.0, 4.0), b]);
        assert_eq!(segment(a, b, DrawStyle::StepsPost), vec![a, v(2.0, 0.0), b]);
        assert_eq!(
            segment(a, b, DrawStyle::StepsMidX),
            vec![a, v(1.0, 0.0), v(1.0, 4.0), b]
        );
        assert_eq!(
            segment(a, b, DrawStyle::StepsMidY),
            vec![a, v(0.0, 2.0), v(2.0, 2.0), b]
        );
    }

    #[test]
    fn test_expand_joins_segments() {
        let pts = [v(0.0, 0.0), v(1.0, 1.0), v(2.0, 0.0)];
        assert_eq!(
            expand(&pts, DrawStyle::StepsPost),
            vec![v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(2.0, 1.0), v(2.0, 0.0)]
        );
        assert_eq!(expand(&pts[..1], DrawStyle::StepsPre), vec![v(0.0, 0.0)]);
        assert!(expand(&[], DrawStyle::Line).is_empty());
    }
}
