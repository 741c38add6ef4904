//! Nearest-point search across the series of a plot.

use crate::plot_types::{ClosestPoint, PlotGraphics};
use glam::DVec2;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Series at least this long are searched in parallel.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Closest point of one series, tagged with the series it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct HitResult {
    pub series_index: usize,
    pub legend: String,
    pub closest: ClosestPoint,
}

fn by_distance_then_index(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then(a.0.cmp(&b.0))
}

/// Index and Euclidean distance of the point nearest to `query`; ties go to the lowest index.
pub fn nearest(points: &[DVec2], query: DVec2) -> Option<(usize, f64)> {
    let distance = |(i, p): (usize, &DVec2)| (i, p.distance(query));
    if points.len() >= PARALLEL_THRESHOLD {
        points
            .par_iter()
            .enumerate()
            .map(distance)
            .min_by(by_distance_then_index)
    } else {
        points
            .iter()
            .enumerate()
            .map(distance)
            .min_by(by_distance_then_index)
    }
}

/// Closest point per non-empty series, in series order.
pub fn closest_points(graphics: &PlotGraphics, query: DVec2, screen_space: bool) -> Vec<HitResult> {
    graphics
        .iter()
        .enumerate()
        .filter_map(|(series_index, s)| {
            s.closest_point(query, screen_space).map(|closest| HitResult {
                series_index,
                legend: s.legend().to_string(),
                closest,
            })
        })
        .collect()
}

/// Globally closest point; ties go to the earlier series, then the lower point index.
pub fn closest(graphics: &PlotGraphics, query: DVec2, screen_space: bool) -> Option<HitResult> {
    closest_points(graphics, query, screen_space)
        .into_iter()
        .min_by(|a, b| {
            a.closest
                .distance
                .total_cmp(&b.closest.distance)
                .then(a.series_index.cmp(&b.series_index))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::MarkerStyle;
    use crate::plot_types::Series;

    #[test]
    fn test_nearest_prefers_lowest_index_on_ties() {
        let pts = [DVec2::new(1.0, 0.0), DVec2::new(-1.0, 0.0), DVec2::new(5.0, 0.0)];
        assert_eq!(nearest(&pts, DVec2::ZERO), Some((0, 1.0)));
        assert_eq!(nearest(&[], DVec2::ZERO), None);
    }

    #[test]
    fn test_no_hit_without_points() {
        assert!(closest(&PlotGraphics::default(), DVec2::ZERO, false).is_none());
        assert!(closest_points(&PlotGraphics::default(), DVec2::ZERO, true).is_empty());

        let empty = PlotGraphics::new(vec![
            Series::markers(Vec::<DVec2>::new(), MarkerStyle::default()),
            Series::markers(Vec::<DVec2>::new(), MarkerStyle::default()),
        ]);
        assert!(closest(&empty, DVec2::ZERO, false).is_none());
        assert!(closest_points(&empty, DVec2::ZERO, false).is_empty());
    }

    #[test]
    fn test_empty_series_are_skipped() {
        let g = PlotGraphics::new(vec![
            Series::markers(Vec::<DVec2>::new(), MarkerStyle::default()),
            Series::markers([(3.0, 4.0)], MarkerStyle::default()),
        ]);
        let hits = closest_points(&g, DVec2::ZERO, false);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].series_index, 1);
        assert_eq!(closest(&g, DVec2::ZERO, false).unwrap().closest.distance, 5.0);
    }

    #[test]
    fn test_parallel_search_matches_sequential() {
        let pts: Vec<DVec2> = (0..PARALLEL_THRESHOLD * 2)
            .map(|i| DVec2::new(i as f64, (i % 7) as f64))
            .collect();
        let query = DVec2::new(12_345.2, 3.0);
        let (index, _) = nearest(&pts, query).unwrap();
        assert_eq!(index, 12_345);
    }
}
