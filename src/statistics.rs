//! Descriptive statistics behind box-plot series.

use crate::error::{PlotError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Whiskers reach the most extreme samples within this many IQRs of the box.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;

/// Total horizontal spread of outlier jitter, in data units.
pub const JITTER_SPREAD: f64 = 0.05;

/// Seven-number summary of a sample, in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotSummary {
    pub min: f64,
    pub low_whisker: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub high_whisker: f64,
    pub max: f64,
}

impl BoxPlotSummary {
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }

    pub fn values(&self) -> [f64; 7] {
        [
            self.min,
            self.low_whisker,
            self.q25,
            self.median,
            self.q75,
            self.high_whisker,
            self.max,
        ]
    }
}

/// Drops NaN and infinite values, keeping sample order.
pub fn clean_sample(sample: &[f64]) -> Vec<f64> {
    sample.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Linear-interpolated percentile of an ascending, non-empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = (lo + 1).min(n - 1);
            let frac = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

pub fn summarize(sample: &[f64]) -> Result<BoxPlotSummary> {
    let mut data = clean_sample(sample);
    if data.is_empty() {
        return Err(PlotError::EmptySample);
    }
    data.sort_by(f64::total_cmp);

    let q25 = percentile(&data, 25.0);
    let median = percentile(&data, 50.0);
    let q75 = percentile(&data, 75.0);
    let iqr = q75 - q25;
    let low_fence = q25 - WHISKER_IQR_FACTOR * iqr;
    let high_fence = q75 + WHISKER_IQR_FACTOR * iqr;

    // the quartiles always lie inside the fences, so both searches find a value
    let low_whisker = data.iter().copied().find(|v| *v >= low_fence).unwrap_or(q25);
    let high_whisker = data.iter().rev().copied().find(|v| *v <= high_fence).unwrap_or(q75);

    Ok(BoxPlotSummary {
        min: data[0],
        low_whisker,
        q25,
        median,
        q75,
        high_whisker,
        max: data[data.len() - 1],
    })
}

/// Cleaned sample values outside the whiskers, in sample order.
pub fn find_outliers(sample: &[f64], summary: &BoxPlotSummary) -> Vec<f64> {
    sample
        .iter()
        .copied()
        .filter(|v| v.is_finite() && (*v < summary.low_whisker || *v > summary.high_whisker))
        .collect()
}

/// `count` offsets uniform in `[-JITTER_SPREAD / 2, JITTER_SPREAD / 2)`, reproducible per seed.
pub fn jitter_offsets(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| JITTER_SPREAD * rng.random_range(0.0..1.0) - JITTER_SPREAD / 2.0)
        .collect()
}
