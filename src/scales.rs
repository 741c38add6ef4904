//! Axis range resolution and tick generation for linear and log10 axes.

use crate::data_types::{AxisRange, AxisSpec, Tick};
use crate::error::Result;
use crate::utils::TickFormat;

/// Candidate grid mantissas besides 1, as `(factor, log10(factor))`.
const MULTIPLES: [(f64, f64); 2] = [(2.0, std::f64::consts::LOG10_2), (5.0, 0.698_970_004_336_018_8)];

/// Default number of grid intervals when the axis spec does not ask for a count.
const DEFAULT_INTERVALS: f64 = 7.0;

/// Derives the displayed range of an axis from the data bounds `lower..upper`.
pub fn resolve_axis(spec: &AxisSpec, lower: f64, upper: f64) -> Result<AxisRange> {
    spec.validate()?;
    let range = match *spec {
        AxisSpec::None | AxisSpec::Min | AxisSpec::Count(_) => {
            if lower == upper {
                AxisRange::new(lower - 0.5, upper + 0.5)
            } else {
                AxisRange::new(lower, upper)
            }
        }
        AxisSpec::Auto => auto_interval(lower, upper),
        AxisSpec::Range(a, b) => AxisRange::new(a, b),
    };
    Ok(range)
}

fn auto_interval(lower: f64, upper: f64) -> AxisRange {
    let range = upper - lower;
    if range == 0.0 {
        return AxisRange::new(lower - 0.5, upper + 0.5);
    }
    if !range.is_finite() {
        return AxisRange::new(lower, upper);
    }
    let log = range.abs().log10();
    let mut power = log.floor();
    if log - power <= 0.05 {
        power -= 1.0;
    }
    let grid = 10f64.powf(power);
    let lower = lower - lower.rem_euclid(grid);
    let rem = upper.rem_euclid(grid);
    let upper = if rem != 0.0 { upper - rem + grid } else { upper };
    AxisRange::new(lower, upper)
}

/// Restartable iterator over evenly spaced ticks of a linear axis.
#[derive(Clone, Debug)]
pub struct LinearTicks {
    start: f64,
    grid: f64,
    upper: f64,
    format: TickFormat,
    index: u64,
    prev: Option<f64>,
}

impl LinearTicks {
    /// Tick grid covering `lower..=upper`; `numticks` fixes the grid to `span / numticks`,
    /// otherwise it snaps to the nearest `{1, 2, 5} * 10^n`.
    pub fn new(lower: f64, upper: f64, numticks: Option<f64>, scientific: bool) -> Self {
        let ideal = (upper - lower) / numticks.unwrap_or(DEFAULT_INTERVALS);
        if !(ideal.is_finite() && ideal > 0.0) {
            return Self::empty();
        }
        let log = ideal.log10();
        let power = log.floor();
        let grid = match numticks {
            Some(_) => ideal,
            None => {
                let fraction = log - power;
                let mut factor = 1.0;
                let mut error = fraction;
                for (f, lf) in MULTIPLES {
                    let e = (fraction - lf).abs();
                    if e < error {
                        error = e;
                        factor = f;
                    }
                }
                factor * 10f64.powf(power)
            }
        };
        Self {
            start: -grid * (-lower / grid).floor(),
            grid,
            upper,
            format: TickFormat::for_power(power, scientific),
            index: 0,
            prev: None,
        }
    }

    fn empty() -> Self {
        Self {
            start: 0.0,
            grid: 0.0,
            upper: f64::NEG_INFINITY,
            format: TickFormat::Fixed(0),
            index: 0,
            prev: None,
        }
    }

    pub fn grid(&self) -> f64 {
        self.grid
    }

    pub fn format(&self) -> TickFormat {
        self.format
    }

    /// Rewinds to the first tick.
    pub fn restart(&mut self) {
        self.index = 0;
        self.prev = None;
    }
}

impl Iterator for LinearTicks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let mut t = self.start + self.grid * self.index as f64;
        if t > self.upper || self.prev.is_some_and(|p| t <= p) {
            return None;
        }
        if t == 0.0 {
            t = 0.0; // drop the sign of -0.0
        }
        self.index += 1;
        self.prev = Some(t);
        Some(Tick::new(t, self.format.format(t)))
    }
}

/// Ticks for a linear axis, ascending and within `lower..=upper`.
pub fn generate_ticks(lower: f64, upper: f64, numticks: Option<f64>, scientific: bool) -> Vec<Tick> {
    LinearTicks::new(lower, upper, numticks, scientific).collect()
}

/// Ticks for a log10 axis whose bounds are given as exponents.
///
/// Positions are exponents too. Decades are labelled `1e<N>`; minor ticks carry
/// `<m>e<N>` labels only on spans under two decades. Spans over six decades step
/// multiplicatively by whole decades.
pub fn generate_log_ticks(lower: f64, upper: f64) -> Vec<Tick> {
    let mut ticks = Vec::new();
    if lower.is_finite() && upper.is_finite() && lower <= upper {
        let span = upper - lower;
        let mag = 10f64.powf(lower.floor());
        let (mut t, base) = if span > 6.0 {
            (10f64.powf(lower.ceil()), Some(10f64.powf((span / 6.0).floor())))
        } else {
            ((10f64.powf(lower) / mag).ceil() * mag, None)
        };
        let limit = 10f64.powf(upper);
        let mut major = lower.floor() as i32;
        while t <= limit {
            let decade = (t.log10() + 1e-16).floor() as i32;
            let label = if decade != major {
                major = decade;
                format!("1e{major}")
            } else if span < 2.0 {
                let minor = (t / 10f64.powi(major) + 0.5) as i64;
                format!("{minor}e{major}")
            } else {
                String::new()
            };
            ticks.push(Tick::new(t.log10(), label));
            let next = match base {
                Some(base) => t * base,
                None => t + 10f64.powi(decade),
            };
            if next <= t {
                break;
            }
            t = next;
        }
    }
    if ticks.is_empty() {
        ticks.push(Tick::new(0.0, ""));
    }
    ticks
}
