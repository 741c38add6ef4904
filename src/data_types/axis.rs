use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the two plot axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// How the displayed bounds of an axis are derived from the data bounds.
///
/// Serialized as `"none"`, `"min"`, `"auto"`, a tick count, or a `[min, max]` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisSpecRepr", into = "AxisSpecRepr")]
pub enum AxisSpec {
    /// Exact data bounds, no ticks or axis values.
    None,
    /// Exact data bounds.
    Min,
    /// Data bounds rounded outward to a decade-aligned grid.
    #[default]
    Auto,
    /// Exact data bounds with the given number of ticks.
    Count(f64),
    /// Fixed range, whatever the data.
    Range(f64, f64),
}

impl AxisSpec {
    pub fn validate(&self) -> Result<(), PlotError> {
        match *self {
            AxisSpec::Count(n) if !(n.is_finite() && n > 0.0) => {
                Err(PlotError::InvalidAxisSpec(format!("tick count {n}")))
            }
            AxisSpec::Range(a, b) if !(a.is_finite() && b.is_finite()) => {
                Err(PlotError::InvalidAxisSpec(format!("range ({a}, {b})")))
            }
            _ => Ok(()),
        }
    }

    /// Tick count requested by a numeric spec.
    pub fn tick_count(&self) -> Option<f64> {
        match *self {
            AxisSpec::Count(n) => Some(n),
            _ => None,
        }
    }

    pub fn shows_ticks(&self) -> bool {
        !matches!(self, AxisSpec::None)
    }
}

impl FromStr for AxisSpec {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = match s.trim() {
            "none" => AxisSpec::None,
            "min" => AxisSpec::Min,
            "auto" => AxisSpec::Auto,
            other => match other.parse::<f64>() {
                Ok(n) => AxisSpec::Count(n),
                Err(_) => return Err(PlotError::InvalidAxisSpec(other.to_string())),
            },
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl fmt::Display for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSpec::None => write!(f, "none"),
            AxisSpec::Min => write!(f, "min"),
            AxisSpec::Auto => write!(f, "auto"),
            AxisSpec::Count(n) => write!(f, "{n}"),
            AxisSpec::Range(a, b) => write!(f, "({a}, {b})"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AxisSpecRepr {
    Named(String),
    Count(f64),
    Range([f64; 2]),
}

impl TryFrom<AxisSpecRepr> for AxisSpec {
    type Error = PlotError;

    fn try_from(repr: AxisSpecRepr) -> Result<Self, Self::Error> {
        let spec = match repr {
            AxisSpecRepr::Named(name) => return name.parse(),
            AxisSpecRepr::Count(n) => AxisSpec::Count(n),
            AxisSpecRepr::Range([a, b]) => AxisSpec::Range(a, b),
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl From<AxisSpec> for AxisSpecRepr {
    fn from(spec: AxisSpec) -> Self {
        match spec {
            AxisSpec::None => AxisSpecRepr::Named("none".into()),
            AxisSpec::Min => AxisSpecRepr::Named("min".into()),
            AxisSpec::Auto => AxisSpecRepr::Named("auto".into()),
            AxisSpec::Count(n) => AxisSpecRepr::Count(n),
            AxisSpec::Range(a, b) => AxisSpecRepr::Range([a, b]),
        }
    }
}

/// Displayed bounds of one axis, in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Creates a range, swapping the bounds if they are reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Shifts both bounds by `delta` data units.
    pub fn pan(&mut self, delta: f64) {
        self.min += delta;
        self.max += delta;
    }

    pub fn shifted(mut self, delta: f64) -> Self {
        self.pan(delta);
        self
    }

    /// Replaces NaN with zero and infinities with the largest finite values.
    pub fn sanitized(self) -> Self {
        fn finite(v: f64) -> f64 {
            if v.is_nan() {
                0.0
            } else if v == f64::INFINITY {
                f64::MAX
            } else if v == f64::NEG_INFINITY {
                f64::MIN
            } else {
                v
            }
        }
        Self::new(finite(self.min), finite(self.max))
    }

    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.min), f(self.max))
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

/// A labelled tick position in data units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}
