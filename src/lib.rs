//! plot_core: a 2-D plotting engine
//!
//! Axis scaling and tick generation, data to device transforms, series geometry,
//! box-plot statistics, zoom/pan gestures and hit testing, painted onto any [`Surface`].

pub mod chart;
pub mod data_types;
pub mod error;
pub mod hit_test;
pub mod layout;
pub mod legend;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod statistics;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart::{LastDraw, PlotCanvas};
pub use data_types::{Axis, AxisRange, AxisSpec, PlotConfig, Tick};
pub use error::{PlotError, Result};
pub use hit_test::HitResult;
pub use plot_types::{PlotGraphics, PlotRenderer, Series, SeriesKind};
pub use rendering::{DrawCommand, RecordingSurface, Surface};
pub use transform::ViewTransform;
pub use view_controller::{CursorHint, Gesture, ViewController};
