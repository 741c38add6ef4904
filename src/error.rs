//! Error types for the plotting engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    #[error("illegal axis specification: {0}")]
    InvalidAxisSpec(String),

    #[error("invalid drawstyle '{0}', expected one of line, steps-pre, steps-post, steps-mid-x, steps-mid-y")]
    InvalidDrawStyle(String),

    #[error("invalid marker '{0}'")]
    InvalidMarker(String),

    #[error("barwidth ({widths} items) and points ({points} items) do not have the same length")]
    BarWidthMismatch { widths: usize, points: usize },

    #[error("len(binspec) must equal len(hist) + 1, got {edges} edges for {heights} heights")]
    HistogramBinMismatch { edges: usize, heights: usize },

    #[error("box plot sample has no finite values")]
    EmptySample,

    #[error("zero-width range on the {0} axis")]
    DegenerateRange(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;
