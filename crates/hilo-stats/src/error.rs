//! Error types for the statistics engine.

use thiserror::Error;

/// Errors surfaced by the statistics engine.
///
/// The engine never defaults invalid input silently; every condition below
/// fails synchronously at the call that detects it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// An extremum was requested for a week window with no candles.
    /// Windows produced by `partition_weeks` are never empty; this covers
    /// windows assembled by hand.
    #[error("week window contains no candles")]
    EmptyWindow,

    /// Normalization was requested over zero observed weeks.
    #[error("no complete weeks in input data")]
    InsufficientData,

    /// A caller-supplied parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
