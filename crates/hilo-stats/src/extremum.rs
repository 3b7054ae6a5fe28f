//! Weekly extremum location.

use hilo_core::{Candle, WeekKey, Weekday};
use serde::Serialize;

use crate::error::StatsError;

/// Whether an extremum is a weekly high or a weekly low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExtremumKind {
    High,
    Low,
}

/// One extremum occurrence: where in the week (day, hour) a weekly high or
/// low landed, and at what price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremumEvent {
    pub week: WeekKey,
    pub kind: ExtremumKind,
    pub day: Weekday,
    pub hour: u32,
    pub value: f64,
}

/// The high and low events of one week window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekExtrema {
    pub high: ExtremumEvent,
    pub low: ExtremumEvent,
}

/// Find the weekly high and low within one window.
///
/// The window must be in chronological order. Ties resolve to the earliest
/// candle: the strict comparisons below never replace an equal extremum.
pub fn locate_extrema(week: WeekKey, window: &[Candle]) -> Result<WeekExtrema, StatsError> {
    let first = window.first().ok_or(StatsError::EmptyWindow)?;

    let mut high = first;
    let mut low = first;
    for candle in &window[1..] {
        if candle.high > high.high {
            high = candle;
        }
        if candle.low < low.low {
            low = candle;
        }
    }

    Ok(WeekExtrema {
        high: ExtremumEvent {
            week,
            kind: ExtremumKind::High,
            day: high.day,
            hour: high.hour(),
            value: high.high,
        },
        low: ExtremumEvent {
            week,
            kind: ExtremumKind::Low,
            day: low.day,
            hour: low.hour(),
            value: low.low,
        },
    })
}
