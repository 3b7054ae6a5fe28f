//! Probability normalization over occurrence counts.
//!
//! Counts become percentages of the total number of observed weeks. The
//! combined figure is the average of the high and low probabilities. All
//! values stay unrounded `f64`; rounding and zero sentinels belong to the
//! presentation layer.

use hilo_core::Weekday;
use serde::Serialize;

use crate::error::StatsError;
use crate::tabulate::{Occurrence, OccurrenceTable};

/// Probability of the weekly high/low falling on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayProbability {
    pub day: Weekday,
    pub high: f64,
    pub low: f64,
    pub total: f64,
}

/// Probability of the weekly high/low falling within a given hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourProbability {
    pub hour: u32,
    pub high: f64,
    pub low: f64,
    pub total: f64,
}

/// Probability of the weekly high/low falling on a given (day, hour).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayHourProbability {
    pub day: Weekday,
    pub hour: u32,
    pub high: f64,
    pub low: f64,
    pub total: f64,
}

fn check_weeks(total_weeks: usize) -> Result<(), StatsError> {
    if total_weeks == 0 {
        return Err(StatsError::InsufficientData);
    }
    Ok(())
}

fn percentages(counts: Occurrence, total_weeks: usize) -> (f64, f64, f64) {
    let high = 100.0 * counts.highs as f64 / total_weeks as f64;
    let low = 100.0 * counts.lows as f64 / total_weeks as f64;
    (high, low, (high + low) / 2.0)
}

/// Probabilities for all seven days, zero-filled where nothing was observed.
pub fn probability_by_day(
    table: &OccurrenceTable<Weekday>,
    total_weeks: usize,
) -> Result<Vec<DayProbability>, StatsError> {
    check_weeks(total_weeks)?;
    Ok(Weekday::ALL
        .iter()
        .map(|&day| {
            let (high, low, total) = percentages(table.get(&day), total_weeks);
            DayProbability {
                day,
                high,
                low,
                total,
            }
        })
        .collect())
}

/// Probabilities for all 24 hours, zero-filled where nothing was observed.
pub fn probability_by_hour(
    table: &OccurrenceTable<u32>,
    total_weeks: usize,
) -> Result<Vec<HourProbability>, StatsError> {
    check_weeks(total_weeks)?;
    Ok((0..24)
        .map(|hour| {
            let (high, low, total) = percentages(table.get(&hour), total_weeks);
            HourProbability {
                hour,
                high,
                low,
                total,
            }
        })
        .collect())
}

/// Probabilities for every observed (day, hour) combination.
///
/// Only keys present in the table are reported; a combination observed for
/// highs but never for lows still gets a row (with a zero low). Rows come
/// out ordered by day, then hour.
pub fn probability_by_day_hour(
    table: &OccurrenceTable<(Weekday, u32)>,
    total_weeks: usize,
) -> Result<Vec<DayHourProbability>, StatsError> {
    check_weeks(total_weeks)?;
    Ok(table
        .iter()
        .map(|(&(day, hour), &counts)| {
            let (high, low, total) = percentages(counts, total_weeks);
            DayHourProbability {
                day,
                hour,
                high,
                low,
                total,
            }
        })
        .collect())
}
