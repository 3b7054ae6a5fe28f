//! One-shot weekly analysis over a candle set.

use std::collections::BTreeMap;

use hilo_core::{partition_weeks, Candle, WeekPolicy};
use serde::Serialize;

use crate::error::StatsError;
use crate::extremum::{locate_extrema, ExtremumEvent};
use crate::probability::{
    probability_by_day, probability_by_day_hour, probability_by_hour, DayHourProbability,
    DayProbability, HourProbability,
};
use crate::rank::top_per_day;
use crate::range::{range_summary, weekly_ranges, RangeSummary, WeeklyRange};
use crate::tabulate::{by_day, by_day_hour, by_hour, tabulate};
use crate::volume::average_volume_by_hour;

/// Parameters for [`analyze`].
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Week partitioning policy.
    pub policy: WeekPolicy,
    /// How many (day, hour) rows to keep per day in the frequency table.
    pub top_hours_per_day: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            policy: WeekPolicy::IsoWeek,
            top_hours_per_day: 5,
        }
    }
}

/// Full result of one analysis pass.
///
/// Built fresh per [`analyze`] call and owned by the caller; nothing in the
/// engine retains or mutates it afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    /// Number of non-empty week windows the probabilities are relative to.
    pub total_weeks: usize,
    /// Day-of-week probabilities, all seven days.
    pub by_day: Vec<DayProbability>,
    /// Hour-of-day probabilities, all 24 hours.
    pub by_hour: Vec<HourProbability>,
    /// Top (day, hour) combinations per day, ranked by total probability.
    pub frequent_day_hours: Vec<DayHourProbability>,
    /// High, low and range of every week window.
    pub ranges: Vec<WeeklyRange>,
    /// Mean and median of the weekly ranges.
    pub range_summary: RangeSummary,
    /// Mean volume per observed local hour.
    pub volume_by_hour: BTreeMap<u32, f64>,
}

/// Run the whole pipeline once over `candles`.
///
/// Candles need not be pre-sorted; the partitioner orders each window.
/// Fails with `InsufficientData` when the input holds no week window at
/// all (i.e. it is empty).
pub fn analyze(candles: &[Candle], config: &ReportConfig) -> Result<WeeklyReport, StatsError> {
    let windows = partition_weeks(candles, config.policy);
    let total_weeks = windows.len();
    if total_weeks == 0 {
        return Err(StatsError::InsufficientData);
    }

    let mut events: Vec<ExtremumEvent> = Vec::with_capacity(total_weeks * 2);
    for (&week, window) in &windows {
        let extrema = locate_extrema(week, window)?;
        events.push(extrema.high);
        events.push(extrema.low);
    }

    let by_day = probability_by_day(&tabulate(&events, by_day), total_weeks)?;
    let by_hour = probability_by_hour(&tabulate(&events, by_hour), total_weeks)?;
    let day_hour_rows = probability_by_day_hour(&tabulate(&events, by_day_hour), total_weeks)?;
    let frequent_day_hours = top_per_day(&day_hour_rows, config.top_hours_per_day)?;

    let ranges = weekly_ranges(&windows);
    let summary = range_summary(&ranges).ok_or(StatsError::InsufficientData)?;

    Ok(WeeklyReport {
        total_weeks,
        by_day,
        by_hour,
        frequent_day_hours,
        ranges,
        range_summary: summary,
        volume_by_hour: average_volume_by_hour(candles),
    })
}
