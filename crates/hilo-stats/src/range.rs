//! Weekly price-range statistics.

use std::collections::BTreeMap;

use hilo_core::{Candle, WeekKey};
use serde::Serialize;

/// High, low and high-low range of one week window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyRange {
    pub week: WeekKey,
    pub high: f64,
    pub low: f64,
    pub range: f64,
}

/// Mean and median of the weekly ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSummary {
    pub mean: f64,
    pub median: f64,
}

/// Compute the high-low range of every week window.
pub fn weekly_ranges(windows: &BTreeMap<WeekKey, Vec<Candle>>) -> Vec<WeeklyRange> {
    windows
        .iter()
        .filter(|(_, candles)| !candles.is_empty())
        .map(|(&week, candles)| {
            let high = candles.iter().map(|c| c.high).fold(f64::MIN, f64::max);
            let low = candles.iter().map(|c| c.low).fold(f64::MAX, f64::min);
            WeeklyRange {
                week,
                high,
                low,
                range: high - low,
            }
        })
        .collect()
}

/// Arithmetic mean; `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard median: the average of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Summarize a set of weekly ranges; `None` for empty input.
pub fn range_summary(ranges: &[WeeklyRange]) -> Option<RangeSummary> {
    let values: Vec<f64> = ranges.iter().map(|r| r.range).collect();
    Some(RangeSummary {
        mean: mean(&values)?,
        median: median(&values)?,
    })
}
