//! Week windows and the partitioning policies.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::candle::Candle;

/// How candles are assigned to week windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekPolicy {
    /// ISO 8601 week numbering (week 1 contains the year's first Thursday).
    IsoWeek,
    /// Calendar weeks anchored at the Monday on or before each candle.
    MondayAnchored,
}

impl WeekPolicy {
    /// Returns the config label for this policy.
    pub fn label(&self) -> &'static str {
        match self {
            WeekPolicy::IsoWeek => "iso",
            WeekPolicy::MondayAnchored => "monday",
        }
    }

    /// Parse a config label ("iso" or "monday").
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "iso" => Some(WeekPolicy::IsoWeek),
            "monday" => Some(WeekPolicy::MondayAnchored),
            _ => None,
        }
    }
}

/// Key identifying one week window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeekKey {
    /// ISO (year, week) pair.
    Iso { year: i32, week: u32 },
    /// Monday date the window starts on.
    Start(NaiveDate),
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekKey::Iso { year, week } => write!(f, "{year}-W{week:02}"),
            WeekKey::Start(date) => write!(f, "{date}"),
        }
    }
}

/// Compute the week key of one candle under a policy.
pub fn week_key(candle: &Candle, policy: WeekPolicy) -> WeekKey {
    let date = candle.local_time.date();
    match policy {
        WeekPolicy::IsoWeek => {
            let iso = date.iso_week();
            WeekKey::Iso {
                year: iso.year(),
                week: iso.week(),
            }
        }
        WeekPolicy::MondayAnchored => {
            let back = date.weekday().num_days_from_monday() as i64;
            WeekKey::Start(date - Duration::days(back))
        }
    }
}

/// Partition candles into non-overlapping week windows.
///
/// Input order does not matter: each window is sorted chronologically
/// (stable sort) so downstream tie-breaks are well defined. Empty input
/// yields an empty map; windows with no candles are never materialized.
pub fn partition_weeks(candles: &[Candle], policy: WeekPolicy) -> BTreeMap<WeekKey, Vec<Candle>> {
    let mut windows: BTreeMap<WeekKey, Vec<Candle>> = BTreeMap::new();
    for candle in candles {
        windows.entry(week_key(candle, policy)).or_default().push(*candle);
    }
    for window in windows.values_mut() {
        window.sort_by_key(|c| c.timestamp);
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(date: NaiveDate, hour: u32) -> Candle {
        let local = date.and_hms_opt(hour, 0, 0).unwrap();
        Candle::new(local.and_utc().timestamp(), 1.0, 2.0, 0.5, 1.5, 10.0, local)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_policy_labels() {
        assert_eq!(WeekPolicy::from_label("iso"), Some(WeekPolicy::IsoWeek));
        assert_eq!(
            WeekPolicy::from_label("monday"),
            Some(WeekPolicy::MondayAnchored)
        );
        assert_eq!(WeekPolicy::from_label("sunday"), None);
        assert_eq!(WeekPolicy::IsoWeek.label(), "iso");
    }

    #[test]
    fn test_iso_week_keys() {
        // 2024-01-01 (Mon) through 2024-01-07 (Sun) are ISO week 1
        let key = week_key(&candle(day(2024, 1, 7), 12), WeekPolicy::IsoWeek);
        assert_eq!(key, WeekKey::Iso { year: 2024, week: 1 });

        let key = week_key(&candle(day(2024, 1, 8), 0), WeekPolicy::IsoWeek);
        assert_eq!(key, WeekKey::Iso { year: 2024, week: 2 });
    }

    #[test]
    fn test_iso_week_year_boundary() {
        // 2024-12-30 is a Monday and belongs to ISO week 1 of 2025
        let key = week_key(&candle(day(2024, 12, 30), 0), WeekPolicy::IsoWeek);
        assert_eq!(key, WeekKey::Iso { year: 2025, week: 1 });
    }

    #[test]
    fn test_monday_anchor() {
        // Sunday maps back to the Monday six days earlier
        let key = week_key(&candle(day(2024, 1, 7), 12), WeekPolicy::MondayAnchored);
        assert_eq!(key, WeekKey::Start(day(2024, 1, 1)));

        // A Monday anchors to itself
        let key = week_key(&candle(day(2024, 1, 8), 0), WeekPolicy::MondayAnchored);
        assert_eq!(key, WeekKey::Start(day(2024, 1, 8)));
    }

    #[test]
    fn test_partition_groups_and_sorts() {
        // Unsorted input spanning two weeks
        let candles = vec![
            candle(day(2024, 1, 9), 5),
            candle(day(2024, 1, 2), 17),
            candle(day(2024, 1, 8), 0),
            candle(day(2024, 1, 1), 9),
        ];

        let windows = partition_weeks(&candles, WeekPolicy::IsoWeek);
        assert_eq!(windows.len(), 2);

        let week1 = &windows[&WeekKey::Iso { year: 2024, week: 1 }];
        let week2 = &windows[&WeekKey::Iso { year: 2024, week: 2 }];
        assert_eq!(week1.len(), 2);
        assert_eq!(week2.len(), 2);

        // Each window is chronologically sorted
        assert!(week1[0].timestamp < week1[1].timestamp);
        assert!(week2[0].timestamp < week2[1].timestamp);

        // Every candle landed in exactly one window
        assert_eq!(week1.len() + week2.len(), candles.len());
    }

    #[test]
    fn test_partition_empty_input() {
        let windows = partition_weeks(&[], WeekPolicy::IsoWeek);
        assert!(windows.is_empty());
    }

    #[test]
    fn test_week_key_display() {
        let iso = WeekKey::Iso { year: 2024, week: 5 };
        assert_eq!(iso.to_string(), "2024-W05");
        let start = WeekKey::Start(day(2024, 1, 29));
        assert_eq!(start.to_string(), "2024-01-29");
    }
}
