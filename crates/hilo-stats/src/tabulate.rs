//! Occurrence tabulation for extremum events.

use std::collections::BTreeMap;

use hilo_core::Weekday;

use crate::extremum::{ExtremumEvent, ExtremumKind};

/// High/low occurrence counts for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occurrence {
    pub highs: u32,
    pub lows: u32,
}

/// Sparse occurrence counts keyed by a report dimension.
///
/// Absent keys mean zero. High and low counts accumulate independently, so
/// a key can carry highs without lows and vice versa.
#[derive(Debug, Clone)]
pub struct OccurrenceTable<K: Ord> {
    counts: BTreeMap<K, Occurrence>,
}

impl<K: Ord> Default for OccurrenceTable<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> OccurrenceTable<K> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one extremum event under a key.
    pub fn record(&mut self, event: &ExtremumEvent, key: K) {
        let entry = self.counts.entry(key).or_default();
        match event.kind {
            ExtremumKind::High => entry.highs += 1,
            ExtremumKind::Low => entry.lows += 1,
        }
    }

    /// Counts for a key, zero when absent.
    pub fn get(&self, key: &K) -> Occurrence {
        self.counts.get(key).copied().unwrap_or_default()
    }

    /// Iterate over observed keys in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Occurrence)> {
        self.counts.iter()
    }

    /// Number of observed keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of high counts across all keys.
    pub fn total_highs(&self) -> u32 {
        self.counts.values().map(|o| o.highs).sum()
    }

    /// Sum of low counts across all keys.
    pub fn total_lows(&self) -> u32 {
        self.counts.values().map(|o| o.lows).sum()
    }
}

/// Tabulate events under a key extractor.
pub fn tabulate<K, F>(events: &[ExtremumEvent], key_fn: F) -> OccurrenceTable<K>
where
    K: Ord + Copy,
    F: Fn(&ExtremumEvent) -> K,
{
    let mut table = OccurrenceTable::new();
    for event in events {
        table.record(event, key_fn(event));
    }
    table
}

/// Key extractor: calendar day only (all hours of a day accumulate).
pub fn by_day(event: &ExtremumEvent) -> Weekday {
    event.day
}

/// Key extractor: hour of day only.
pub fn by_hour(event: &ExtremumEvent) -> u32 {
    event.hour
}

/// Key extractor: joint (day, hour).
pub fn by_day_hour(event: &ExtremumEvent) -> (Weekday, u32) {
    (event.day, event.hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilo_core::WeekKey;

    fn event(week: u32, kind: ExtremumKind, day: Weekday, hour: u32) -> ExtremumEvent {
        ExtremumEvent {
            week: WeekKey::Iso { year: 2024, week },
            kind,
            day,
            hour,
            value: 100.0,
        }
    }

    #[test]
    fn test_independent_high_low_accumulation() {
        let events = vec![
            event(1, ExtremumKind::High, Weekday::Mon, 9),
            event(2, ExtremumKind::High, Weekday::Mon, 9),
            event(1, ExtremumKind::Low, Weekday::Fri, 22),
        ];

        let table = tabulate(&events, by_day_hour);

        let mon9 = table.get(&(Weekday::Mon, 9));
        assert_eq!(mon9.highs, 2);
        assert_eq!(mon9.lows, 0);

        let fri22 = table.get(&(Weekday::Fri, 22));
        assert_eq!(fri22.highs, 0);
        assert_eq!(fri22.lows, 1);
    }

    #[test]
    fn test_absent_key_is_zero() {
        let table = tabulate(&[], by_day);
        assert!(table.is_empty());
        assert_eq!(table.get(&Weekday::Wed), Occurrence::default());
    }

    #[test]
    fn test_day_key_accumulates_across_hours() {
        let events = vec![
            event(1, ExtremumKind::High, Weekday::Mon, 9),
            event(2, ExtremumKind::High, Weekday::Mon, 15),
        ];

        let table = tabulate(&events, by_day);
        assert_eq!(table.get(&Weekday::Mon).highs, 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_totals_equal_event_counts() {
        let events = vec![
            event(1, ExtremumKind::High, Weekday::Mon, 9),
            event(1, ExtremumKind::Low, Weekday::Tue, 4),
            event(2, ExtremumKind::High, Weekday::Sat, 13),
            event(2, ExtremumKind::Low, Weekday::Sun, 2),
        ];

        let table = tabulate(&events, by_hour);
        assert_eq!(table.total_highs(), 2);
        assert_eq!(table.total_lows(), 2);
    }
}
