//! Average volume by hour of day.

use std::collections::BTreeMap;

use hilo_core::Candle;

/// Mean traded volume per local hour, over the whole candle set.
///
/// Computed regardless of week boundaries. Hours absent from the input are
/// omitted, not zero-filled.
pub fn average_volume_by_hour(candles: &[Candle]) -> BTreeMap<u32, f64> {
    let mut sums: BTreeMap<u32, (f64, u32)> = BTreeMap::new();
    for candle in candles {
        let entry = sums.entry(candle.hour()).or_insert((0.0, 0));
        entry.0 += candle.volume;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(hour, (sum, count))| (hour, sum / count as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candle(d: u32, hour: u32, volume: f64) -> Candle {
        let local = NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        Candle::new(local.and_utc().timestamp(), 1.0, 2.0, 0.5, 1.5, volume, local)
    }

    #[test]
    fn test_average_per_observed_hour() {
        let candles = vec![
            candle(1, 9, 100.0),
            candle(2, 9, 300.0),
            candle(1, 14, 50.0),
        ];

        let volumes = average_volume_by_hour(&candles);
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[&9], 200.0);
        assert_eq!(volumes[&14], 50.0);
    }

    #[test]
    fn test_absent_hours_omitted() {
        let volumes = average_volume_by_hour(&[candle(1, 9, 100.0)]);
        assert!(!volumes.contains_key(&10));
        assert!(average_volume_by_hour(&[]).is_empty());
    }
}
