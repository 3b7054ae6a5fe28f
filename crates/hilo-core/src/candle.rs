//! Candle data structures for OHLCV data.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::weekday::Weekday;

/// One OHLCV record as fetched from the market-data API, not yet localized.
///
/// Field names follow the Finazon time-series payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCandle {
    /// Open time in epoch seconds (UTC).
    pub t: i64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
    pub v: f64,
}

/// One OHLCV candle, localized to the analysis timezone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Open time in epoch seconds (UTC).
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    /// Calendar day of `local_time`.
    pub day: Weekday,
    /// Open time in the analysis timezone.
    pub local_time: NaiveDateTime,
}

impl Candle {
    /// Create a candle. `day` is derived from `local_time` here and nowhere
    /// else, so every downstream consumer sees consistent calendar fields.
    pub fn new(
        timestamp: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        local_time: NaiveDateTime,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            day: Weekday::from_chrono(local_time.weekday()),
            local_time,
        }
    }

    /// Local hour of day (0..=23).
    pub fn hour(&self) -> u32 {
        self.local_time.hour()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_day_derived_from_local_time() {
        // 2024-01-01 is a Monday, 2024-01-07 a Sunday
        let mon = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let sun = NaiveDate::from_ymd_opt(2024, 1, 7)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();

        let c1 = Candle::new(mon.and_utc().timestamp(), 1.0, 2.0, 0.5, 1.5, 10.0, mon);
        let c2 = Candle::new(sun.and_utc().timestamp(), 1.0, 2.0, 0.5, 1.5, 10.0, sun);

        assert_eq!(c1.day, Weekday::Mon);
        assert_eq!(c1.hour(), 9);
        assert_eq!(c2.day, Weekday::Sun);
        assert_eq!(c2.hour(), 23);
    }
}
