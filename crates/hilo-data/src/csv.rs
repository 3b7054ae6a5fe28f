//! CSV data loading implementation.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use chrono::NaiveDateTime;
use hilo_core::RawCandle;

use crate::source::DataSource;

/// Loads raw candles from CSV files.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for CsvLoader {
    fn load(&self) -> anyhow::Result<Vec<RawCandle>> {
        load_candles_from_csv(&self.path)
    }
}

/// Parse a timestamp cell: epoch seconds, epoch milliseconds, or
/// "YYYY-MM-DD HH:MM:SS" (interpreted as UTC).
pub fn parse_timestamp(s: &str) -> Option<i64> {
    if let Ok(ts) = s.parse::<f64>() {
        // Millisecond stamps have 13+ digits
        let secs = if ts > 1e12 { ts / 1000.0 } else { ts };
        return Some(secs as i64);
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.and_utc().timestamp())
}

/// Load candles from a CSV file, sorted chronologically.
///
/// Column positions are sniffed from the header row, falling back to the
/// conventional Timestamp,Open,High,Low,Close,Volume layout. Rows with
/// missing or unparseable cells fail the whole load; nothing is defaulted.
pub fn load_candles_from_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RawCandle>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let headers_lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    let ts_col = headers_lower
        .iter()
        .position(|h| h.contains("timestamp") || h == "time")
        .unwrap_or(0);
    let open_col = headers_lower.iter().position(|h| h == "open").unwrap_or(1);
    let high_col = headers_lower.iter().position(|h| h == "high").unwrap_or(2);
    let low_col = headers_lower.iter().position(|h| h == "low").unwrap_or(3);
    let close_col = headers_lower.iter().position(|h| h == "close").unwrap_or(4);
    let volume_col = headers_lower
        .iter()
        .position(|h| h == "volume")
        .unwrap_or(5);

    let mut candles = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let cell = |idx: usize, name: &str| -> anyhow::Result<&str> {
            record
                .get(idx)
                .ok_or_else(|| anyhow!("row {row}: missing {name} column"))
        };

        let ts_str = cell(ts_col, "timestamp")?;
        let t = parse_timestamp(ts_str)
            .ok_or_else(|| anyhow!("row {row}: unparseable timestamp {ts_str:?}"))?;

        let parse_f64 = |idx: usize, name: &str| -> anyhow::Result<f64> {
            cell(idx, name)?
                .parse()
                .with_context(|| format!("row {row}: bad {name} value"))
        };

        candles.push(RawCandle {
            t,
            o: parse_f64(open_col, "open")?,
            h: parse_f64(high_col, "high")?,
            l: parse_f64(low_col, "low")?,
            c: parse_f64(close_col, "close")?,
            v: parse_f64(volume_col, "volume")?,
        });
    }

    analyze_data_gaps(&candles);

    // Sort by timestamp to ensure chronological order
    candles.sort_by_key(|c| c.t);

    Ok(candles)
}

/// Log gap statistics for a candle set.
///
/// Detects the dominant sampling interval and reports how many expected
/// data points are missing between consecutive candles.
pub fn analyze_data_gaps(candles: &[RawCandle]) {
    if candles.len() < 2 {
        log::debug!("not enough data points to analyze gaps");
        return;
    }

    let mut timestamps: Vec<i64> = candles.iter().map(|c| c.t).collect();
    timestamps.sort_unstable();

    let mut intervals: std::collections::HashMap<i64, usize> = std::collections::HashMap::new();
    for window in timestamps.windows(2) {
        *intervals.entry(window[1] - window[0]).or_insert(0) += 1;
    }

    let expected_interval = intervals
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(interval, _)| *interval)
        .unwrap_or(3600);

    let mut total_gaps = 0;
    let mut total_missing = 0;
    for window in timestamps.windows(2) {
        let diff = window[1] - window[0];
        if expected_interval > 0 && diff > expected_interval {
            total_gaps += 1;
            total_missing += diff / expected_interval - 1;
        }
    }

    log::info!(
        "{} data points, expected interval {}s, {} gaps ({} missing points)",
        timestamps.len(),
        expected_interval,
        total_gaps,
        total_missing
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hilo-csv-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert_eq!(parse_timestamp("1704067200"), Some(1704067200));
        assert_eq!(parse_timestamp("1704067200000"), Some(1704067200));
        assert_eq!(parse_timestamp("2024-01-01 00:00:00"), Some(1704067200));
        assert_eq!(parse_timestamp("not a time"), None);
    }

    #[test]
    fn test_load_standard_layout() {
        let path = temp_path("standard.csv");
        std::fs::write(
            &path,
            "Timestamp,Open,High,Low,Close,Volume\n\
             1704070800,102.0,103.0,98.0,99.0,987.0\n\
             1704067200,100.0,105.0,99.0,102.0,1234.5\n",
        )
        .unwrap();

        let candles = load_candles_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(candles.len(), 2);
        // Sorted chronologically regardless of file order
        assert_eq!(candles[0].t, 1704067200);
        assert_eq!(candles[0].h, 105.0);
        assert_eq!(candles[1].t, 1704070800);
    }

    #[test]
    fn test_load_reordered_columns() {
        let path = temp_path("reordered.csv");
        std::fs::write(
            &path,
            "Unix Timestamp,Symbol,Open,High,Low,Close,Volume\n\
             1704067200,BTCUSD,100.0,105.0,99.0,102.0,1234.5\n",
        )
        .unwrap();

        let candles = load_candles_from_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].o, 100.0);
        assert_eq!(candles[0].v, 1234.5);
    }

    #[test]
    fn test_bad_cell_fails_loudly() {
        let path = temp_path("bad-cell.csv");
        std::fs::write(
            &path,
            "Timestamp,Open,High,Low,Close,Volume\n\
             1704067200,100.0,oops,99.0,102.0,1234.5\n",
        )
        .unwrap();

        let result = load_candles_from_csv(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
