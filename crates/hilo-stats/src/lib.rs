//! Weekly extremum statistics over OHLCV candles.
//!
//! Given candles localized to the analysis timezone, this crate answers
//! "when inside the week do highs, lows and volume tend to occur":
//!
//! 1. Partition candles into week windows (`hilo_core::partition_weeks`)
//! 2. Locate each window's high and low (`locate_extrema`)
//! 3. Tabulate (day, hour) occurrences (`tabulate`)
//! 4. Normalize counts into percentages of total weeks (`probability_*`)
//! 5. Rank and truncate (`top_per_day`, `top_overall`)
//!
//! Range and volume statistics (`weekly_ranges`, `average_volume_by_hour`)
//! branch off the same windows. Everything here is pure and synchronous;
//! loading and localization live in `hilo-data`.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use hilo_stats::{analyze, ReportConfig};
//!
//! let report = analyze(&candles, &ReportConfig::default())?;
//! for row in &report.by_day {
//!     println!("{}: {:.2}%", row.day, row.total);
//! }
//! ```

pub mod error;
pub mod extremum;
pub mod probability;
pub mod rank;
pub mod range;
pub mod report;
pub mod tabulate;
pub mod volume;

pub use error::StatsError;
pub use extremum::{locate_extrema, ExtremumEvent, ExtremumKind, WeekExtrema};
pub use probability::{
    probability_by_day, probability_by_day_hour, probability_by_hour, DayHourProbability,
    DayProbability, HourProbability,
};
pub use rank::{top_overall, top_per_day};
pub use range::{mean, median, range_summary, weekly_ranges, RangeSummary, WeeklyRange};
pub use report::{analyze, ReportConfig, WeeklyReport};
pub use tabulate::{by_day, by_day_hour, by_hour, tabulate, Occurrence, OccurrenceTable};
pub use volume::average_volume_by_hour;
