//! Core types for the hilo workspace.
//!
//! This crate provides the fundamental data structures shared by every
//! other crate:
//! - `RawCandle` - OHLCV record as fetched, epoch-stamped
//! - `Candle` - localized candle with derived calendar fields
//! - `Weekday` - Monday-first day-of-week labels
//! - `WeekKey` / `WeekPolicy` - week windows and `partition_weeks`

pub mod candle;
pub mod week;
pub mod weekday;

pub use candle::{Candle, RawCandle};
pub use week::{partition_weeks, week_key, WeekKey, WeekPolicy};
pub use weekday::Weekday;
