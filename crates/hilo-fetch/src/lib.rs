//! Finazon API client for downloading historical OHLCV candles.
//!
//! Wraps the paginated `time_series` endpoint; candles come back as
//! epoch-stamped `hilo_core::RawCandle` records ready for persistence
//! or localization.

pub mod client;
pub mod error;
pub mod types;

pub use client::{FinazonClient, DEFAULT_BASE_URL};
pub use error::{FetchError, Result};
pub use types::{Interval, TimeSeriesResponse};
