//! Request and response types for the Finazon time-series endpoint.

use std::str::FromStr;

use hilo_core::RawCandle;
use serde::Deserialize;

use crate::error::FetchError;

/// Candle sampling interval supported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
    OneDay,
}

impl Interval {
    /// Wire representation used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }

    /// Interval length in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Interval::OneMinute => 60,
            Interval::FiveMinutes => 300,
            Interval::FifteenMinutes => 900,
            Interval::ThirtyMinutes => 1800,
            Interval::OneHour => 3600,
            Interval::FourHours => 14400,
            Interval::OneDay => 86400,
        }
    }
}

impl FromStr for Interval {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::OneMinute),
            "5m" => Ok(Interval::FiveMinutes),
            "15m" => Ok(Interval::FifteenMinutes),
            "30m" => Ok(Interval::ThirtyMinutes),
            "1h" => Ok(Interval::OneHour),
            "4h" => Ok(Interval::FourHours),
            "1d" => Ok(Interval::OneDay),
            other => Err(FetchError::InvalidParameter(format!(
                "unsupported interval {other:?}"
            ))),
        }
    }
}

/// One page of the time-series endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesResponse {
    pub data: Vec<RawCandle>,
}
