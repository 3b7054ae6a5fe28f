//! Timezone localization of raw candles.
//!
//! The analysis runs on calendar fields (day of week, hour of day) in a
//! target timezone. The conversion happens here, once, before candles
//! enter the statistics engine, so every downstream component sees the
//! same derived fields.

use anyhow::anyhow;
use chrono::DateTime;
use chrono_tz::Tz;
use hilo_core::{Candle, RawCandle};

/// Resolve a timezone name like "Australia/Adelaide".
pub fn parse_timezone(name: &str) -> anyhow::Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| anyhow!("unknown timezone {name:?}"))
}

/// Localize one raw candle into the target timezone.
///
/// Fails only for timestamps outside chrono's representable range.
pub fn localize_candle(raw: &RawCandle, tz: Tz) -> anyhow::Result<Candle> {
    let utc = DateTime::from_timestamp(raw.t, 0)
        .ok_or_else(|| anyhow!("timestamp {} out of range", raw.t))?;
    let local = utc.with_timezone(&tz).naive_local();
    Ok(Candle::new(raw.t, raw.o, raw.h, raw.l, raw.c, raw.v, local))
}

/// Convert raw epoch-stamped candles into localized `Candle`s.
pub fn localize_candles(raw: &[RawCandle], tz: Tz) -> anyhow::Result<Vec<Candle>> {
    raw.iter().map(|r| localize_candle(r, tz)).collect()
}
