//! Sanity checks for raw candle data.

use anyhow::bail;
use hilo_core::RawCandle;

/// Whether a single raw candle is well-formed.
///
/// Requires finite prices and volume, a positive timestamp, a high at or
/// above the low, positive open/low/close, and non-negative volume.
pub fn validate_raw_candle(candle: &RawCandle) -> bool {
    let prices_finite = candle.o.is_finite()
        && candle.h.is_finite()
        && candle.l.is_finite()
        && candle.c.is_finite()
        && candle.v.is_finite();

    prices_finite
        && candle.t > 0
        && candle.h >= candle.l
        && candle.o > 0.0
        && candle.l > 0.0
        && candle.c > 0.0
        && candle.v >= 0.0
}

/// Validate a whole candle set, failing on the first malformed record.
pub fn check_candles(candles: &[RawCandle]) -> anyhow::Result<()> {
    for (i, candle) in candles.iter().enumerate() {
        if !validate_raw_candle(candle) {
            bail!(
                "malformed candle at index {i}: t={} o={} h={} l={} c={} v={}",
                candle.t,
                candle.o,
                candle.h,
                candle.l,
                candle.c,
                candle.v
            );
        }
    }
    Ok(())
}
