//! Data source abstraction for raw candle records.

use hilo_core::RawCandle;

/// Trait for types that provide raw candle data.
pub trait DataSource {
    fn load(&self) -> anyhow::Result<Vec<RawCandle>>;
}
