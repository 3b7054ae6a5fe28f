//! Candle loading and localization.
//!
//! Raw candles come in as epoch-stamped OHLCV records, from a JSON file
//! (the fetch output format) or CSV. The `localize` step converts them
//! into `hilo_core::Candle`s annotated with local calendar day and hour,
//! which is what the statistics engine consumes.

pub mod csv;
pub mod json;
pub mod localize;
pub mod source;
pub mod validation;

pub use crate::csv::{load_candles_from_csv, CsvLoader};
pub use json::{load_candles_from_json, save_candles_to_json, JsonLoader};
pub use localize::{localize_candle, localize_candles, parse_timezone};
pub use source::DataSource;
pub use validation::{check_candles, validate_raw_candle};
