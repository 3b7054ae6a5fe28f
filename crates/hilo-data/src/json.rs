//! JSON candle file loading and saving.
//!
//! The fetch command persists raw candles as a JSON array; analysis reads
//! the same format back.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use hilo_core::RawCandle;

use crate::source::DataSource;

/// Loads raw candles from a JSON file.
pub struct JsonLoader {
    path: PathBuf,
}

impl JsonLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for JsonLoader {
    fn load(&self) -> anyhow::Result<Vec<RawCandle>> {
        load_candles_from_json(&self.path)
    }
}

/// Load raw candles from a JSON array file.
pub fn load_candles_from_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<RawCandle>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let candles: Vec<RawCandle> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    log::debug!("loaded {} candles from {}", candles.len(), path.display());
    Ok(candles)
}

/// Write raw candles to a JSON file, pretty-printed.
pub fn save_candles_to_json<P: AsRef<Path>>(candles: &[RawCandle], path: P) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), candles)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
