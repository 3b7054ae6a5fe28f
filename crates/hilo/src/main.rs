//! hilo - weekly high/low timing analysis for OHLCV candles.

mod render;

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use hilo_config::Config;
use hilo_core::WeekPolicy;
use hilo_data::{
    check_candles, load_candles_from_csv, load_candles_from_json, localize_candles,
    parse_timezone, save_candles_to_json,
};
use hilo_fetch::{FinazonClient, Interval};
use hilo_stats::{analyze, ReportConfig};

fn print_usage() {
    eprintln!("Usage: hilo <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  fetch    Download candles from Finazon and save them as JSON");
    eprintln!("  analyze  Run the weekly high/low analysis on a data file");
    eprintln!();
    eprintln!("Fetch options:");
    eprintln!("  --pages <n>     Number of pages to request (default 10)");
    eprintln!("  --out <file>    Output file (default from config)");
    eprintln!();
    eprintln!("Analyze options:");
    eprintln!("  --data <file>   Candle file, .json or .csv (default from config)");
    eprintln!("  --policy <p>    Week grouping: iso or monday (default from config)");
    eprintln!("  --top <n>       Slots to keep per day in the frequency table");
    eprintln!();
    eprintln!("Configuration is read from ./hilo.toml or ~/.config/hilo/config.toml.");
}

async fn run_fetch(config: &Config, args: &[String]) -> Result<()> {
    let mut pages: u32 = 10;
    let mut out = config.general.data_file.clone();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--pages" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| anyhow!("--pages needs a value"))?;
                pages = value.parse().with_context(|| format!("bad page count {value:?}"))?;
            }
            "--out" => {
                i += 1;
                out = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--out needs a value"))?
                    .clone();
            }
            other => bail!("unknown fetch option {other:?}"),
        }
        i += 1;
    }

    if config.api.api_key.is_empty() {
        bail!("no API key configured; set api.api_key in hilo.toml");
    }

    let interval: Interval = config.general.interval.parse()?;
    let client = FinazonClient::new(config.api.api_key.as_str())
        .with_base_url(config.api.base_url.as_str())
        .with_page_delay_ms(config.api.page_delay_ms);

    log::info!(
        "fetching {} pages of {} {} candles",
        pages,
        config.general.symbol,
        config.general.interval
    );
    let candles = client
        .fetch_pages(&config.general.symbol, interval, pages, config.api.page_size)
        .await?;

    save_candles_to_json(&candles, &out)?;
    println!("Saved {} candles to {out}", candles.len());
    Ok(())
}

fn run_analyze(config: &Config, args: &[String]) -> Result<()> {
    let mut data_file = config.general.data_file.clone();
    let mut policy_label = config.analysis.week_policy.clone();
    let mut top = config.analysis.top_hours_per_day;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--data" => {
                i += 1;
                data_file = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--data needs a value"))?
                    .clone();
            }
            "--policy" => {
                i += 1;
                policy_label = args
                    .get(i)
                    .ok_or_else(|| anyhow!("--policy needs a value"))?
                    .clone();
            }
            "--top" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| anyhow!("--top needs a value"))?;
                top = value.parse().with_context(|| format!("bad top count {value:?}"))?;
            }
            other => bail!("unknown analyze option {other:?}"),
        }
        i += 1;
    }

    let policy = WeekPolicy::from_label(&policy_label)
        .ok_or_else(|| anyhow!("unknown week policy {policy_label:?}, expected iso or monday"))?;

    let raw = match Path::new(&data_file).extension().and_then(|e| e.to_str()) {
        Some("csv") => load_candles_from_csv(&data_file)?,
        _ => load_candles_from_json(&data_file)?,
    };
    check_candles(&raw)?;

    let tz = parse_timezone(&config.analysis.timezone)?;
    let candles = localize_candles(&raw, tz)?;
    log::info!(
        "analyzing {} candles in {} with {} grouping",
        candles.len(),
        config.analysis.timezone,
        policy.label()
    );

    let report_config = ReportConfig {
        policy,
        top_hours_per_day: top,
    };
    let report = analyze(&candles, &report_config)?;
    render::print_report(&config.general.symbol, &report);
    Ok(())
}

async fn run() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        bail!("no command given");
    };

    let config = Config::load_default();

    match command.as_str() {
        "fetch" => run_fetch(&config, &args[1..]).await,
        "analyze" => run_analyze(&config, &args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command {other:?}");
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
