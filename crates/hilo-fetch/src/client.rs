//! HTTP client for the Finazon time-series API.

use std::time::Duration;

use hilo_core::RawCandle;
use reqwest::Client;

use crate::error::{FetchError, Result};
use crate::types::{Interval, TimeSeriesResponse};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.finazon.io/latest/finazon";

/// Pause between paginated requests, to stay under the API rate limit.
const DEFAULT_PAGE_DELAY_MS: u64 = 250;

/// Client for fetching historical candles from Finazon.
#[derive(Debug, Clone)]
pub struct FinazonClient {
    http: Client,
    base_url: String,
    api_key: String,
    page_delay_ms: u64,
}

impl FinazonClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
        }
    }

    /// Override the base URL, mainly for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the delay between paginated requests.
    pub fn with_page_delay_ms(mut self, delay_ms: u64) -> Self {
        self.page_delay_ms = delay_ms;
        self
    }

    /// Endpoint for crypto OHLCV candles under the configured base URL.
    fn time_series_url(&self) -> String {
        format!("{}/crypto/time_series", self.base_url)
    }

    /// Fetch one page of candles for a symbol.
    ///
    /// `page` is zero-based; `page_size` must be in 1..=1000.
    pub async fn time_series(
        &self,
        symbol: &str,
        interval: Interval,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RawCandle>> {
        if !(1..=1000).contains(&page_size) {
            return Err(FetchError::InvalidParameter(format!(
                "page_size must be in 1..=1000, got {page_size}"
            )));
        }

        let url = self.time_series_url();
        let page_size_str = page_size.to_string();
        let page_str = page.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("ticker", symbol),
                ("interval", interval.as_str()),
                ("page", page_str.as_str()),
                ("page_size", page_size_str.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api {
                status: status.as_u16(),
            });
        }

        let body: TimeSeriesResponse = response.json().await?;
        log::debug!(
            "fetched page {page} for {symbol}: {} candles",
            body.data.len()
        );
        Ok(body.data)
    }

    /// Fetch up to `pages` pages of candles, stopping early when the API
    /// returns an empty page. Pages are paced by the configured delay.
    pub async fn fetch_pages(
        &self,
        symbol: &str,
        interval: Interval,
        pages: u32,
        page_size: u32,
    ) -> Result<Vec<RawCandle>> {
        let mut candles = Vec::new();

        for page in 0..pages {
            let batch = self.time_series(symbol, interval, page, page_size).await?;
            if batch.is_empty() {
                log::info!("page {page} is empty, stopping pagination");
                break;
            }
            candles.extend(batch);

            if page + 1 < pages && self.page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.page_delay_ms)).await;
            }
        }

        log::info!("fetched {} candles for {symbol}", candles.len());
        Ok(candles)
    }
}
