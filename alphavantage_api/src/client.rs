//! HTTP client for the Alpha Vantage market data API.

use std::time::Duration;

use url::Url;

use crate::query::{
    HistoricalQuery, IndicatorQuery, IntradayQuery, Query, QuoteQuery, SymbolSearchQuery,
};
use crate::table::Table;
use crate::types::Datatype;
use crate::Error;

/// Production host.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`Client`]: host and API key. An explicit value
/// rather than module state, so multiple configurations (e.g. different
/// keys) can coexist in one process.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
}

impl Config {
    /// Configuration for the production host with the given API key.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Overrides the host. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

/// Asynchronous client for the Alpha Vantage `/query` endpoint.
///
/// Every operation is a GET against the single `/query` path,
/// differentiated only by the `function` parameter. The underlying
/// `reqwest::Client` reuses connections across sequential calls; no
/// retries are attempted.
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(&format!("{}/query", self.config.base_url)).map_err(|e| {
            tracing::error!("invalid base URL: {}", e);
            Error::InvalidInput(format!("invalid base URL: {e}"))
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut()
            .append_pair("apikey", &self.config.api_key);
        Ok(url)
    }

    /// Validates the query, performs the GET, and returns the body text.
    /// Validation failures surface before any request is sent.
    async fn get_raw(&self, query: &impl Query) -> Result<String, Error> {
        query.validate()?;
        let url = self.endpoint(query)?;
        tracing::debug!(url = %url, "sending request");
        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }
        Ok(body)
    }

    /// Searches for symbols matching free-text keywords.
    pub async fn symbol_search(&self, query: &SymbolSearchQuery) -> Result<Table, Error> {
        let body = self.get_raw(query).await?;
        Table::from_match_list(&body)
    }

    /// Fetches an intraday OHLCV series, one row per timestamp.
    pub async fn intraday_prices(&self, query: &IntradayQuery) -> Result<Table, Error> {
        let body = self.get_raw(query).await?;
        Table::from_time_series(&body, true)
    }

    /// Fetches a daily/weekly/monthly price series. CSV responses are
    /// indexed by their `timestamp` column; JSON labels pass through
    /// unrenamed.
    pub async fn historical_prices(&self, query: &HistoricalQuery) -> Result<Table, Error> {
        let body = self.get_raw(query).await?;
        match query.datatype {
            Datatype::Json => Table::from_time_series(&body, false),
            Datatype::Csv => Table::from_csv(&body, Some("timestamp")),
        }
    }

    /// Fetches the latest price and volume for a symbol, indexed by the
    /// `symbol` column.
    pub async fn current_quote(&self, query: &QuoteQuery) -> Result<Table, Error> {
        let body = self.get_raw(query).await?;
        match query.datatype {
            Datatype::Json => Table::from_quote_object(&body, Some("symbol")),
            Datatype::Csv => Table::from_csv(&body, Some("symbol")),
        }
    }

    /// Fetches a technical indicator series for a symbol.
    pub async fn technical_indicator(&self, query: &IndicatorQuery) -> Result<Table, Error> {
        let body = self.get_raw(query).await?;
        match query.datatype {
            Datatype::Json => Table::from_time_series(&body, false),
            Datatype::Csv => Table::from_csv(&body, None),
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
