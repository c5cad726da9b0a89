//! Client for the Alpha Vantage market data API.
//!
//! Builds validated GET requests against the `/query` endpoint and reshapes
//! the JSON/CSV payloads into [`Table`] values.

mod client;
mod errors;
mod query;
pub mod table;
pub mod types;
pub mod validation;

pub use self::client::{Client, Config, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    HistoricalQuery, IndicatorQuery, IntradayQuery, Query, QuoteQuery, SymbolSearchQuery,
};
pub use self::table::{Row, Table};
