use anyhow::Result;
use clap::Args;
use alphavantage_api::types::{Datatype, Frequency};
use alphavantage_api::{Client, HistoricalQuery};

use crate::output::{print_result, OutputFormat};

#[derive(Args)]
pub struct HistoryArgs {
    /// Stock symbol, e.g. IBM
    pub symbol: String,

    /// Reporting frequency: daily, weekly, monthly
    #[arg(long, default_value = "daily")]
    pub freq: String,

    /// Response format requested from the API: json or csv
    #[arg(long, default_value = "json")]
    pub datatype: String,
}

pub async fn run(args: &HistoryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let freq: Frequency = args.freq.trim().to_uppercase().parse()?;
    let datatype: Datatype = args.datatype.trim().to_lowercase().parse()?;

    let query = HistoricalQuery::new(&args.symbol, freq).with_datatype(datatype);
    let table = client.historical_prices(&query).await?;
    print_result(&table, format)
}
