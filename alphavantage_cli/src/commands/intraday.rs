use anyhow::Result;
use clap::Args;
use alphavantage_api::types::{Interval, OutputSize};
use alphavantage_api::{Client, IntradayQuery};

use crate::output::{print_result, OutputFormat};

#[derive(Args)]
pub struct IntradayArgs {
    /// Stock symbol, e.g. IBM
    pub symbol: String,

    /// Sampling interval: 1min, 5min, 15min, 30min, 60min
    #[arg(long, default_value = "5min")]
    pub interval: String,

    /// Amount of data returned: compact (latest 100 points) or full
    #[arg(long, default_value = "compact")]
    pub output_size: String,
}

pub async fn run(args: &IntradayArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let interval: Interval = args.interval.trim().to_lowercase().parse()?;
    let output_size: OutputSize = args.output_size.trim().to_lowercase().parse()?;

    let query = IntradayQuery::new(&args.symbol, interval).with_output_size(output_size);
    let table = client.intraday_prices(&query).await?;
    print_result(&table, format)
}
