use anyhow::Result;
use clap::Args;
use alphavantage_api::types::{Datatype, Indicator, IndicatorInterval, SeriesType};
use alphavantage_api::{Client, IndicatorQuery};

use crate::output::{print_result, OutputFormat};

#[derive(Args)]
pub struct IndicatorArgs {
    /// Indicator function: SMA, EMA, VWAP
    pub indicator: String,

    /// Stock symbol, e.g. IBM
    pub symbol: String,

    /// Interval: 1min, 5min, 15min, 30min, 60min, daily, weekly, monthly
    #[arg(long, default_value = "daily")]
    pub interval: String,

    /// Number of data points per indicator value
    #[arg(long, default_value = "10")]
    pub time_period: u32,

    /// Price series the indicator is computed over: close, open, high, low
    #[arg(long, default_value = "close")]
    pub series_type: String,

    /// Response format requested from the API: json or csv
    #[arg(long, default_value = "json")]
    pub datatype: String,
}

pub async fn run(args: &IndicatorArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let indicator: Indicator = args.indicator.trim().to_uppercase().parse()?;
    let interval: IndicatorInterval = args.interval.trim().to_lowercase().parse()?;
    let series_type: SeriesType = args.series_type.trim().to_lowercase().parse()?;
    let datatype: Datatype = args.datatype.trim().to_lowercase().parse()?;

    let query = IndicatorQuery::new(
        indicator,
        &args.symbol,
        interval,
        args.time_period,
        series_type,
    )
    .with_datatype(datatype);
    let table = client.technical_indicator(&query).await?;
    print_result(&table, format)
}
