use anyhow::Result;
use clap::Args;
use alphavantage_api::types::Datatype;
use alphavantage_api::{Client, QuoteQuery};

use crate::output::{print_result, OutputFormat};

#[derive(Args)]
pub struct QuoteArgs {
    /// Stock symbol, e.g. IBM
    pub symbol: String,

    /// Response format requested from the API: json or csv
    #[arg(long, default_value = "json")]
    pub datatype: String,
}

pub async fn run(args: &QuoteArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let datatype: Datatype = args.datatype.trim().to_lowercase().parse()?;

    let query = QuoteQuery::new(&args.symbol).with_datatype(datatype);
    let table = client.current_quote(&query).await?;
    print_result(&table, format)
}
