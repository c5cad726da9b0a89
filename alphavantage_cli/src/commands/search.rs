use anyhow::Result;
use clap::Args;
use alphavantage_api::{Client, SymbolSearchQuery};

use crate::output::{print_result, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Keywords to match against symbols and company names
    pub keywords: String,
}

pub async fn run(args: &SearchArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let table = client
        .symbol_search(&SymbolSearchQuery::new(&args.keywords))
        .await?;
    print_result(&table, format)
}
