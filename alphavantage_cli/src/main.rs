mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use alphavantage_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "stockscreener")]
#[command(about = "Query market data from Alpha Vantage")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API key; falls back to ALPHAVANTAGE_API_KEY, then the demo key
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for symbols by keyword
    Search(commands::search::SearchArgs),
    /// Fetch an intraday OHLCV series
    Intraday(commands::intraday::IntradayArgs),
    /// Fetch a daily/weekly/monthly price series
    History(commands::history::HistoryArgs),
    /// Fetch the latest quote for a symbol
    Quote(commands::quote::QuoteArgs),
    /// Fetch a technical indicator series
    Indicator(commands::indicator::IndicatorArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stockscreener=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("ALPHAVANTAGE_API_KEY").ok())
        .unwrap_or_else(|| "demo".to_string());
    let client = Client::new(Config::new(&api_key))?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Intraday(args) => commands::intraday::run(args, &client, &format).await?,
        Commands::History(args) => commands::history::run(args, &client, &format).await?,
        Commands::Quote(args) => commands::quote::run(args, &client, &format).await?,
        Commands::Indicator(args) => commands::indicator::run(args, &client, &format).await?,
    }

    Ok(())
}
