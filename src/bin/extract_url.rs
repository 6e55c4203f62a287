//! Fetch one page and print its extraction result as JSON.
//!
//! Usage: `extract_url <URL>`. Exits non-zero when extraction fails.

use clap::Parser;
use leftover_chef::config::LogFormat;
use leftover_chef::{extract_url, telemetry, HttpFetcher, Options};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "extract_url", version, about = "Extract readable text from a web page")]
struct Args {
    /// Absolute http(s) URL of the page.
    url: String,

    /// Fetch timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    telemetry::init_logging(LogFormat::Text)?;

    let options = Options {
        fetch_timeout: Duration::from_millis(args.timeout_ms),
        ..Options::default()
    };
    let fetcher = HttpFetcher::new(&options)?;
    let result = extract_url(&fetcher, &args.url, &options).await;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    if !result.ok {
        std::process::exit(1);
    }
    Ok(())
}
