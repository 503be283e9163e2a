//! Reads a catalog page from stdin and prints its record as JSON.
//!
//! Usage: `scrape_stdin <url> < page.html`
//!
//! Log verbosity follows `RUST_LOG`; logs go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use mal_scraper::scrape_bytes;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: scrape_stdin <url> < page.html");
        return ExitCode::from(2);
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let record = match scrape_bytes(&url, &html) {
        Ok(record) => record,
        Err(err) => {
            tracing::error!(%url, %err, "scrape failed");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&record) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize record: {err}");
            ExitCode::FAILURE
        }
    }
}
