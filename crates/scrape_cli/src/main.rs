//! Fetches a fixed URL list once sequentially and once with a bounded
//! worker pool, then prints a timing and result comparison.

use std::sync::Arc;

use anyhow::Result;
use scrape_engine::{
    run_parallel, run_sequential, FetchSettings, PoolSettings, ReqwestFetcher, RunSummary,
};
use scrape_logging::LogDestination;
use tokio_util::sync::CancellationToken;

const URLS: &[&str] = &[
    "https://en.wikipedia.org/wiki/Main_Page",
    "https://openweathermap.org",
    "http://quotes.toscrape.com",
    "http://books.toscrape.com",
    "https://newsapi.org",
];

#[tokio::main]
async fn main() -> Result<()> {
    scrape_logging::initialize(LogDestination::Terminal);

    let urls: Vec<String> = URLS.iter().map(|url| url.to_string()).collect();
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default())?);
    let pool = PoolSettings::default();
    log::info!("Scraping {} URLs with up to {} workers", urls.len(), pool.workers);

    // Ctrl-C stops dispatch and abandons in-flight fetches.
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupt received, cancelling outstanding fetches");
                cancel.cancel();
            }
        }
    });

    let sequential = run_sequential(fetcher.as_ref(), &urls, &cancel).await;
    println!(
        "Time taken for sequential scraping: {} seconds.",
        sequential.elapsed.as_secs_f64()
    );

    let parallel = run_parallel(fetcher, &urls, pool, cancel).await;
    println!(
        "Time taken for parallel scraping: {} seconds.",
        parallel.elapsed.as_secs_f64()
    );

    print_comparison(&sequential, &parallel);
    Ok(())
}

fn print_comparison(sequential: &RunSummary, parallel: &RunSummary) {
    println!();
    println!("Sequential scraping fetched {} results.", sequential.count());
    println!("Parallel scraping fetched {} results.", parallel.count());

    println!();
    println!("Titles fetched from parallel scraping:");
    for record in &parallel.records {
        println!("{record}");
    }
}
