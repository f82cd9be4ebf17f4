//! Scrape engine: HTTP fetching and sequential/parallel run orchestration.
mod fetch;
mod run;
mod types;

pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use run::{run_parallel, run_sequential, PoolSettings, RunSummary};
pub use types::{FetchError, FetchMetadata, FetchOutput};
