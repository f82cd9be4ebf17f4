use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use scrape_core::{extract_title, TitleRecord};

use crate::fetch::Fetcher;

/// Concurrency bound for the parallel runner.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub workers: usize,
}

impl Default for PoolSettings {
    fn default() -> Self {
        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self { workers }
    }
}

/// Outcome of one run: wall time plus the records it collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub records: Vec<TitleRecord>,
}

impl RunSummary {
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Worker id reported by the sequential runner; -1 means "no pool
/// worker", keeping the failure log shape identical in both modes.
const SEQUENTIAL_WORKER_ID: i64 = -1;

fn fetch_failure_line(url: &str, worker: i64, err: &crate::FetchError) -> String {
    format!("Failed to fetch URL: {url} by worker {worker}: {err}")
}

/// One unit of work: fetch, extract, format. A failed fetch is logged
/// with the offending URL and worker id and yields nothing; it never
/// aborts the rest of the run.
async fn scrape_one(fetcher: &dyn Fetcher, worker: i64, url: &str) -> Option<TitleRecord> {
    match fetcher.fetch(url).await {
        Ok(output) => Some(TitleRecord::new(url, extract_title(&output.body))),
        Err(err) => {
            log::error!("{}", fetch_failure_line(url, worker, &err));
            None
        }
    }
}

/// Fetches every URL in order, one at a time. Failed URLs contribute no
/// record; the output preserves input order. Cancellation stops the loop
/// before the next fetch starts.
pub async fn run_sequential(
    fetcher: &dyn Fetcher,
    urls: &[String],
    cancel: &CancellationToken,
) -> RunSummary {
    let started = Instant::now();
    let mut records = Vec::new();

    for url in urls {
        if cancel.is_cancelled() {
            log::info!("Sequential run cancelled with {} records collected", records.len());
            break;
        }
        if let Some(record) = scrape_one(fetcher, SEQUENTIAL_WORKER_ID, url).await {
            records.push(record);
        }
    }

    RunSummary {
        elapsed: started.elapsed(),
        records,
    }
}

/// Fetches every URL concurrently, at most `pool.workers` in flight at
/// once. Records land in arrival order, guarded by a lock that covers
/// only the push. Returns after every spawned unit has finished.
pub async fn run_parallel(
    fetcher: Arc<dyn Fetcher>,
    urls: &[String],
    pool: PoolSettings,
    cancel: CancellationToken,
) -> RunSummary {
    let started = Instant::now();
    let results: Arc<Mutex<Vec<TitleRecord>>> = Arc::new(Mutex::new(Vec::new()));
    let semaphore = Arc::new(Semaphore::new(pool.workers.max(1)));
    let mut tasks = JoinSet::new();

    for (worker, url) in urls.iter().enumerate() {
        let fetcher = Arc::clone(&fetcher);
        let url = url.clone();
        let results = Arc::clone(&results);
        let semaphore = Arc::clone(&semaphore);
        let cancel = cancel.clone();

        tasks.spawn(async move {
            let _permit = match semaphore.acquire().await {
                Ok(permit) => permit,
                Err(_closed) => return,
            };
            if cancel.is_cancelled() {
                log::info!("Worker {worker} skipping {url}: run cancelled");
                return;
            }

            let fetched = tokio::select! {
                record = scrape_one(fetcher.as_ref(), worker as i64, &url) => record,
                () = cancel.cancelled() => {
                    log::info!("Worker {worker} abandoning {url}: run cancelled");
                    None
                }
            };

            if let Some(record) = fetched {
                // Only the append is under the lock; the network phase
                // never holds it.
                results.lock().await.push(record);
            }
        });
    }

    // Barrier join: no record may be read while a worker can still write.
    while tasks.join_next().await.is_some() {}

    let records = std::mem::take(&mut *results.lock().await);
    RunSummary {
        elapsed: started.elapsed(),
        records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;

    #[test]
    fn sequential_failure_line_carries_sentinel_worker_id() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(
            fetch_failure_line("https://a.test", SEQUENTIAL_WORKER_ID, &err),
            "Failed to fetch URL: https://a.test by worker -1: network error: connection refused"
        );
    }

    #[test]
    fn pooled_failure_line_carries_worker_index() {
        let err = FetchError::Network("connection refused".to_string());
        assert_eq!(
            fetch_failure_line("https://a.test", 3, &err),
            "Failed to fetch URL: https://a.test by worker 3: network error: connection refused"
        );
    }
}
