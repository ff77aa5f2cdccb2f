mod task;

pub use task::{download_file, should_skip, Outcome};

use crate::models::FileRecord;
use colored::*;
use grammers_client::types::Chat;
use grammers_client::Client;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Default, Clone, Copy)]
pub struct DownloadReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run one task per item with at most `limit` in flight at once, gated by a
/// shared counting semaphore. Completion order is arbitrary; a panicked task
/// drops out of the results.
pub async fn run_bounded<T, F, Fut, R>(items: Vec<T>, limit: usize, task: F) -> Vec<R>
where
    T: Send + 'static,
    F: Fn(T) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let mut set = JoinSet::new();

    for item in items {
        let semaphore = semaphore.clone();
        let task = task.clone();
        set.spawn(async move {
            let _permit = semaphore.acquire_owned().await.ok();
            task(item).await
        });
    }

    let mut results = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        if let Ok(result) = joined {
            results.push(result);
        }
    }
    results
}

/// Download every selected file into `dir`. A failed file is reported and
/// counted without touching its siblings; there is no retry.
pub async fn run_downloads(
    client: &Client,
    chat: &Chat,
    files: Vec<FileRecord>,
    dir: &Path,
    limit: usize,
) -> DownloadReport {
    let client = client.clone();
    let chat = chat.clone();
    let dir = dir.to_path_buf();

    let outcomes = run_bounded(files, limit, move |record: FileRecord| {
        let client = client.clone();
        let chat = chat.clone();
        let dir = dir.clone();
        async move {
            match task::download_file(&client, &chat, &record, &dir).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!(
                        "{}",
                        format!("Error downloading {}: {}", record.name, e).red()
                    );
                    Outcome::Failed
                }
            }
        }
    })
    .await;

    let mut report = DownloadReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Downloaded => report.downloaded += 1,
            Outcome::Skipped => report.skipped += 1,
            Outcome::Failed => report.failed += 1,
        }
    }
    report
}
