use crate::error::{Result, TgrabError};
use crate::models::FileRecord;
use crate::sanitize::unique_local_name;
use crate::ui::progress::{format_speed, Progress};
use colored::*;
use grammers_client::types::{Chat, Downloadable, Media};
use grammers_client::Client;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Downloaded,
    Skipped,
    Failed,
}

/// A local file of exactly the remote size is assumed complete. Size
/// equality only, no checksum.
pub fn should_skip(local_size: u64, remote_size: i64) -> bool {
    remote_size >= 0 && local_size == remote_size as u64
}

/// Download one file into `dir`, skipping it when an identically sized copy
/// is already there.
pub async fn download_file(
    client: &Client,
    chat: &Chat,
    record: &FileRecord,
    dir: &Path,
) -> Result<Outcome> {
    let local_name = unique_local_name(&record.name, record.message_id);
    let local_path = dir.join(&local_name);

    // Re-fetch the message up front: the skip check wants the current remote
    // size, and the download needs the media anyway.
    let message = client
        .get_messages_by_id(chat, &[record.message_id])
        .await?
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| {
            TgrabError::Other(format!("message {} no longer exists", record.message_id))
        })?;

    let media = message.media().ok_or_else(|| {
        TgrabError::Other(format!(
            "message {} no longer carries media",
            record.message_id
        ))
    })?;

    let remote_size = match &media {
        Media::Document(document) => document.size(),
        _ => record.size,
    };

    if local_path.exists() {
        let local_size = tokio::fs::metadata(&local_path).await?.len();
        if should_skip(local_size, remote_size) {
            println!(
                "{}",
                format!(
                    "Skipping download, local file {} is the same size as remote file.",
                    local_name
                )
                .dimmed()
            );
            return Ok(Outcome::Skipped);
        }
    }

    let started = Instant::now();
    let mut progress = Progress::new(&local_name, remote_size);
    let mut file = File::create(&local_path).await?;
    let mut written: u64 = 0;

    let mut download = client.iter_download(&Downloadable::Media(media));
    while let Some(chunk) = download.next().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        progress.update(written);
    }
    file.flush().await?;
    progress.finish(written);

    match format_speed(written, started.elapsed()) {
        Some(speed) => println!(
            "{}",
            format!("Completed {}. Speed: {}", local_name, speed).green()
        ),
        None => println!(
            "{}",
            format!("Completed {}. Download was too fast to measure speed.", local_name).green()
        ),
    }

    Ok(Outcome::Downloaded)
}
