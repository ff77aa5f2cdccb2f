use crate::error::Result;
use crate::models::{FileRecord, ScanSummary};
use grammers_client::types::{Chat, Media};
use grammers_client::Client;
use std::io::{self, Write};

/// Walk the chat's history newest-first, collecting every message that
/// carries a named document. Unnamed documents and other media are skipped.
pub async fn scan_documents(client: &Client, chat: &Chat, verbose: bool) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();
    let mut seen: usize = 0;

    let mut messages = client.iter_messages(chat);
    while let Some(message) = messages.next().await? {
        seen += 1;
        if let Some(Media::Document(document)) = message.media() {
            let name = document.name();
            if !name.is_empty() {
                summary.push(FileRecord {
                    message_id: message.id(),
                    name: name.to_string(),
                    date: message.date(),
                    size: document.size(),
                });
            }
        }
        if verbose && seen % 500 == 0 {
            print!(
                "\rScanned {} messages, {} files found",
                seen,
                summary.files.len()
            );
            io::stdout().flush()?;
        }
    }
    if verbose && seen >= 500 {
        println!();
    }

    Ok(summary)
}
