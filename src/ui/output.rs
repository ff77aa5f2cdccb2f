use crate::download::DownloadReport;
use crate::models::ScanSummary;
use crate::telegram::client::chat_title;
use colored::*;
use grammers_client::types::Chat;

/// Dimmed diagnostic line, shown only in verbose mode.
pub fn verbose_log(message: &str) {
    eprintln!("{}", format!("[tgrab] {}", message).dimmed());
}

pub fn format_mb_gb(bytes: i64) -> String {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    let gb = mb / 1024.0;
    format!("{:.2} MB ({:.2} GB)", mb, gb)
}

pub fn print_dialogs(chats: &[Chat]) {
    for (i, chat) in chats.iter().enumerate() {
        println!("{}. {}", i + 1, chat_title(chat));
    }
}

pub fn print_scan(summary: &ScanSummary) {
    for file in &summary.files {
        println!(
            "ID: {}, Name: {}, Date: {}",
            file.message_id,
            file.name,
            file.date.format("%Y-%m-%d %H:%M:%S")
        );
    }
    println!("\nTotal number of files found: {}", summary.files.len());
    println!("Total size: {}", format_mb_gb(summary.total_bytes));
}

pub fn print_report(report: &DownloadReport) {
    println!();
    println!(
        "{}",
        format!(
            "Downloaded: {}  Skipped: {}  Failed: {}",
            report.downloaded, report.skipped, report.failed
        )
        .green()
    );
    if report.failed > 0 {
        println!(
            "{}",
            "Some downloads failed; rerun to retry them (completed files are skipped).".yellow()
        );
    }
}
