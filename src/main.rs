use clap::Parser;
use colored::*;
use std::process;

use tgrab::cli::Args;
use tgrab::config::Config;
use tgrab::credentials;
use tgrab::download;
use tgrab::models::FileRecord;
use tgrab::select::expand_selection;
use tgrab::telegram::client::{chat_title, clear_sessions, list_group_dialogs};
use tgrab::telegram::{auth, history};
use tgrab::ui::{output, prompt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Handle --clear option
    if args.clear_sessions {
        match clear_stored_state() {
            Ok(_) => {
                println!("{}", "All stored credentials and sessions cleared.".green());
                return Ok(());
            }
            Err(e) => {
                eprintln!("{}", format!("Error clearing sessions: {}", e).red());
                process::exit(1);
            }
        }
    }

    let config = Config::from_env_and_args(&args);

    let session = match &config.session {
        Some(name) => name.clone(),
        None => prompt::prompt_nonempty("Enter a name for your session: ")?,
    };

    let client = match auth::authorize(&session, args.new_login, config.verbose).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };
    println!("{}", "Signed in - listing channels and groups".green());

    let chats = list_group_dialogs(&client).await?;
    if chats.is_empty() {
        println!("No channels or groups found.");
        return Ok(());
    }

    output::print_dialogs(&chats);
    let index = prompt::prompt_index("\nSelect a channel or group by number: ", chats.len())?;
    let chat = &chats[index];
    println!("Selected: {}\n", chat_title(chat).cyan());

    if config.verbose {
        output::verbose_log("scanning history for documents");
    }
    let summary = history::scan_documents(&client, chat, config.verbose).await?;
    if summary.is_empty() {
        println!("No files found in this chat.");
        return Ok(());
    }

    output::print_scan(&summary);

    let known_ids = summary.ids();
    let selected_ids = loop {
        let input = prompt::prompt_line(
            "\nEnter 'all' to download all files, a comma-separated id list, or a range (e.g. 110-120): ",
        )?;
        match expand_selection(&input, &known_ids) {
            Ok(ids) => break ids,
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    };

    let selected: Vec<FileRecord> = summary
        .files
        .iter()
        .filter(|f| selected_ids.contains(&f.message_id))
        .cloned()
        .collect();
    let selected_bytes: i64 = selected.iter().map(|f| f.size).sum();
    println!("\nTotal number of files to download: {}", selected.len());
    println!(
        "Total size of download: {}\n",
        output::format_mb_gb(selected_bytes)
    );

    let download_dir = match &config.download_dir {
        Some(dir) => dir.clone(),
        None => prompt::prompt_path("Enter the download path: ")?,
    };
    std::fs::create_dir_all(&download_dir)?;

    if config.verbose {
        output::verbose_log(&format!(
            "downloading {} files to {} with concurrency {}",
            selected.len(),
            download_dir.display(),
            config.concurrency
        ));
    }

    let report =
        download::run_downloads(&client, chat, selected, &download_dir, config.concurrency).await;
    output::print_report(&report);

    Ok(())
}

fn clear_stored_state() -> Result<(), Box<dyn std::error::Error>> {
    credentials::clear_all()?;
    clear_sessions()?;
    Ok(())
}
