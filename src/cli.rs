use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tgrab")]
#[command(about = "Interactive Telegram channel media downloader", long_about = None)]
pub struct Args {
    #[arg(
        short = 's',
        long = "session",
        help = "Session name to authenticate with (prompted if omitted)"
    )]
    pub session: Option<String>,

    #[arg(
        long = "new-login",
        help = "Ignore stored credentials and go through the login flow again"
    )]
    pub new_login: bool,

    #[arg(
        long = "clear",
        help = "Delete all stored credentials and session files"
    )]
    pub clear_sessions: bool,

    #[arg(
        short = 'j',
        long = "concurrency",
        help = "Maximum number of simultaneous downloads"
    )]
    pub concurrency: Option<usize>,

    #[arg(
        short = 'd',
        long = "download-dir",
        help = "Directory to download files into (prompted if omitted)"
    )]
    pub download_dir: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostic output")]
    pub verbose: bool,
}
