use colored::*;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const PRINT_INTERVAL: Duration = Duration::from_millis(250);

/// Single-line percentage progress for one transfer. Updates are throttled
/// so concurrent tasks do not flood the terminal.
pub struct Progress {
    label: String,
    total: i64,
    last_print: Instant,
}

impl Progress {
    pub fn new(label: &str, total: i64) -> Self {
        println!("{}", format!("Downloading {}", label).cyan());
        Self {
            label: label.to_string(),
            total,
            last_print: Instant::now(),
        }
    }

    pub fn update(&mut self, written: u64) {
        if self.last_print.elapsed() < PRINT_INTERVAL {
            return;
        }
        self.last_print = Instant::now();
        print!(
            "\r{}: {}%",
            self.label,
            percent_complete(written, self.total)
        );
        let _ = io::stdout().flush();
    }

    pub fn finish(&mut self, written: u64) {
        println!(
            "\r{}: {}%",
            self.label,
            percent_complete(written, self.total)
        );
        let _ = io::stdout().flush();
    }
}

/// Percentage of `total` written, clamped to 0-100. An unknown total counts
/// as complete.
pub fn percent_complete(written: u64, total: i64) -> u8 {
    if total <= 0 {
        return 100;
    }
    let pct = written.saturating_mul(100) / total as u64;
    pct.min(100) as u8
}

/// Elapsed-time throughput, or None when the transfer was too fast to
/// measure.
pub fn format_speed(bytes: u64, elapsed: Duration) -> Option<String> {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        Some(format!("{:.2} KB/s", bytes as f64 / 1024.0 / secs))
    } else {
        None
    }
}
