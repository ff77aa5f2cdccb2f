use crate::error::Result;
use colored::*;
use std::io::{self, Write};
use std::path::PathBuf;

/// Print a prompt, read one line from stdin, and return it trimmed.
pub fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn prompt_nonempty(label: &str) -> Result<String> {
    loop {
        let value = prompt_line(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("{}", "Input cannot be empty.".yellow());
    }
}

/// Prompt until the input parses as a positive integer.
pub fn prompt_api_id(label: &str) -> Result<i32> {
    loop {
        let value = prompt_line(label)?;
        match value.parse::<i32>() {
            Ok(id) if id > 0 => return Ok(id),
            _ => println!("{}", "Please enter a positive number.".yellow()),
        }
    }
}

/// Prompt until the input is a valid 1-based index into a list of `len`
/// entries; returns it zero-based.
pub fn prompt_index(label: &str, len: usize) -> Result<usize> {
    loop {
        let value = prompt_line(label)?;
        match value.parse::<usize>() {
            Ok(n) if n >= 1 && n <= len => return Ok(n - 1),
            Ok(_) => println!(
                "{}",
                "Invalid selection. Please enter a valid number.".yellow()
            ),
            Err(_) => println!("{}", "Invalid input. Please enter a number.".yellow()),
        }
    }
}

/// Read a line without echoing it.
pub fn prompt_password(label: &str) -> Result<String> {
    Ok(rpassword::prompt_password(label)?)
}

/// Prompt for a filesystem path, stripping surrounding quotes as shells
/// and file managers like to add them.
pub fn prompt_path(label: &str) -> Result<PathBuf> {
    let value = prompt_nonempty(label)?;
    Ok(PathBuf::from(value.trim_matches(|c| c == '\'' || c == '"')))
}

pub fn confirm(label: &str) -> Result<bool> {
    let value = prompt_line(label)?;
    Ok(matches!(value.to_lowercase().as_str(), "y" | "yes"))
}
