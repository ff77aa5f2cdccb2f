use crate::cli::Args;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_CONCURRENCY: usize = 4;

pub struct Config {
    pub session: Option<String>,
    pub concurrency: usize,
    pub download_dir: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadConfig {
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default)]
    pub concurrency: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: None,
            verbose: None,
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            dir: None,
            concurrency: None,
        }
    }
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Self {
        let file_config = FileConfig::load().unwrap_or_default();

        // Session name: CLI args > env var > config file; None means prompt
        let session = args
            .session
            .clone()
            .or_else(|| env::var("TG_SESSION").ok())
            .or(file_config.session.name.clone());

        // Concurrency: CLI args > env var > config file > default, never zero
        let concurrency = args
            .concurrency
            .or_else(|| {
                env::var("TG_CONCURRENCY")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
            })
            .or(file_config.download.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY)
            .max(1);

        // Download dir: CLI args > env var > config file; None means prompt
        let download_dir = args
            .download_dir
            .clone()
            .or_else(|| env::var("TG_DOWNLOAD_DIR").ok())
            .or(file_config.download.dir.clone())
            .map(PathBuf::from);

        // Verbose: CLI flag > env var > config file > default
        let verbose = args.verbose
            || env::var("TG_VERBOSE")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
                .or(file_config.session.verbose)
                .unwrap_or(false);

        Config {
            session,
            concurrency,
            download_dir,
            verbose,
        }
    }
}

impl FileConfig {
    pub fn load() -> Result<Self> {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists() {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

                let config: FileConfig = if path.extension().and_then(|s| s.to_str())
                    == Some("yaml")
                    || path.extension().and_then(|s| s.to_str()) == Some("yml")
                {
                    serde_yaml::from_str(&contents).with_context(|| {
                        format!("Failed to parse YAML config file: {}", path.display())
                    })?
                } else {
                    serde_json::from_str(&contents).with_context(|| {
                        format!("Failed to parse JSON config file: {}", path.display())
                    })?
                };

                return Ok(config);
            }
        }

        // No config file found, return default
        Ok(FileConfig::default())
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory (highest priority - local override)
        paths.push(PathBuf::from(".tgrab.yaml"));
        paths.push(PathBuf::from(".tgrab.yml"));
        paths.push(PathBuf::from(".tgrab.json"));

        // 2. User's config directory (global config)
        if let Some(home_dir) = dirs::home_dir() {
            let config_dir = home_dir.join(".config").join("tgrab");
            paths.push(config_dir.join("tgrab.yaml"));
            paths.push(config_dir.join("tgrab.yml"));
            paths.push(config_dir.join("tgrab.json"));
        }

        paths
    }
}
