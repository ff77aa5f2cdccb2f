pub mod cli;
pub mod config;
pub mod credentials;
pub mod download;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod select;
pub mod telegram;
pub mod ui;
