#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::fs;
use std::path;

use anyhow::Result;
use clap::Command;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub const DEFAULT_LOG_DIRECTIVE: &str = "slang_term=info";

pub fn build() -> Command {
    return Command::new("slang-term")
        .about("Look up slang terms on Urban Dictionary from your terminal.")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .after_help("Type a term and press Enter to search. Press CTRL+C to quit.");
}

/// Writes JSON logs to the configured log file so the terminal stays clean.
/// The returned guard flushes pending lines when dropped.
pub fn setup_tracing() -> Result<WorkerGuard> {
    let log_path = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let log_dir = log_path
        .parent()
        .map(|e| e.to_path_buf())
        .unwrap_or_else(|| path::PathBuf::from("."));
    fs::create_dir_all(&log_dir)?;

    let file_name = log_path
        .file_name()
        .map(|e| e.to_os_string())
        .unwrap_or_else(|| "debug.log".into());
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::new(DEFAULT_LOG_DIRECTIVE);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()?;

    tracing::info!(log_file = %log_path.display(), "tracing initialized");
    return Ok(guard);
}

pub fn parse() -> clap::ArgMatches {
    return build().get_matches();
}
