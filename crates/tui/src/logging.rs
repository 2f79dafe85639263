//! Tracing setup for the interactive and headless surfaces.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// The terminal belongs to the UI, so interactive sessions log to a file.
pub fn init_file_tracing(path: &Path, filter: Option<String>) -> Result<()> {
    let file = open_log_file(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}

pub fn init_stderr_tracing(filter: Option<String>) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

fn env_filter(filter: Option<String>) -> Result<EnvFilter> {
    let filter = filter.unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
    let directive: Directive = filter
        .parse()
        .with_context(|| format!("invalid log directive '{}'", filter))?;
    Ok(EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file at {}", path.display()))
}
