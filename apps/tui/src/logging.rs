use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Logs to stderr; used when no terminal UI owns the screen.
pub fn init_stderr(verbose: u8) {
    fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs to `log_file` while the terminal UI is active, otherwise stays silent.
pub fn init_for_terminal(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
