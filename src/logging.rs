use std::path::Path;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "luz=info";

/// Send tracing output to `path`. The TUI owns the terminal, so logs never go
/// to stdout or stderr. `RUST_LOG` overrides the default filter.
pub fn init_file_logging(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging init: {}", e))?;
    Ok(())
}
