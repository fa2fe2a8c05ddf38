use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `STATEBUS_LOG` (a file path) is set or the
/// config names a file; writing to the terminal would corrupt the TUI.
/// `RUST_LOG` overrides the configured filter.
///
/// Log files get unique names, `{path}.{timestamp}.{pid}`, so concurrent
/// instances never share one.
pub fn init_tracing(config: &LoggingConfig) {
    let base = std::env::var("STATEBUS_LOG")
        .ok()
        .or_else(|| config.file.as_ref().map(|p| p.display().to_string()));
    let Some(base) = base else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = unique_log_path(&base, timestamp, std::process::id());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, timestamp, pid)
}
