use std::{fs::File, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::trace;
use tracing_subscriber::{prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_FILTER: &str = "forca=info";

/// Installs a file-backed subscriber. The TUI owns stdout, so without a log
/// file nothing is installed and events are dropped.
pub fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(env_filter()?)
        .try_init()
        .context("tracing subscriber already installed")?;

    trace!("finished");
    Ok(())
}

fn env_filter() -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(DEFAULT_FILTER).context("invalid default log filter"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(init_tracing(None).is_ok());
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let err = init_tracing(Some(Path::new("/definitely/not/here/forca.log"))).unwrap_err();
        assert!(err.to_string().contains("failed to create log file"));
    }
}
