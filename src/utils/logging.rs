//! Logging bootstrap
//!
//! The plugin only emits `tracing` events. Hosts that do not install their
//! own subscriber can call [`init_logging`] from their entry point.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "dash_shield=debug,tauri=info";

/// Install a fmt subscriber filtered by `RUST_LOG` or `default_filter`.
///
/// Returns `false` when a global subscriber was already set.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    let installed = subscriber(filter, std::io::stdout).try_init().is_ok();

    if installed {
        tracing::info!("Dash Shield logging initialized (v{})", env!("CARGO_PKG_VERSION"));
    }

    installed
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
}
