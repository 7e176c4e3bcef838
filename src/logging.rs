use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sketchpad=info";

/// Installs the global fmt subscriber; `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    // A subscriber may already be installed by an embedding application or test harness.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
